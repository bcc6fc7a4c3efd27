//! Tunable thresholds for BVH construction.

/// Options consumed by the SAH splitter.
///
/// The defaults are a traversal cost of `0`, at least one triangle per leaf,
/// and no upper bound on leaf size:
///
/// ```
/// use bvh_tree::BuildOptions;
///
/// let options = BuildOptions::default()
///     .with_traversal_cost(1.0)
///     .with_max_tris_per_leaf(8);
/// assert_eq!(options.min_tris_per_leaf(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildOptions {
    traversal_cost: f32,
    min_tris_per_leaf: usize,
    max_tris_per_leaf: Option<usize>,
}

impl BuildOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost added to every split candidate before comparing it against
    /// keeping the node as a leaf. `f32::INFINITY` disables splitting.
    ///
    /// # Panics
    /// Panics if `cost` is negative or NaN.
    pub fn with_traversal_cost(mut self, cost: f32) -> Self {
        assert!(cost >= 0.0, "Traversal cost must be non-negative, got {cost}");
        self.traversal_cost = cost;
        self
    }

    /// Smallest number of triangles a split may leave on either side.
    ///
    /// # Panics
    /// Panics if `min` exceeds the configured maximum.
    pub fn with_min_tris_per_leaf(mut self, min: usize) -> Self {
        if let Some(max) = self.max_tris_per_leaf {
            assert!(min <= max, "Leaf minimum {min} exceeds leaf maximum {max}");
        }
        self.min_tris_per_leaf = min;
        self
    }

    /// Nodes with more triangles than `max` are split even when the split
    /// does not lower the SAH cost, as long as any split candidate exists.
    ///
    /// # Panics
    /// Panics if `max` is below the configured minimum.
    pub fn with_max_tris_per_leaf(mut self, max: usize) -> Self {
        assert!(
            self.min_tris_per_leaf <= max,
            "Leaf maximum {max} is below leaf minimum {}",
            self.min_tris_per_leaf
        );
        self.max_tris_per_leaf = Some(max);
        self
    }

    #[inline]
    pub fn traversal_cost(&self) -> f32 {
        self.traversal_cost
    }

    #[inline]
    pub fn min_tris_per_leaf(&self) -> usize {
        self.min_tris_per_leaf
    }

    /// `None` means leaves are unbounded.
    #[inline]
    pub fn max_tris_per_leaf(&self) -> Option<usize> {
        self.max_tris_per_leaf
    }

    /// Returns `true` if a node with `count` triangles must be split.
    #[inline]
    pub(crate) fn exceeds_max(&self, count: usize) -> bool {
        self.max_tris_per_leaf.is_some_and(|max| count > max)
    }

    /// Smallest side a split candidate may produce; never zero.
    #[inline]
    pub(crate) fn min_side(&self) -> usize {
        self.min_tris_per_leaf.max(1)
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            traversal_cost: 0.0,
            min_tris_per_leaf: 1,
            max_tris_per_leaf: None,
        }
    }
}
