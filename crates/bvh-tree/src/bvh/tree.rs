//! BVH container and construction.

use std::ops::Range;

use log::{debug, trace};

use crate::{Aabb, Mesh};

use super::cache::BuildCache;
use super::node::BvhNode;
use super::options::BuildOptions;
use super::split::{partition, plan_split};
use super::visitor::{BvhVisitor, CollectingVisitor, Leaf};

/// A bounding volume hierarchy over the triangles of a [`Mesh`].
///
/// The tree is built once, top-down, with the binned surface area heuristic
/// and is immutable afterwards; a changed mesh needs a new tree.
///
/// # Construction
///
/// ```ignore
/// use bvh_tree::{BuildOptions, BvhTree, Mesh};
///
/// let mesh: Mesh = /* ... */;
/// let tree = BvhTree::build(&mesh, BuildOptions::default().with_max_tris_per_leaf(8));
/// ```
///
/// # Leaves
///
/// The tree keeps one buffer of triangle ids, permuted during the build so
/// that every node covers a contiguous range of it. Leaves are walked with a
/// [`BvhVisitor`]:
///
/// ```ignore
/// tree.traverse(&mut FnVisitor::new(|bounds, triangles| { /* ... */ }));
/// ```
#[derive(Debug, Clone)]
pub struct BvhTree {
    root: BvhNode,
    indices: Vec<usize>,
    options: BuildOptions,
}

impl BvhTree {
    /// Builds a BVH over every triangle of `mesh`.
    ///
    /// The result depends only on the mesh and the options; building twice
    /// yields identical trees. An empty mesh gives a single empty leaf.
    pub fn build(mesh: &Mesh, options: BuildOptions) -> Self {
        let cache = BuildCache::new(mesh);
        let mut indices = cache.root_indices();
        let root = build_node(&cache, &mut indices, cache.bounds(), 0..cache.len(), &options);

        let tree = Self {
            root,
            indices,
            options,
        };

        debug!(
            "Built BVH over {} triangles: {} nodes, {} leaves, depth {}, cost {}",
            tree.triangle_count(),
            tree.node_count(),
            tree.leaf_count(),
            tree.depth(),
            tree.cost()
        );

        tree
    }

    /// Builds a BVH using [`BuildOptions::default`].
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self::build(mesh, BuildOptions::default())
    }

    /// Returns the tight box around all triangles.
    #[inline]
    pub fn bounding_box(&self) -> Aabb {
        self.root.bounds()
    }

    /// Returns the realized SAH cost of the tree (lower is better).
    pub fn cost(&self) -> f32 {
        self.root.cost()
    }

    /// Returns the options the tree was built with.
    #[inline]
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    #[inline]
    pub fn root(&self) -> &BvhNode {
        &self.root
    }

    /// Returns the number of triangles in the tree.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Returns the maximum depth of the tree (1 for a single leaf).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns the ids of the triangles below `node`.
    ///
    /// # Panics
    /// May panic if `node` belongs to a different tree.
    pub fn triangles(&self, node: &BvhNode) -> &[usize] {
        &self.indices[node.triangle_range()]
    }

    /// Visits every leaf, depth first and left before right.
    pub fn traverse<V: BvhVisitor>(&self, visitor: &mut V) {
        traverse_node(self, &self.root, visitor);
    }

    /// Collects all leaves in traversal order.
    pub fn collect_leaves(&self) -> Vec<Leaf> {
        let mut visitor = CollectingVisitor::new();
        self.traverse(&mut visitor);
        visitor.into_leaves()
    }
}

/// Recursively builds the node covering `range` of `indices`.
fn build_node(
    cache: &BuildCache,
    indices: &mut [usize],
    bounds: Aabb,
    range: Range<usize>,
    options: &BuildOptions,
) -> BvhNode {
    let mut node = BvhNode::leaf(bounds, range.clone());

    let slice = &mut indices[range.clone()];
    let Some(plan) = plan_split(cache, slice, &bounds, options) else {
        return node;
    };

    let (mid, left_bounds, right_bounds) = partition(cache, slice, &plan);

    trace!(
        "Splitting {} triangles along {:?} after bin {}: {} left, {} right, cost {} vs. {}",
        range.len(),
        plan.binning.axis(),
        plan.split_bin,
        mid,
        range.len() - mid,
        plan.cost,
        plan.self_cost
    );

    let mid = range.start + mid;
    let left = build_node(cache, indices, left_bounds, range.start..mid, options);
    let right = build_node(cache, indices, right_bounds, mid..range.end, options);
    node.set_children(left, right);

    node
}

fn traverse_node<V: BvhVisitor>(tree: &BvhTree, node: &BvhNode, visitor: &mut V) {
    match node.children() {
        Some((left, right)) => {
            traverse_node(tree, left, visitor);
            traverse_node(tree, right, visitor);
        }
        None => visitor.visit(&node.bounds(), tree.triangles(node)),
    }
}
