//! BVH node implementation.

use std::ops::Range;

use crate::Aabb;

/// A node in the BVH.
///
/// Every node owns its bounding box and a contiguous range into the tree's
/// triangle index buffer. Internal nodes own exactly two children whose
/// ranges partition the parent's range; only leaves reference triangles
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub struct BvhNode {
    /// Tight box around every triangle in `range`.
    bounds: Aabb,

    /// Slice of the tree's index buffer covered by this node.
    range: Range<usize>,

    /// Left and right subtrees, present together or not at all.
    children: Option<[Box<BvhNode>; 2]>,
}

impl BvhNode {
    /// Creates a leaf covering `range`.
    pub(crate) fn leaf(bounds: Aabb, range: Range<usize>) -> Self {
        Self {
            bounds,
            range,
            children: None,
        }
    }

    /// Turns the node into an internal node.
    ///
    /// The children must split the node's range at one point.
    pub(crate) fn set_children(&mut self, left: BvhNode, right: BvhNode) {
        debug_assert_eq!(left.range.start, self.range.start);
        debug_assert_eq!(left.range.end, right.range.start);
        debug_assert_eq!(right.range.end, self.range.end);
        self.children = Some([Box::new(left), Box::new(right)]);
    }

    /// Returns the node's bounding box.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Returns the node's range in the tree's triangle index buffer.
    ///
    /// Use [`BvhTree::triangles`](super::BvhTree::triangles) to resolve it.
    #[inline]
    pub fn triangle_range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the number of triangles in this subtree.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.range.len()
    }

    /// Checks if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns the left and right subtrees of an internal node.
    #[inline]
    pub fn children(&self) -> Option<(&BvhNode, &BvhNode)> {
        self.children
            .as_ref()
            .map(|[left, right]| (&**left, &**right))
    }

    #[inline]
    pub fn left(&self) -> Option<&BvhNode> {
        self.children().map(|(left, _)| left)
    }

    #[inline]
    pub fn right(&self) -> Option<&BvhNode> {
        self.children().map(|(_, right)| right)
    }

    /// Realized SAH cost of this subtree.
    ///
    /// A leaf costs its surface area times its triangle count; an internal
    /// node costs the sum of its children.
    pub fn cost(&self) -> f32 {
        match self.children() {
            Some((left, right)) => left.cost() + right.cost(),
            None => self.bounds.surface_area() * self.triangle_count() as f32,
        }
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        self.children()
            .map_or(0, |(left, right)| left.depth().max(right.depth()))
            + 1
    }

    /// Returns the number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        self.children()
            .map_or(0, |(left, right)| left.node_count() + right.node_count())
            + 1
    }

    /// Returns the number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.children()
            .map_or(1, |(left, right)| left.leaf_count() + right.leaf_count())
    }
}
