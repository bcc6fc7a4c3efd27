//! Visitor pattern for walking BVH leaves.
//!
//! Visitors let a downstream traversal or export step consume the leaf
//! partition without coupling the tree walk to a specific use case.

use crate::Aabb;

/// Visitor for processing leaves during a tree walk.
pub trait BvhVisitor {
    /// Called once per leaf with its box and the ids of its triangles.
    fn visit(&mut self, bounds: &Aabb, triangles: &[usize]);
}

/// One leaf as recorded by [`CollectingVisitor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub bounds: Aabb,
    pub triangles: Vec<usize>,
}

/// A simple visitor that collects all visited leaves.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Leaf>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected leaves.
    pub fn into_leaves(self) -> Vec<Leaf> {
        self.collected
    }

    /// Returns a reference to the collected leaves.
    pub fn leaves(&self) -> &[Leaf] {
        &self.collected
    }
}

impl BvhVisitor for CollectingVisitor {
    fn visit(&mut self, bounds: &Aabb, triangles: &[usize]) {
        self.collected.push(Leaf {
            bounds: *bounds,
            triangles: triangles.to_vec(),
        });
    }
}

/// A visitor that calls a closure for each leaf.
pub struct FnVisitor<F>
where
    F: FnMut(&Aabb, &[usize]),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&Aabb, &[usize]),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BvhVisitor for FnVisitor<F>
where
    F: FnMut(&Aabb, &[usize]),
{
    fn visit(&mut self, bounds: &Aabb, triangles: &[usize]) {
        (self.func)(bounds, triangles);
    }
}
