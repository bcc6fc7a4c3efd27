//! Bounding volume hierarchy over triangle meshes.
//!
//! The builder partitions a mesh's triangles into a binary tree of
//! axis-aligned boxes using the binned surface area heuristic (SAH), so that
//! a later ray tracer can skip most of the scene per query.
//!
//! # Example
//!
//! ```
//! use bvh_tree::{BuildOptions, BvhTree, Mesh};
//! use nalgebra::Point3;
//!
//! let mesh = Mesh::from_triangles([
//!     [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
//!     [Point3::new(9.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0), Point3::new(9.0, 1.0, 0.0)],
//! ]);
//!
//! let tree = BvhTree::build(&mesh, BuildOptions::default());
//! assert_eq!(tree.leaf_count(), 2);
//! assert!(tree.cost() < tree.bounding_box().surface_area() * 2.0);
//! ```
//!
//! # Architecture
//!
//! - [`BvhTree`]: The container holding the root node and the triangle id buffer
//! - [`BvhNode`]: Nodes storing a bounding box and a range of triangle ids
//! - [`BuildOptions`]: Thresholds consumed by the SAH splitter
//! - [`BvhVisitor`]: Visitor trait for walking the leaves

mod cache;
mod node;
mod options;
mod split;
mod tree;
mod visitor;

// Re-export main types
pub use node::BvhNode;
pub use options::BuildOptions;
pub use split::BIN_COUNT;
pub use tree::BvhTree;
pub use visitor::{BvhVisitor, CollectingVisitor, FnVisitor, Leaf};
