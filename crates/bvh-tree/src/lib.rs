//! BVH (Bounding Volume Hierarchy) construction for triangle meshes.

mod aabb;
pub mod bvh;
mod error;
mod mesh;
mod triangle;

pub use aabb::{Aabb, Axis};
pub use bvh::{BuildOptions, BvhNode, BvhTree, BvhVisitor, CollectingVisitor, FnVisitor, Leaf};
pub use error::{MeshError, Result};
pub use mesh::Mesh;
pub use triangle::Triangle;
