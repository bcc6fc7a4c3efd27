//! Error types for mesh construction.

use thiserror::Error;

/// Errors raised while assembling a [`Mesh`](crate::Mesh).
///
/// Building a BVH over a valid mesh cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A face refers to a vertex that is not in the vertex buffer.
    #[error("face {face} references vertex {vertex}, but the mesh has only {vertex_count} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },
}

pub type Result<T, E = MeshError> = std::result::Result<T, E>;
