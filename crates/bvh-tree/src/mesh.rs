//! Triangle meshes as consumed by the BVH builder.

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::Triangle;

/// An indexed triangle mesh.
///
/// The mesh owns its vertex buffer; each face is an ordered triple of
/// indices into it. Triangles handed out by [`Mesh::triangle`] borrow their
/// corners from the buffer instead of copying them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
    faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Creates a mesh from a vertex buffer and a face list.
    ///
    /// Fails if any face references a vertex outside the buffer.
    pub fn new(vertices: Vec<Point3<f32>>, faces: Vec<[usize; 3]>) -> Result<Self> {
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&vertex) = indices.iter().find(|&&v| v >= vertices.len()) {
                return Err(MeshError::VertexOutOfRange {
                    face,
                    vertex,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self { vertices, faces })
    }

    /// Creates a mesh from free-standing triangles.
    ///
    /// Every triangle gets three vertices of its own; shared corners are not
    /// merged.
    pub fn from_triangles(triangles: impl IntoIterator<Item = [Point3<f32>; 3]>) -> Self {
        let mut mesh = Self::default();
        for corners in triangles {
            let base = mesh.vertices.len();
            mesh.vertices.extend(corners);
            mesh.faces.push([base, base + 1, base + 2]);
        }
        mesh
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the triangle at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.triangle_count()`.
    pub fn triangle(&self, index: usize) -> Triangle<'_> {
        let [a, b, c] = self.faces[index];
        Triangle::new(&self.vertices[a], &self.vertices[b], &self.vertices[c])
    }

    /// Iterates over all triangles in face order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle<'_>> + '_ {
        (0..self.faces.len()).map(move |i| self.triangle(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_faces() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices, vec![[0, 1, 2], [1, 3, 2]]).unwrap();

        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_empty());

        let [a, b, c] = mesh.triangle(1).vertices();
        assert_eq!(*a, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(*b, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(*c, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn triangles_borrow_shared_vertices() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let mesh = Mesh::new(vertices, vec![[0, 1, 2], [2, 1, 0]]).unwrap();
        let first = mesh.triangle(0).vertices();
        let second = mesh.triangle(1).vertices();

        assert!(std::ptr::eq(first[0], second[2]));
    }

    #[test]
    fn new_rejects_out_of_range_vertex() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let err = Mesh::new(vertices, vec![[0, 1, 0], [0, 1, 5]]).unwrap_err();

        assert_eq!(
            err,
            MeshError::VertexOutOfRange {
                face: 1,
                vertex: 5,
                vertex_count: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "face 1 references vertex 5, but the mesh has only 2 vertices"
        );
    }

    #[test]
    fn from_triangles_appends_vertices() {
        let mesh = Mesh::from_triangles([
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            [
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
        ]);

        assert_eq!(mesh.vertices().len(), 6);
        assert_eq!(mesh.faces(), &[[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mesh.triangles().len(), 2);
    }

    #[test]
    fn empty_mesh() {
        let mesh = Mesh::new(Vec::new(), Vec::new()).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangles().count(), 0);
    }
}
