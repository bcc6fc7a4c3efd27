//! Triangle views into a shared vertex buffer.

use nalgebra::Point3;

use crate::Aabb;

/// A triangle whose three corners are borrowed from a mesh's vertex buffer.
///
/// Derived quantities (centroid, bounding box) are computed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<'a> {
    vertices: [&'a Point3<f32>; 3],
}

impl<'a> Triangle<'a> {
    /// Creates a new triangle from three point references.
    pub fn new(a: &'a Point3<f32>, b: &'a Point3<f32>, c: &'a Point3<f32>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three corners of the triangle.
    #[inline]
    pub fn vertices(&self) -> [&'a Point3<f32>; 3] {
        self.vertices
    }

    /// Computes the centroid (arithmetic mean of the corners).
    pub fn centroid(&self) -> Point3<f32> {
        let [a, b, c] = self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Computes the tight axis-aligned bounding box of the corners.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(self.vertices)
    }
}
