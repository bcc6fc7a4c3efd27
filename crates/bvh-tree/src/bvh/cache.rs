//! Per-triangle scratch data for a single build.

use nalgebra::Point3;

use crate::{Aabb, Mesh};

/// Precomputed bounding box and centroid of one triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BuildEntry {
    pub bounds: Aabb,
    pub centroid: Point3<f32>,
}

/// Side table of [`BuildEntry`]s indexed by triangle id.
///
/// Created once per build and never mutated afterwards; nodes only ever
/// shuffle triangle ids, not the entries themselves.
#[derive(Debug)]
pub(crate) struct BuildCache {
    entries: Vec<BuildEntry>,
    bounds: Aabb,
}

impl BuildCache {
    pub fn new(mesh: &Mesh) -> Self {
        let mut bounds = Aabb::empty();
        let entries = mesh
            .triangles()
            .map(|triangle| {
                let entry = BuildEntry {
                    bounds: triangle.bounding_box(),
                    centroid: triangle.centroid(),
                };
                bounds += entry.bounds;
                entry
            })
            .collect();

        Self { entries, bounds }
    }

    /// Merged box of every triangle in the mesh.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Initial working index list, `0..len`.
    pub fn root_indices(&self) -> Vec<usize> {
        (0..self.entries.len()).collect()
    }
}

impl std::ops::Index<usize> for BuildCache {
    type Output = BuildEntry;

    #[inline]
    fn index(&self, triangle: usize) -> &BuildEntry {
        &self.entries[triangle]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_triangle_order() {
        let mesh = Mesh::from_triangles([
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(3.0, 0.0, 0.0),
                Point3::new(0.0, 3.0, 0.0),
            ],
            [
                Point3::new(5.0, 5.0, 5.0),
                Point3::new(8.0, 5.0, 5.0),
                Point3::new(5.0, 8.0, 8.0),
            ],
        ]);
        let cache = BuildCache::new(&mesh);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache[0].centroid, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(cache[1].centroid, Point3::new(6.0, 6.0, 6.0));
        assert_eq!(cache[1].bounds, mesh.triangle(1).bounding_box());
        assert_eq!(cache.root_indices(), vec![0, 1]);

        assert_eq!(cache.bounds().low(), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(cache.bounds().high(), Point3::new(8.0, 8.0, 8.0));
    }

    #[test]
    fn empty_mesh_gives_empty_cache() {
        let cache = BuildCache::new(&Mesh::default());
        assert_eq!(cache.len(), 0);
        assert!(cache.bounds().is_empty());
        assert!(cache.root_indices().is_empty());
    }
}
