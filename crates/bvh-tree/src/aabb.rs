//! Axis-aligned bounding boxes.

use std::ops::{Add, AddAssign};

use nalgebra::{Point3, Vector3};

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the axis with the largest component of `extent`.
    ///
    /// Ties are resolved in the fixed priority X, then Y, then Z.
    pub fn largest(extent: &Vector3<f32>) -> Self {
        if extent.x >= extent.y && extent.x >= extent.z {
            Axis::X
        } else if extent.y >= extent.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Component index of this axis (0, 1 or 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// An axis-aligned bounding box given by its `low` and `high` corners.
///
/// The empty box has `low = +inf` and `high = -inf` on every axis, so merging
/// it with any other box returns that box unchanged. Merging is associative
/// and commutative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    low: Point3<f32>,
    high: Point3<f32>,
}

impl Aabb {
    /// Creates the empty box, the identity for [`Aabb::merge`].
    pub fn empty() -> Self {
        Self {
            low: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            high: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Creates a box from its two corners.
    ///
    /// # Panics
    /// Panics if `low` exceeds `high` on any axis.
    pub fn new(low: Point3<f32>, high: Point3<f32>) -> Self {
        assert!(
            low.x <= high.x && low.y <= high.y && low.z <= high.z,
            "Box corners out of order: low={low:?} high={high:?}"
        );
        Self { low, high }
    }

    /// Smallest box containing all given points (empty for no points).
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3<f32>>) -> Self {
        points.into_iter().fold(Self::empty(), |bb, p| bb + *p)
    }

    #[inline]
    pub fn low(&self) -> Point3<f32> {
        self.low
    }

    #[inline]
    pub fn high(&self) -> Point3<f32> {
        self.high
    }

    /// Returns `true` for a box that contains no point at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low.x > self.high.x || self.low.y > self.high.y || self.low.z > self.high.z
    }

    /// Size of the box along each axis.
    ///
    /// Meaningless for the empty box, where every component is `-inf`.
    #[inline]
    pub fn extent(&self) -> Vector3<f32> {
        self.high - self.low
    }

    /// Surface area, `2 * (dx*dy + dx*dz + dy*dz)`.
    ///
    /// Zero for flat and empty boxes, never negative.
    pub fn surface_area(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let e = self.extent();
        2.0 * (e.x * e.y + e.x * e.z + e.y * e.z)
    }

    /// Componentwise min of the lows and max of the highs.
    #[inline]
    pub fn merge(&self, other: &Aabb) -> Aabb {
        Aabb {
            low: self.low.inf(&other.low),
            high: self.high.sup(&other.high),
        }
    }

    /// Extends the box so that it contains `point`.
    #[inline]
    pub fn grow(&mut self, point: Point3<f32>) {
        self.low = self.low.inf(&point);
        self.high = self.high.sup(&point);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Add for Aabb {
    type Output = Aabb;

    fn add(self, rhs: Aabb) -> Aabb {
        self.merge(&rhs)
    }
}

impl AddAssign for Aabb {
    fn add_assign(&mut self, rhs: Aabb) {
        *self = self.merge(&rhs);
    }
}

impl Add<Point3<f32>> for Aabb {
    type Output = Aabb;

    fn add(mut self, rhs: Point3<f32>) -> Aabb {
        self.grow(rhs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn empty_box_is_merge_identity() {
        let bb = unit_box();
        assert_eq!(Aabb::empty() + bb, bb);
        assert_eq!(bb + Aabb::empty(), bb);
        assert!((Aabb::empty() + Aabb::empty()).is_empty());
    }

    #[test]
    fn merge_is_commutative() {
        let a = unit_box();
        let b = Aabb::new(Point3::new(-2.0, 0.5, 3.0), Point3::new(-1.0, 4.0, 5.0));
        assert_eq!(a + b, b + a);
        assert_eq!((a + b).low(), Point3::new(-2.0, 0.0, 0.0));
        assert_eq!((a + b).high(), Point3::new(1.0, 4.0, 5.0));
    }

    #[test]
    fn surface_area_of_boxes() {
        assert_eq!(unit_box().surface_area(), 6.0);

        let slab = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 1.0, 1.0));
        assert_eq!(slab.surface_area(), 18.0);

        let flat = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0));
        assert_eq!(flat.surface_area(), 2.0);

        let point = Aabb::from_points(&[Point3::new(3.0, 3.0, 3.0)]);
        assert_eq!(point.surface_area(), 0.0);
        assert_eq!(Aabb::empty().surface_area(), 0.0);
    }

    #[test]
    fn from_points_is_tight() {
        let points = [
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(0.0, 2.0, 0.5),
            Point3::new(-3.0, 0.0, 0.25),
        ];
        let bb = Aabb::from_points(&points);
        assert_eq!(bb.low(), Point3::new(-3.0, -1.0, 0.0));
        assert_eq!(bb.high(), Point3::new(1.0, 2.0, 0.5));
    }

    #[test]
    #[should_panic]
    fn new_rejects_inverted_corners() {
        Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn largest_axis_prefers_x_then_y() {
        assert_eq!(Axis::largest(&Vector3::new(1.0, 1.0, 1.0)), Axis::X);
        assert_eq!(Axis::largest(&Vector3::new(0.5, 1.0, 1.0)), Axis::Y);
        assert_eq!(Axis::largest(&Vector3::new(0.5, 0.5, 1.0)), Axis::Z);
        assert_eq!(Axis::largest(&Vector3::new(0.0, 0.0, 0.0)), Axis::X);
    }
}
