//! Binned surface area heuristic.
//!
//! For one node the splitter bins triangle centroids along the node's longest
//! axis, sweeps prefix and suffix costs over the bins, and picks the cheapest
//! plane between two bins. [`partition`] then reorders the node's triangle
//! ids in place so that the left side comes first.

use nalgebra::Point3;

use crate::{Aabb, Axis};

use super::cache::BuildCache;
use super::options::BuildOptions;

/// Number of equal-width bins along the split axis.
pub const BIN_COUNT: usize = 12;

/// Guards the bin mapping against zero-width axes and keeps the upper bound
/// inside the last bin.
const BIN_EPSILON: f32 = 10.0 * f32::EPSILON;

/// Linear map from a centroid coordinate to a bin index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Binning {
    axis: Axis,
    k0: f32,
    k1: f32,
}

impl Binning {
    /// Sets up binning along the longest axis of `bounds`.
    ///
    /// Returns `None` if that axis is too short to be binned, i.e. all
    /// geometry in the node effectively coincides.
    pub fn new(bounds: &Aabb) -> Option<Self> {
        let extent = bounds.extent();
        let axis = Axis::largest(&extent);
        let span = extent[axis.index()];

        (span > BIN_EPSILON).then(|| Self {
            axis,
            k0: bounds.low()[axis.index()],
            k1: BIN_COUNT as f32 * (1.0 - BIN_EPSILON) / span,
        })
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Maps a centroid to its bin.
    ///
    /// A centroid rounded past the node's upper bound lands in the last bin.
    #[inline]
    pub fn bin_of(&self, centroid: &Point3<f32>) -> usize {
        let bin = (self.k1 * (centroid[self.axis.index()] - self.k0)) as usize;
        bin.min(BIN_COUNT - 1)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Bin {
    bounds: Aabb,
    count: usize,
}

impl Bin {
    fn absorb(&mut self, other: &Bin) {
        self.bounds += other.bounds;
        self.count += other.count;
    }

    fn cost(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.count as f32 * self.bounds.surface_area()
        }
    }
}

/// The chosen split plane of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitPlan {
    pub binning: Binning,
    /// Triangles in bins `0..=split_bin` go left.
    pub split_bin: usize,
    pub left_count: usize,
    /// Estimated cost of the split, traversal cost included.
    pub cost: f32,
    /// Cost of keeping the node as a leaf.
    pub self_cost: f32,
}

impl SplitPlan {
    #[inline]
    pub fn goes_left(&self, centroid: &Point3<f32>) -> bool {
        self.binning.bin_of(centroid) <= self.split_bin
    }
}

/// Decides whether the node holding `indices` within `bounds` is split.
///
/// Returns `None` if the node stays a leaf: too few triangles, degenerate
/// extent, no candidate leaving enough triangles on both sides, or no
/// candidate strictly cheaper than the leaf. Nodes above the configured
/// maximum skip the last test.
pub(crate) fn plan_split(
    cache: &BuildCache,
    indices: &[usize],
    bounds: &Aabb,
    options: &BuildOptions,
) -> Option<SplitPlan> {
    let count = indices.len();
    if count == 0 || count < options.min_tris_per_leaf() {
        return None;
    }

    let binning = Binning::new(bounds)?;

    let mut bins = [Bin::default(); BIN_COUNT];
    for &triangle in indices {
        let entry = &cache[triangle];
        let bin = &mut bins[binning.bin_of(&entry.centroid)];
        bin.count += 1;
        bin.bounds += entry.bounds;
    }

    // left[i] covers bins 0..=i, right[i] covers bins i..BIN_COUNT
    let mut left = [Bin::default(); BIN_COUNT];
    let mut right = [Bin::default(); BIN_COUNT];

    let mut acc = Bin::default();
    for (sweep, bin) in left.iter_mut().zip(&bins) {
        acc.absorb(bin);
        *sweep = acc;
    }

    let mut acc = Bin::default();
    for (sweep, bin) in right.iter_mut().zip(&bins).rev() {
        acc.absorb(bin);
        *sweep = acc;
    }

    let min_side = options.min_side();
    let mut best: Option<(usize, f32)> = None;

    for i in 0..BIN_COUNT - 1 {
        let (lhs, rhs) = (&left[i], &right[i + 1]);
        if lhs.count < min_side || rhs.count < min_side {
            continue;
        }

        let cost = lhs.cost() + rhs.cost();
        if best.is_none_or(|(_, best_cost)| cost < best_cost) {
            best = Some((i, cost));
        }
    }

    let (split_bin, cost) = best?;
    let cost = cost + options.traversal_cost();
    let self_cost = bounds.surface_area() * count as f32;

    if cost < self_cost || options.exceeds_max(count) {
        Some(SplitPlan {
            binning,
            split_bin,
            left_count: left[split_bin].count,
            cost,
            self_cost,
        })
    } else {
        None
    }
}

/// Reorders `indices` so that every triangle on the left side of `plan`
/// comes first, and returns the size of the left side together with the
/// merged boxes of both sides.
///
/// Two cursors walk inwards from both ends; only pairs that sit on the
/// wrong side are swapped.
pub(crate) fn partition(
    cache: &BuildCache,
    indices: &mut [usize],
    plan: &SplitPlan,
) -> (usize, Aabb, Aabb) {
    let mut left_bounds = Aabb::empty();
    let mut right_bounds = Aabb::empty();
    let mut lo = 0;
    let mut hi = indices.len();

    loop {
        while lo < hi && plan.goes_left(&cache[indices[lo]].centroid) {
            left_bounds += cache[indices[lo]].bounds;
            lo += 1;
        }

        while lo < hi && !plan.goes_left(&cache[indices[hi - 1]].centroid) {
            right_bounds += cache[indices[hi - 1]].bounds;
            hi -= 1;
        }

        if lo >= hi {
            break;
        }

        indices.swap(lo, hi - 1);
        left_bounds += cache[indices[lo]].bounds;
        right_bounds += cache[indices[hi - 1]].bounds;
        lo += 1;
        hi -= 1;
    }

    debug_assert_eq!(lo, plan.left_count, "partition disagrees with binning");

    (lo, left_bounds, right_bounds)
}
