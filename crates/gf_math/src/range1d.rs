use glam::DVec2;

use crate::range::impl_range1;
use crate::Range1f;

impl_range1! {
    /// Basic type: 1-dimensional double precision range.
    ///
    /// A closed interval `[min, max]` whose operations conform to interval
    /// arithmetic. The range is empty when `min > max`; the default value is
    /// the empty range `[FLT_MAX, -FLT_MAX]`.
    ///
    /// Equality is exact (no epsilon), which keeps `Range1d` usable as a
    /// hash map key.
    Range1d, f64, DVec2, f32::MAX as f64
}

/// Compare against a single precision range by widening its bounds to `f64`.
/// The values must match exactly.
impl PartialEq<Range1f> for Range1d {
    fn eq(&self, other: &Range1f) -> bool {
        self.min == f64::from(other.min) && self.max == f64::from(other.max)
    }
}
