//! Shared machinery for the 1-dimensional range types.
//!
//! `Range1d` and `Range1f` are the same closed interval `[min, max]` over two
//! scalar precisions, so both are generated by [`impl_range1!`]. All
//! operations follow interval arithmetic. A range is empty when `min > max`,
//! and nothing enforces `min <= max`: callers may build inverted ranges on
//! purpose.

use std::hash::Hasher;
use std::str::FromStr;

use crate::error::{RangeError, RangeResult};

/// Feed one bound into `state`, with `-0.0` folded onto `0.0` so that bounds
/// comparing equal always hash equal.
#[inline]
pub(crate) fn hash_bound<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    state.write_u64(value.to_bits());
}

/// Split a `[min...max]` literal into its two bounds.
pub(crate) fn parse_bounds<T: FromStr>(text: &str) -> RangeResult<(T, T)> {
    let literal = text.trim();
    let inner = literal
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| RangeError::MissingBrackets(literal.to_string()))?;
    let (min, max) = inner
        .split_once("...")
        .ok_or_else(|| RangeError::MissingSeparator(literal.to_string()))?;

    Ok((parse_bound(min)?, parse_bound(max)?))
}

fn parse_bound<T: FromStr>(text: &str) -> RangeResult<T> {
    let text = text.trim();
    text.parse::<T>()
        .map_err(|_| RangeError::InvalidNumber(text.to_string()))
}

/// Define a closed 1-D range type over a float scalar.
///
/// `$flt_max` is the magnitude of the canonical empty sentinel and `$Vec2` is
/// the glam vector of the same precision.
macro_rules! impl_range1 {
    (
        $(#[$meta:meta])*
        $Range:ident, $Scalar:ty, $Vec2:ty, $flt_max:expr
    ) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $Range {
            pub min: $Scalar,
            pub max: $Scalar,
        }

        impl $Range {
            /// The canonical empty range `[FLT_MAX, -FLT_MAX]`.
            ///
            /// A union with it is a no-op, and repeated unions grow a range
            /// monotonically from it.
            pub const EMPTY: $Range = $Range {
                min: $flt_max,
                max: -$flt_max,
            };

            /// A range that contains every finite value.
            pub const UNIVERSE: $Range = $Range {
                min: <$Scalar>::NEG_INFINITY,
                max: <$Scalar>::INFINITY,
            };

            /// Create a new range. No validation is done, so `min > max`
            /// builds an empty range.
            pub const fn new(min: $Scalar, max: $Scalar) -> Self {
                Self { min, max }
            }

            /// Create the degenerate range `[p, p]`.
            pub const fn point(p: $Scalar) -> Self {
                Self { min: p, max: p }
            }

            /// Create the canonical empty range.
            pub const fn empty() -> Self {
                Self::EMPTY
            }

            /// Get the minimum bound.
            ///
            /// Note: Since `min` is public, you can also access it directly.
            #[inline]
            pub fn min(&self) -> $Scalar {
                self.min
            }

            /// Get the maximum bound.
            ///
            /// Note: Since `max` is public, you can also access it directly.
            #[inline]
            pub fn max(&self) -> $Scalar {
                self.max
            }

            #[inline]
            pub fn set_min(&mut self, min: $Scalar) {
                self.min = min;
            }

            #[inline]
            pub fn set_max(&mut self, max: $Scalar) {
                self.max = max;
            }

            /// Returns the size of the range (max - min). Negative when empty.
            pub fn size(&self) -> $Scalar {
                self.max - self.min
            }

            /// Returns the point halfway between the bounds.
            pub fn midpoint(&self) -> $Scalar {
                0.5 * self.min + 0.5 * self.max
            }

            /// Returns true if the range is empty (min > max).
            pub fn is_empty(&self) -> bool {
                self.min > self.max
            }

            /// Reset to the canonical empty range.
            pub fn set_empty(&mut self) {
                *self = Self::EMPTY;
            }

            /// Returns true if `other` lies entirely inside this range.
            ///
            /// Bounds are inclusive, so a point on either bound is contained.
            /// Accepts a scalar point or another range.
            pub fn contains(&self, other: impl Into<Self>) -> bool {
                let other = other.into();
                self.contains_point(other.min) && self.contains_point(other.max)
            }

            #[inline]
            fn contains_point(&self, p: $Scalar) -> bool {
                self.min <= p && p <= self.max
            }

            /// Returns true if `other` lies entirely outside this range.
            ///
            /// Touching bounds count as overlap. This is not the negation of
            /// [`Self::contains`]: partially overlapping ranges are neither.
            pub fn is_outside(&self, other: impl Into<Self>) -> bool {
                let other = other.into();
                other.max < self.min || other.min > self.max
            }

            /// Returns true if the ranges share at least one point.
            pub fn overlaps(&self, other: impl Into<Self>) -> bool {
                !self.is_outside(other)
            }

            /// Returns the smallest range containing both `self` and `other`.
            ///
            /// A bound of `self` is only replaced when `other`'s compares
            /// further out, so NaN bounds on `self` are kept.
            pub fn union(self, other: impl Into<Self>) -> Self {
                let other = other.into();
                let mut result = self;
                if other.min < result.min {
                    result.min = other.min;
                }
                if other.max > result.max {
                    result.max = other.max;
                }
                result
            }

            /// Extend this range to include `other`.
            pub fn union_with(&mut self, other: impl Into<Self>) -> &mut Self {
                *self = self.union(other);
                self
            }

            /// Returns the intersection of `self` and `other`.
            ///
            /// Disjoint inputs produce an empty range.
            pub fn intersection(self, other: impl Into<Self>) -> Self {
                let other = other.into();
                let mut result = self;
                if other.min > result.min {
                    result.min = other.min;
                }
                if other.max < result.max {
                    result.max = other.max;
                }
                result
            }

            /// Shrink this range to its intersection with `other`.
            pub fn intersect_with(&mut self, other: impl Into<Self>) -> &mut Self {
                *self = self.intersection(other);
                self
            }

            /// Move both bounds by `offset`.
            pub fn translate(&self, offset: $Scalar) -> Self {
                Self::new(self.min + offset, self.max + offset)
            }

            /// Clamps x to be within the range [min, max].
            ///
            /// Unlike `f64::clamp` this never panics on an empty range.
            pub fn clamp(&self, x: $Scalar) -> $Scalar {
                x.max(self.min).min(self.max)
            }

            /// Squared distance from `p` to the nearest point of the range.
            ///
            /// Zero when `p` is inside or on a bound.
            pub fn distance_squared(&self, p: $Scalar) -> $Scalar {
                let d = if p < self.min {
                    self.min - p
                } else if p > self.max {
                    p - self.max
                } else {
                    0.0
                };
                d * d
            }

            /// Divide by `m`, reporting division by zero instead of
            /// propagating infinities like the `/` operator does.
            pub fn checked_div(self, m: $Scalar) -> $crate::error::RangeResult<Self> {
                if m == 0.0 {
                    return Err($crate::error::RangeError::DivisionByZero);
                }
                Ok(self / m)
            }
        }

        impl Default for $Range {
            fn default() -> Self {
                Self::EMPTY
            }
        }

        impl From<$Scalar> for $Range {
            fn from(p: $Scalar) -> Self {
                Self::point(p)
            }
        }

        impl From<&$Range> for $Range {
            fn from(range: &$Range) -> Self {
                *range
            }
        }

        impl From<$Vec2> for $Range {
            fn from(v: $Vec2) -> Self {
                Self::new(v.x, v.y)
            }
        }

        impl From<$Range> for $Vec2 {
            fn from(range: $Range) -> Self {
                <$Vec2>::new(range.min, range.max)
            }
        }

        // Exact bound equality makes this a usable map key; NaN bounds are not.
        impl Eq for $Range {}

        impl std::hash::Hash for $Range {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::range::hash_bound(f64::from(self.min), state);
                $crate::range::hash_bound(f64::from(self.max), state);
            }
        }

        impl std::ops::Add for $Range {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::new(self.min + rhs.min, self.max + rhs.max)
            }
        }

        impl std::ops::AddAssign for $Range {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::Sub for $Range {
            type Output = Self;

            /// Interval difference: the bounds cross.
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.min - rhs.max, self.max - rhs.min)
            }
        }

        impl std::ops::SubAssign for $Range {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::Mul<$Scalar> for $Range {
            type Output = Self;

            /// Scaling by a non-positive factor swaps the bounds.
            fn mul(self, m: $Scalar) -> Self {
                if m > 0.0 {
                    Self::new(self.min * m, self.max * m)
                } else {
                    Self::new(self.max * m, self.min * m)
                }
            }
        }

        impl std::ops::Mul<$Range> for $Scalar {
            type Output = $Range;

            fn mul(self, range: $Range) -> $Range {
                range * self
            }
        }

        impl std::ops::MulAssign<$Scalar> for $Range {
            fn mul_assign(&mut self, m: $Scalar) {
                *self = *self * m;
            }
        }

        impl std::ops::Div<$Scalar> for $Range {
            type Output = Self;

            /// Multiplies by `1 / m`. Division by zero is not guarded.
            fn div(self, m: $Scalar) -> Self {
                self * (1.0 / m)
            }
        }

        impl std::ops::DivAssign<$Scalar> for $Range {
            fn div_assign(&mut self, m: $Scalar) {
                *self = *self / m;
            }
        }

        impl std::fmt::Display for $Range {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "[{}...{}]", self.min, self.max)
            }
        }

        impl std::str::FromStr for $Range {
            type Err = $crate::error::RangeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (min, max) = $crate::range::parse_bounds::<$Scalar>(s)
                    .inspect_err(|err| log::debug!("Rejected range literal {:?}: {}", s, err))?;
                Ok(Self::new(min, max))
            }
        }
    };
}

pub(crate) use impl_range1;
