//! GF Math - 1-dimensional range types for geometry code.
//!
//! This crate provides:
//!
//! - **`Range1d`**: closed interval `[min, max]` over `f64`
//! - **`Range1f`**: the same interval over `f32`
//!
//! Both follow interval arithmetic and treat `min > max` as empty. The
//! default range is the empty `[FLT_MAX, -FLT_MAX]`, so it can seed a
//! running union.
//!
//! # Example
//!
//! ```
//! use gf_math::Range1d;
//!
//! let mut bounds = Range1d::default();
//! for t in [3.0, -1.0, 2.0] {
//!     bounds.union_with(t);
//! }
//! assert_eq!(bounds, Range1d::new(-1.0, 3.0));
//! assert_eq!(bounds * -2.0, Range1d::new(-6.0, 2.0));
//! ```

// Re-export the glam vectors the ranges convert to
pub use glam::{DVec2, Vec2};

pub mod error;
mod range;
mod range1d;
mod range1f;

pub use error::{RangeError, RangeResult};
pub use range1d::Range1d;
pub use range1f::Range1f;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_are_plain_values() {
        fn assert_value_type<T: Copy + Send + Sync + Default + 'static>() {}
        assert_value_type::<Range1d>();
        assert_value_type::<Range1f>();

        assert_eq!(std::mem::size_of::<Range1d>(), 16);
        assert_eq!(std::mem::size_of::<Range1f>(), 8);
    }
}
