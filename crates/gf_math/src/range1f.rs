use glam::Vec2;

use crate::range::impl_range1;
use crate::Range1d;

impl_range1! {
    /// Basic type: 1-dimensional single precision range.
    ///
    /// Same semantics as [`Range1d`] over `f32`. The two types never convert
    /// into each other implicitly; they only compare for equality.
    Range1f, f32, Vec2, f32::MAX
}

/// Compare against a double precision range by widening this range's bounds
/// to `f64`. The values must match exactly.
impl PartialEq<Range1d> for Range1f {
    fn eq(&self, other: &Range1d) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_default_is_canonical_empty() {
        let range = Range1f::default();
        assert!(range.is_empty());
        assert_eq!(range.min, f32::MAX);
        assert_eq!(range.max, -f32::MAX);
    }

    #[test]
    fn test_contains_and_outside() {
        let range = Range1f::new(2.0, 5.0);
        assert!(range.contains(2.0));
        assert!(range.contains(5.0));
        assert!(!range.contains(1.0));
        assert!(range.contains(Range1f::new(3.0, 4.0)));

        let wide = Range1f::new(0.0, 10.0);
        assert!(!wide.contains(Range1f::EMPTY));
        assert!(!wide.contains(Range1f::new(20.0, 5.0)));

        let unit = Range1f::new(0.0, 1.0);
        assert!(unit.is_outside(Range1f::new(2.0, 3.0)));
        assert!(!unit.is_outside(Range1f::new(1.0, 2.0)));
    }

    #[test]
    fn test_union_and_intersection() {
        let a = Range1f::new(0.0, 2.0);
        let b = Range1f::new(1.0, 4.0);

        assert_eq!(a.union(b), Range1f::new(0.0, 4.0));
        assert_eq!(a.intersection(b), Range1f::new(1.0, 2.0));
        assert!(a.intersection(Range1f::new(3.0, 4.0)).is_empty());

        let mut c = a;
        c.union_with(Range1f::EMPTY);
        assert_eq!(c, a);
    }

    #[test]
    fn test_arithmetic() {
        let a = Range1f::new(1.0, 2.0);
        let b = Range1f::new(3.0, 5.0);

        assert_eq!(a + b, Range1f::new(4.0, 7.0));
        assert_eq!(a - b, Range1f::new(-4.0, -1.0));
        assert_eq!(a * -1.0, Range1f::new(-2.0, -1.0));
        assert_eq!(a * 0.0, Range1f::new(0.0, 0.0));
        assert_eq!(a / 0.5, Range1f::new(2.0, 4.0));
        assert_eq!(a / 0.0, Range1f::new(f32::INFINITY, f32::INFINITY));
    }

    #[test]
    fn test_distance_squared() {
        let range = Range1f::new(0.0, 10.0);
        assert_eq!(range.distance_squared(15.0), 25.0);
        assert_eq!(range.distance_squared(5.0), 0.0);
    }

    #[test]
    fn test_matches_double_precision_hash() {
        // Equal across precisions means equal hashes too.
        let single = Range1f::new(0.5, -0.0);
        let double = Range1d::new(0.5, 0.0);
        assert_eq!(single, double);
        assert_eq!(hash_of(&single), hash_of(&double));
    }

    #[test]
    fn test_display_round_trip() {
        let range = Range1f::new(0.1, 3.25);
        assert_eq!(range.to_string(), "[0.1...3.25]");
        assert_eq!("[0.1...3.25]".parse::<Range1f>(), Ok(range));
        assert_eq!(Range1f::EMPTY.to_string().parse::<Range1f>(), Ok(Range1f::EMPTY));
    }

    #[test]
    fn test_glam_conversion() {
        let range = Range1f::from(Vec2::new(0.0, 1.0));
        assert_eq!(range, Range1f::new(0.0, 1.0));
        assert_eq!(Vec2::from(range), Vec2::new(0.0, 1.0));
    }
}
