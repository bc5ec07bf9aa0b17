use core::cmp::{max, min};
use core::fmt;
use core::ops::Range;

use crate::InvalidIntervalError;

#[cfg(feature = "serde1")]
use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

/// A half-open interval of integers bounded inclusively below and
/// exclusively above, `[begin, end)`.
///
/// Intervals are plain values. Nothing stops you from building an empty
/// (`begin == end`) or reversed (`begin > end`) one, but a
/// [`SeparateIntervalSet`](crate::SeparateIntervalSet) will refuse to
/// store it.
///
/// Intervals order by `begin`, then by `end`. This is the key the set
/// sorts its members by.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Interval {
    // Field order matters: the derived `Ord` is lexicographic.
    begin: i64,
    end: i64,
}

impl Interval {
    /// Makes `[begin, end)` exactly as given, without normalizing.
    pub const fn new(begin: i64, end: i64) -> Self {
        Interval { begin, end }
    }

    /// Makes the interval spanning `a` and `b`, swapping them if they
    /// arrive in reverse order.
    ///
    /// The result is still empty if `a == b`.
    pub fn normalized(a: i64, b: i64) -> Self {
        Interval {
            begin: min(a, b),
            end: max(a, b),
        }
    }

    pub const fn begin(&self) -> i64 {
        self.begin
    }

    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Number of points covered; zero for empty or reversed intervals.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            // Can't overflow: the difference of two `i64`s fits in a `u64`
            // whenever it is non-negative.
            self.end.abs_diff(self.begin)
        }
    }

    /// Returns `true` if the interval covers no points.
    pub const fn is_empty(&self) -> bool {
        self.begin >= self.end
    }

    /// Returns `true` if `point` lies within `[begin, end)`.
    pub const fn contains(&self, point: i64) -> bool {
        self.begin <= point && point < self.end
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Intervals that only meet at a boundary, like `[0, 5)` and `[5, 9)`,
    /// do _not_ overlap.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        // Strictly less than, because ends are excluded.
        self.begin < other.end && other.begin < self.end
    }

    /// Returns `true` if one interval ends exactly where the other begins.
    pub const fn touches(&self, other: &Interval) -> bool {
        self.end == other.begin || other.end == self.begin
    }

    /// Smallest interval containing both `self` and `other`.
    ///
    /// Gaps between the two are swallowed as well, so only call this on
    /// intervals you actually mean to fuse.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            begin: min(self.begin, other.begin),
            end: max(self.end, other.end),
        }
    }

    /// Checks that the interval covers at least one point.
    pub(crate) fn validate(&self) -> Result<(), InvalidIntervalError> {
        if self.begin == self.end {
            Err(InvalidIntervalError::Empty { at: self.begin })
        } else if self.begin > self.end {
            Err(InvalidIntervalError::Reversed {
                begin: self.begin,
                end: self.end,
            })
        } else {
            Ok(())
        }
    }
}

impl From<Range<i64>> for Interval {
    fn from(range: Range<i64>) -> Self {
        Interval::new(range.start, range.end)
    }
}

impl From<Interval> for Range<i64> {
    fn from(interval: Interval) -> Self {
        interval.begin..interval.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

// Same rendering as `Display`; the field names add nothing.
impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "serde1")]
impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.begin, self.end).serialize(serializer)
    }
}

#[cfg(feature = "serde1")]
impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (begin, end) = <(i64, i64)>::deserialize(deserializer)?;
        Ok(Interval::new(begin, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn orders_by_begin_then_end() {
        assert!(Interval::new(1, 9) < Interval::new(2, 3));
        assert!(Interval::new(2, 3) < Interval::new(2, 4));
        assert_eq!(Interval::new(2, 4), Interval::new(2, 4));
    }

    #[test]
    fn touching_is_not_overlapping() {
        // 0 1 2 3 4 5 6 7 8 9
        // ●---------◌ ◌ ◌ ◌ ◌
        // ◌ ◌ ◌ ◌ ◌ ●-------◌
        let a = Interval::new(0, 5);
        let b = Interval::new(5, 9);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.touches(&b));
        assert!(b.touches(&a));
    }

    #[test]
    fn one_point_in_common_is_overlapping() {
        let a = Interval::new(0, 5);
        let b = Interval::new(4, 9);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.touches(&b));
    }

    #[test]
    fn containment_overlaps() {
        let outer = Interval::new(0, 10);
        let inner = Interval::new(3, 4);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert_eq!(outer.hull(&inner), outer);
    }

    #[test]
    fn hull_spans_gap() {
        let a = Interval::new(0, 2);
        let b = Interval::new(7, 9);
        assert_eq!(a.hull(&b), Interval::new(0, 9));
        assert_eq!(b.hull(&a), Interval::new(0, 9));
    }

    #[test]
    fn contains_excludes_end() {
        let interval = Interval::new(-3, 2);
        assert!(interval.contains(-3));
        assert!(interval.contains(1));
        assert!(!interval.contains(2));
        assert!(!interval.contains(-4));
    }

    #[test]
    fn normalized_swaps_reversed_bounds() {
        assert_eq!(Interval::normalized(7, 3), Interval::new(3, 7));
        assert_eq!(Interval::normalized(3, 7), Interval::new(3, 7));
        assert!(Interval::normalized(4, 4).is_empty());
    }

    #[test]
    fn len_of_extremes() {
        assert_eq!(Interval::new(i64::MIN, i64::MAX).len(), u64::MAX);
        assert_eq!(Interval::new(5, 5).len(), 0);
        assert_eq!(Interval::new(7, 3).len(), 0);
        assert_eq!(Interval::new(-2, 3).len(), 5);
    }

    #[test]
    fn validate_rejects_empty_and_reversed() {
        assert_eq!(Interval::new(0, 1).validate(), Ok(()));
        assert_eq!(
            Interval::new(5, 5).validate(),
            Err(InvalidIntervalError::Empty { at: 5 })
        );
        assert_eq!(
            Interval::new(7, 3).validate(),
            Err(InvalidIntervalError::Reversed { begin: 7, end: 3 })
        );
    }

    #[test]
    fn converts_to_and_from_range() {
        let interval: Interval = (2..8).into();
        assert_eq!(interval, Interval::new(2, 8));
        let range: Range<i64> = interval.into();
        assert_eq!(range, 2..8);
    }

    #[test]
    fn debug_and_display_look_half_open() {
        let interval = Interval::new(-1, 4);
        assert_eq!(format!("{}", interval), "[-1, 4)");
        assert_eq!(format!("{:?}", interval), "[-1, 4)");
    }
}
