use alloc::collections::{btree_set, BTreeSet};
use core::fmt::{self, Debug};
use core::iter::FusedIterator;
use core::ops::Bound;

use tracing::{debug, trace};

use crate::{Interval, InvalidIntervalError};

#[cfg(feature = "serde1")]
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, Serializer},
};


/// A set of integers stored as disjoint half-open [`Interval`]s.
///
/// Inserting an interval that overlaps stored intervals replaces them all
/// with their common hull. Intervals that only _touch_ (one ends exactly
/// where the other begins) stay separate members, so `[0, 5)` and `[5, 9)`
/// remain two entries until something overlapping both arrives.
///
/// Members are kept sorted by `begin`. Because no two members overlap,
/// their ends are sorted too.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SeparateIntervalSet {
    bts: BTreeSet<Interval>,
}

/// Ascending iterator over the members of a [`SeparateIntervalSet`].
pub type Iter<'a> = btree_set::Iter<'a, Interval>;

impl SeparateIntervalSet {
    /// Makes a new empty `SeparateIntervalSet`.
    pub fn new() -> Self {
        SeparateIntervalSet {
            bts: BTreeSet::new(),
        }
    }

    /// Builds a set by inserting every interval in turn.
    ///
    /// Stops at the first empty or reversed interval and returns its error.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, InvalidIntervalError>
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut set = SeparateIntervalSet::new();
        set.try_extend(iter)?;
        Ok(set)
    }

    /// Number of disjoint members.
    pub fn len(&self) -> usize {
        self.bts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bts.is_empty()
    }

    /// Total number of points covered by all members.
    pub fn covered_len(&self) -> u64 {
        // Members are disjoint, so this can't exceed the width of `i64`.
        self.bts.iter().map(Interval::len).sum()
    }

    /// Gets an iterator over all members, ordered by `begin`.
    pub fn iter(&self) -> Iter<'_> {
        self.bts.iter()
    }

    pub fn first(&self) -> Option<&Interval> {
        self.bts.first()
    }

    pub fn last(&self) -> Option<&Interval> {
        self.bts.last()
    }

    /// Returns the member covering `point`, if any.
    pub fn get(&self, point: i64) -> Option<&Interval> {
        // The only member that could contain the point is the last one
        // that begins at or before it.
        self.bts
            .range(..=Interval::new(point, i64::MAX))
            .next_back()
            .filter(|member| member.contains(point))
    }

    /// Returns `true` if any member covers `point`.
    pub fn contains(&self, point: i64) -> bool {
        self.get(point).is_some()
    }

    /// Gets an iterator over the members that overlap `query`, in order.
    ///
    /// An empty or reversed `query` overlaps nothing.
    pub fn overlapping(&self, query: Interval) -> Overlapping<'_> {
        if query.is_empty() {
            return Overlapping { query, inner: None };
        }

        // At most one member begins before the query and still reaches
        // into it: the last one that begins before it.
        let query_begin = Interval::new(query.begin(), i64::MIN);
        let start = self
            .bts
            .range(..query_begin)
            .next_back()
            .filter(|member| member.overlaps(&query))
            .copied()
            .unwrap_or(query_begin);

        Overlapping {
            query,
            inner: Some(self.bts.range(start..)),
        }
    }

    /// Inserts an interval, merging it with every member it overlaps.
    ///
    /// Members that merely touch the new interval are left alone. If the
    /// interval lies wholly inside an existing member, the set is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalError`] without touching the set if
    /// `begin >= end`.
    pub fn insert(&mut self, interval: Interval) -> Result<(), InvalidIntervalError> {
        if let Err(err) = interval.validate() {
            debug!(%interval, "refusing to insert interval covering no points");
            return Err(err);
        }

        let mut hull = interval;

        // Members sorting after the new interval. Starting from the upper
        // bound, each one either overlaps the growing hull or ends the run;
        // disjointness means nothing further along can overlap after that.
        let after = self.absorb_while_overlapping(&mut hull, |bts| {
            bts.range((Bound::Excluded(interval), Bound::Unbounded))
                .next()
                .copied()
        });

        // Everything between `interval` and the forward stop point is gone,
        // so walking back from there means walking back from `interval`.
        // A member equal to `interval` is picked up here too.
        let before = self.absorb_while_overlapping(&mut hull, |bts| {
            bts.range(..=interval).next_back().copied()
        });

        // The hull now fills exactly the gap between the two stop points.
        self.bts.insert(hull);

        trace!(
            %interval,
            %hull,
            absorbed = before + after,
            members = self.bts.len(),
            "inserted interval"
        );
        Ok(())
    }

    /// Like [`insert`](Self::insert), taking the bounds directly.
    pub fn insert_range(&mut self, begin: i64, end: i64) -> Result<(), InvalidIntervalError> {
        self.insert(Interval::new(begin, end))
    }

    /// Inserts every interval in turn, stopping at the first invalid one.
    ///
    /// Intervals before the invalid one stay inserted.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), InvalidIntervalError>
    where
        I: IntoIterator<Item = Interval>,
    {
        iter.into_iter()
            .try_for_each(|interval| self.insert(interval))
    }

    // Repeatedly asks `next_candidate` for the next member in scan order,
    // folding it into `hull` and removing it while it overlaps. The lookup
    // is redone after every removal instead of holding an iterator across
    // it. Returns how many members were absorbed.
    fn absorb_while_overlapping<F>(&mut self, hull: &mut Interval, mut next_candidate: F) -> usize
    where
        F: FnMut(&BTreeSet<Interval>) -> Option<Interval>,
    {
        let mut absorbed = 0;
        while let Some(candidate) = next_candidate(&self.bts) {
            if !hull.overlaps(&candidate) {
                break;
            }
            *hull = hull.hull(&candidate);
            self.bts.remove(&candidate);
            absorbed += 1;
        }
        absorbed
    }

    /// Panics if any of the set's structural invariants are broken.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        for member in self.iter() {
            assert!(!member.is_empty(), "empty member {}", member);
        }
        let members: alloc::vec::Vec<&Interval> = self.iter().collect();
        for pair in members.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a < b, "members out of order: {} then {}", a, b);
            assert!(a.end() <= b.begin(), "members overlap: {} and {}", a, b);
        }
    }
}

pub struct IntoIter {
    inner: btree_set::IntoIter<Interval>,
}

impl IntoIterator for SeparateIntervalSet {
    type Item = Interval;
    type IntoIter = IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.bts.into_iter(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = Interval;
    fn next(&mut self) -> Option<Interval> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Interval> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl<'a> IntoIterator for &'a SeparateIntervalSet {
    type Item = &'a Interval;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// We can't just derive this automatically, because that would
// expose irrelevant (and private) implementation details.
// Instead implement it in the same way that the underlying BTreeSet does.
impl Debug for SeparateIntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a [`SeparateIntervalSet`] that overlap a
/// query interval. See [`SeparateIntervalSet::overlapping`].
pub struct Overlapping<'a> {
    query: Interval,
    inner: Option<btree_set::Range<'a, Interval>>,
}

impl<'a> Iterator for Overlapping<'a> {
    type Item = &'a Interval;

    fn next(&mut self) -> Option<Self::Item> {
        let member = self.inner.as_mut()?.next();
        match member {
            Some(member) if member.begin() < self.query.end() => Some(member),
            _ => {
                // Past the end of the query; nothing later can overlap.
                self.inner = None;
                None
            }
        }
    }
}

impl<'a> FusedIterator for Overlapping<'a> {}

#[cfg(feature = "serde1")]
impl Serialize for SeparateIntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.bts.len()))?;
        for interval in self.bts.iter() {
            seq.serialize_element(interval)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde1")]
impl<'de> Deserialize<'de> for SeparateIntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeparateIntervalSetVisitor)
    }
}

#[cfg(feature = "serde1")]
struct SeparateIntervalSetVisitor;

#[cfg(feature = "serde1")]
impl<'de> Visitor<'de> for SeparateIntervalSetVisitor {
    type Value = SeparateIntervalSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of [begin, end) pairs")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        use serde::de::Error;
        // Re-insert rather than trusting the input to already be
        // sorted and disjoint.
        let mut set = SeparateIntervalSet::new();
        while let Some(interval) = access.next_element::<Interval>()? {
            set.insert(interval).map_err(A::Error::custom)?;
        }
        Ok(set)
    }
}
