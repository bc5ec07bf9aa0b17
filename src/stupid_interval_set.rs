use alloc::{collections::BTreeSet, vec::Vec};

use super::{Interval, SeparateIntervalSet};

// A simple but slow version of `SeparateIntervalSet` for testing.
//
// It just remembers every interval it is given and only works out the
// members when asked, by sorting everything and sweeping once. It knows
// nothing about the incremental merge, which is the point.
#[derive(Debug, Default)]
pub struct StupidIntervalSet {
    raw: Vec<Interval>,
}

impl StupidIntervalSet {
    pub fn new() -> StupidIntervalSet {
        StupidIntervalSet { raw: Vec::new() }
    }

    // Callers filter out empty intervals themselves, like the
    // real set's callers must.
    pub fn insert(&mut self, interval: Interval) {
        assert!(!interval.is_empty());
        self.raw.push(interval);
    }

    // Merge overlapping intervals, keep touching ones separate.
    pub fn to_vec(&self) -> Vec<Interval> {
        let mut sorted = self.raw.clone();
        sorted.sort();

        let mut members = Vec::new();
        let mut sorted = sorted.into_iter();
        let Some(mut current) = sorted.next() else {
            return members;
        };
        for next in sorted {
            // `next` begins no earlier than `current`, so overlapping
            // just means beginning before it ends.
            if next.begin() < current.end() {
                current = current.hull(&next);
            } else {
                members.push(current);
                current = next;
            }
        }
        members.push(current);
        members
    }
}

// Every individual point covered. Only sensible for small intervals,
// and blind to the difference between touching and merged members.
pub fn covered_points<'a>(intervals: impl IntoIterator<Item = &'a Interval>) -> BTreeSet<i64> {
    intervals
        .into_iter()
        .flat_map(|interval| interval.begin()..interval.end())
        .collect()
}

impl From<&SeparateIntervalSet> for StupidIntervalSet {
    fn from(set: &SeparateIntervalSet) -> Self {
        let mut stupid = Self::new();
        for interval in set.iter() {
            stupid.insert(*interval);
        }
        stupid
    }
}

#[test]
fn sweep_keeps_touching_apart() {
    let mut stupid = StupidIntervalSet::new();
    stupid.insert(Interval::new(10, 15));
    stupid.insert(Interval::new(5, 10));
    stupid.insert(Interval::new(12, 20));
    assert_eq!(
        stupid.to_vec(),
        alloc::vec![Interval::new(5, 10), Interval::new(10, 20)]
    );
}
