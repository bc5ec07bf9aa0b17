#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use separate_interval_set::{Interval, SeparateIntervalSet};

// Small bounds so that overlaps and touches are common.
#[derive(Clone, Debug, Arbitrary)]
struct Insert {
    begin: i8,
    end: i8,
}

fuzz_target!(|inserts: Vec<Insert>| {
    let mut set = SeparateIntervalSet::new();
    let mut accepted = Vec::new();

    for Insert { begin, end } in inserts {
        let interval = Interval::new(begin.into(), end.into());
        match set.insert(interval) {
            Ok(()) => accepted.push(interval),
            Err(_) => assert!(interval.is_empty()),
        }
    }

    // Sorted, non-empty, and no two neighbours overlap.
    let members: Vec<Interval> = set.iter().copied().collect();
    for member in &members {
        assert!(!member.is_empty());
    }
    for pair in members.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].end() <= pair[1].begin());
    }

    // Same members as sorting everything and sweeping once.
    accepted.sort();
    let mut swept: Vec<Interval> = Vec::new();
    for interval in accepted {
        match swept.last_mut() {
            Some(last) if interval.begin() < last.end() => *last = last.hull(&interval),
            _ => swept.push(interval),
        }
    }
    assert_eq!(members, swept);
});
