/*!
[`SeparateIntervalSet`] is a set of integers stored as sorted, pairwise
disjoint half-open [`Interval`]s. Inserting an interval that overlaps stored
intervals merges them all into their common hull. Intervals that merely
touch are _not_ merged.


# Overlapping versus touching

Two half-open intervals `[a, b)` and `[c, d)` overlap when they share at
least one point, i.e. `a < d && c < b`. When one ends exactly where the
other begins they only _touch_, and in a separate interval set touching
intervals remain distinct members:

```rust
use separate_interval_set::{Interval, SeparateIntervalSet};

let mut set = SeparateIntervalSet::new();
set.insert(Interval::new(5, 10)).unwrap();
set.insert(Interval::new(10, 15)).unwrap();
assert_eq!(set.len(), 2);

// Overlapping both members fuses them into one.
set.insert(Interval::new(9, 11)).unwrap();
assert_eq!(set.iter().collect::<Vec<_>>(), [&Interval::new(5, 15)]);
```

This is the right model whenever adjacent ranges mean different things,
for example back-to-back bookings of the same room, or two allocations
that happen to sit next to each other in an address space.


# Invalid input

An interval with `begin >= end` covers no points. The set never stores one
and never normalizes one; [`SeparateIntervalSet::insert`] returns an
[`InvalidIntervalError`] and leaves the set as it was. Use
[`Interval::normalized`] if your bounds may arrive in either order.


# Cost of insertion

Each insertion does one ordered lookup on either side of the new interval
and then one more per member it absorbs. Nothing else in the set is
visited, so the cost tracks the number of merged members rather than the
size of the set.


## Crate features

By default this crate depends only on `thiserror` and `tracing`, both
without their `std` features.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`Interval`] and [`SeparateIntervalSet`]. A set
deserializes by inserting each interval in turn, so the result always
upholds the set's invariants.

```toml
[dependencies]
separate-interval-set = { version = "0.1", features = ["serde1"] }
```


## Diagnostics

Every insertion emits a `tracing` event at `TRACE` level naming the
inserted interval, the resulting hull and how many members were absorbed.
Rejected input is reported at `DEBUG`. Install a subscriber in your
application to see them.


## Building without the Rust standard library

This crate links the `core` and `alloc` crates, but not `std`.

*/

#![no_std]
extern crate alloc;

// Property tests lean on `std` macros and paths.
#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
pub mod interval;
pub mod set;

#[cfg(test)]
mod stupid_interval_set;

pub use error::InvalidIntervalError;
pub use interval::Interval;
pub use set::SeparateIntervalSet;

// Doc tests for README.
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
