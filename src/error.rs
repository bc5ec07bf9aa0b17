use thiserror::Error;

/// Returned when an interval that covers no points is offered to a
/// [`SeparateIntervalSet`](crate::SeparateIntervalSet).
///
/// The set never normalizes its input. Callers holding bounds of unknown
/// order should go through [`Interval::normalized`](crate::Interval::normalized)
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidIntervalError {
    /// `begin == end`.
    #[error("interval [{at}, {at}) is empty")]
    Empty { at: i64 },
    /// `begin > end`.
    #[error("interval [{begin}, {end}) has reversed bounds")]
    Reversed { begin: i64, end: i64 },
}
