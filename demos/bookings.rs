use chrono::offset::TimeZone;
use chrono::{DateTime, Duration, Utc};
use separate_interval_set::{Interval, InvalidIntervalError, SeparateIntervalSet};

fn booking(start: DateTime<Utc>, length: Duration) -> Interval {
    Interval::new(start.timestamp(), (start + length).timestamp())
}

fn main() -> Result<(), InvalidIntervalError> {
    let mut room = SeparateIntervalSet::new();
    let nine = Utc.with_ymd_and_hms(2019, 1, 7, 9, 0, 0).unwrap();

    // Back-to-back meetings stay separate bookings.
    room.insert(booking(nine, Duration::hours(1)))?;
    room.insert(booking(nine + Duration::hours(1), Duration::hours(1)))?;

    // A later one, and then a workshop overrunning into it.
    room.insert(booking(nine + Duration::hours(3), Duration::minutes(30)))?;
    room.insert(booking(nine + Duration::minutes(150), Duration::minutes(45)))?;

    // Print out the bookings, and observe that the first two
    // are still separate while the last two have been merged.
    for interval in room.iter() {
        let start = Utc.timestamp_opt(interval.begin(), 0).unwrap();
        let end = Utc.timestamp_opt(interval.end(), 0).unwrap();
        println!("{} - {} ({} min)", start, end, (end - start).num_minutes());
    }
    Ok(())
}
