//! Calendar day windows used by date filters.
//!
//! Dates supplied by clients are inclusive calendar days in UTC. Queries compare
//! `created_at` against a half-open `[start, end)` range of timestamps.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::server::error::Error;

/// Midnight at the start of `date`
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

/// Half-open timestamp range covering the inclusive days `start..=end`.
///
/// # Returns
/// - `Ok((from, until))` - `from` is midnight of `start`, `until` is midnight after `end`
/// - `Err(Error::ParseError)` - `end` is the last representable date
pub fn day_window(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(NaiveDateTime, NaiveDateTime), Error> {
    let next_day = end.checked_add_signed(Duration::days(1)).ok_or_else(|| {
        Error::ParseError(format!("Failed to calculate the day following {}", end))
    })?;

    Ok((start_of_day(start), start_of_day(next_day)))
}

/// Half-open timestamp range covering the calendar day of `now`
pub fn today_window(now: NaiveDateTime) -> Result<(NaiveDateTime, NaiveDateTime), Error> {
    let today = now.date();

    day_window(today, today)
}
