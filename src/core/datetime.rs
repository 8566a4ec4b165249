//! Calendar arithmetic primitives.
//!
//! The parser never reads the system clock; everything here takes the
//! reference date explicitly. [`local_today`] is the one place the clock is
//! consulted, and only the command-line layer calls it.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Length in minutes of the block proposed for every new meeting.
pub const MEETING_MINUTES: i64 = 60;

/// The current local date.
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Next occurrence of `target` strictly after `from`.
///
/// If `from` already falls on `target`, the result is one week later.
#[must_use]
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let days_until = (i64::from(target.num_days_from_sunday())
        - i64::from(from.weekday().num_days_from_sunday())
        + 7)
        % 7;
    let days = if days_until == 0 { 7 } else { days_until };

    from + Duration::days(days)
}

/// Shift `from` by a whole number of days.
#[must_use]
pub fn offset_days(from: NaiveDate, days: u8) -> NaiveDate {
    from + Duration::days(i64::from(days))
}

/// Build a date from raw components, `None` if they name no real day.
#[must_use]
pub fn date_from_parts(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Build a time of day from an hour and minute, `None` if out of range.
#[must_use]
pub fn time_of_day(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Combine a date with a time of day.
#[must_use]
pub fn at_time(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    NaiveDateTime::new(date, time)
}

/// End of the default block for a meeting starting at `start`.
#[must_use]
pub fn meeting_end(start: NaiveDateTime) -> NaiveDateTime {
    start + Duration::minutes(MEETING_MINUTES)
}
