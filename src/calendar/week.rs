//! ISO-8601 week numbers.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// ISO-8601 week number (1-53) of a calendar date.
///
/// The date is moved to the Thursday of its own ISO week (Monday = 1 ..
/// Sunday = 7), and the week is `ceil((days since Jan 1 of that Thursday's
/// year + 1) / 7)`. Week 1 is therefore the week holding the year's first
/// Thursday, and late-December / early-January dates may belong to the
/// neighbouring year's week.
pub fn iso_week(date: NaiveDate) -> u32 {
    let iso_weekday = i64::from(date.weekday().number_from_monday());
    let thursday = date + Duration::days(4 - iso_weekday);
    let days_since_jan1 = thursday.ordinal0();

    (days_since_jan1 + 1).div_ceil(7)
}

/// Week number of an instant, taken on its UTC calendar date.
pub fn iso_week_utc(instant: DateTime<Utc>) -> u32 {
    iso_week(instant.date_naive())
}
