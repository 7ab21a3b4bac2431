//! Repeat patterns.
//!
//! A recurring event repeats along exactly one dimension. In storage that is
//! five nullable columns of which exactly one is set; in memory it is the
//! `RepeatPattern` enum, so a rule with zero or several active dimensions can
//! not exist past `RepeatPattern::from_columns`.

use crate::calendar::DayCoordinates;
use crate::calendar::month::{MAX_YEAR, MIN_YEAR};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepeatPattern {
    /// Every day of the given year.
    #[serde(rename = "year")]
    Year(i32),
    /// Every day of the given month, 0 = January.
    #[serde(rename = "month")]
    Month(u32),
    /// The given day of every month, 1-31.
    #[serde(rename = "day")]
    DayOfMonth(u32),
    /// Every day of the given ISO week, 1-53.
    #[serde(rename = "week")]
    IsoWeek(u32),
    /// The given weekday, 0 = Sunday.
    #[serde(rename = "weekday")]
    Weekday(u32),
}

/// The five nullable `repeat_*` columns of a recurring meta row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternColumns {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub week: Option<i64>,
    pub weekday: Option<i64>,
}

impl PatternColumns {
    /// Names of the columns that carry a value, in declaration order.
    pub fn set_keys(&self) -> Vec<&'static str> {
        [
            ("year", self.year),
            ("month", self.month),
            ("day", self.day),
            ("week", self.week),
            ("weekday", self.weekday),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|_| key))
        .collect()
    }
}

fn in_range(key: &str, value: i64, min: i64, max: i64) -> AppResult<i64> {
    if value < min || value > max {
        let label = match key {
            "year" => "Year",
            "month" => "Month",
            "day" => "Day",
            "week" => "Week",
            _ => "Weekday",
        };
        return Err(AppError::validation(format!(
            "{} must be between {} and {}",
            label, min, max
        )));
    }
    Ok(value)
}

impl RepeatPattern {
    /// Build a pattern from one `(key, value)` pair, checking the value range.
    pub fn from_key(key: &str, value: i64) -> AppResult<Self> {
        let pattern = match key {
            "year" => {
                RepeatPattern::Year(in_range(key, value, MIN_YEAR.into(), MAX_YEAR.into())? as i32)
            }
            "month" => RepeatPattern::Month(in_range(key, value, 0, 11)? as u32),
            "day" => RepeatPattern::DayOfMonth(in_range(key, value, 1, 31)? as u32),
            "week" => RepeatPattern::IsoWeek(in_range(key, value, 1, 53)? as u32),
            "weekday" => RepeatPattern::Weekday(in_range(key, value, 0, 6)? as u32),
            other => {
                return Err(AppError::validation(format!(
                    "Unknown repeat pattern key: {}",
                    other
                )));
            }
        };
        Ok(pattern)
    }

    /// Convert the nullable column form, rejecting zero or several set columns.
    pub fn from_columns(cols: &PatternColumns) -> AppResult<Self> {
        let keys = cols.set_keys();

        match keys.as_slice() {
            [] => Err(AppError::validation(
                "At least one repeat pattern key (year, month, day, week, or weekday) is required",
            )),
            [key] => {
                let value = match *key {
                    "year" => cols.year,
                    "month" => cols.month,
                    "day" => cols.day,
                    "week" => cols.week,
                    _ => cols.weekday,
                };
                // set_keys only returns keys whose column is Some
                Self::from_key(key, value.unwrap_or_default())
            }
            _ => Err(AppError::validation(format!(
                "Only one repeat pattern key is allowed. Received: {}",
                keys.join(", ")
            ))),
        }
    }

    pub fn to_columns(&self) -> PatternColumns {
        let mut cols = PatternColumns::default();
        match *self {
            RepeatPattern::Year(y) => cols.year = Some(y.into()),
            RepeatPattern::Month(m) => cols.month = Some(m.into()),
            RepeatPattern::DayOfMonth(d) => cols.day = Some(d.into()),
            RepeatPattern::IsoWeek(w) => cols.week = Some(w.into()),
            RepeatPattern::Weekday(w) => cols.weekday = Some(w.into()),
        }
        cols
    }

    /// Whether the single active dimension equals the day's coordinate.
    pub fn matches(&self, day: &DayCoordinates) -> bool {
        match *self {
            RepeatPattern::Year(y) => day.year == y,
            RepeatPattern::Month(m) => day.month0 == m,
            RepeatPattern::DayOfMonth(d) => day.day == d,
            RepeatPattern::IsoWeek(w) => day.iso_week == w,
            RepeatPattern::Weekday(w) => day.weekday == w,
        }
    }

    /// Short human label, e.g. `every Wednesday`.
    pub fn describe(&self) -> String {
        const WEEKDAYS: [&str; 7] = [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ];
        const MONTHS: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];

        match *self {
            RepeatPattern::Year(y) => format!("every day of {}", y),
            RepeatPattern::Month(m) => format!(
                "every day of {}",
                MONTHS.get(m as usize).copied().unwrap_or("?")
            ),
            RepeatPattern::DayOfMonth(d) => format!("day {} of every month", d),
            RepeatPattern::IsoWeek(w) => format!("every day of ISO week {}", w),
            RepeatPattern::Weekday(w) => format!(
                "every {}",
                WEEKDAYS.get(w as usize).copied().unwrap_or("?")
            ),
        }
    }
}
