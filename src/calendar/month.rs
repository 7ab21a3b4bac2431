//! Month value type.
//!
//! Internally months are 0-based (0 = January) everywhere: grid, matcher and
//! stored repeat patterns. The HTTP path and the CLI period use 1-based months;
//! `YearMonth::from_api` is the single place where that conversion happens.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Convert a 1-based month (1-12) to the internal 0-based one.
pub fn month0_from_api(month: i64) -> AppResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(AppError::validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }
    Ok((month - 1) as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Build from a 0-based month.
    pub fn new(year: i32, month0: u32) -> AppResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(AppError::validation(format!(
                "Year must be between {} and {}, got {}",
                MIN_YEAR, MAX_YEAR, year
            )));
        }
        if month0 > 11 {
            return Err(AppError::validation(format!(
                "Month must be between 0 and 11, got {}",
                month0
            )));
        }

        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .map(|first| Self { first })
            .ok_or_else(|| AppError::InvalidDate(format!("{:04}-{:02}", year, month0 + 1)))
    }

    /// Build from a 1-based month as used on the HTTP path and the CLI.
    pub fn from_api(year: i32, month: u32) -> AppResult<Self> {
        Self::new(year, month0_from_api(month.into())?)
    }

    /// Parse raw `{year}/{month}` path segments.
    pub fn parse_path(year: &str, month: &str) -> AppResult<Self> {
        let y: i32 = year
            .trim()
            .parse()
            .map_err(|_| AppError::validation("Year and month must be numbers"))?;
        let m: u32 = month
            .trim()
            .parse()
            .map_err(|_| AppError::validation("Year and month must be numbers"))?;

        Self::from_api(y, m)
    }

    /// Parse a `YYYY-MM` period (1-based month).
    pub fn parse_period(p: &str) -> AppResult<Self> {
        let (y, m) = p
            .trim()
            .split_once('-')
            .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;

        let y: i32 = y.parse().map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
        let m: u32 = m.parse().map_err(|_| AppError::InvalidPeriod(p.to_string()))?;

        Self::from_api(y, m)
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day0(0).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 0-based month.
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// 1-based month, for display and URLs.
    pub fn api_month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Exclusive upper bound of the month.
    pub fn first_of_next_month(&self) -> NaiveDate {
        self.first + Months::new(1)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_of_next_month().pred_opt().unwrap_or(self.first)
    }

    pub fn days_in_month(&self) -> u32 {
        (self.first_of_next_month() - self.first).num_days() as u32
    }

    /// Weekday of day 1, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self.first - Months::new(1),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self.first_of_next_month(),
        }
    }

    /// Every date of the month, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        let end = self.first_of_next_month();
        self.first.iter_days().take_while(|d| *d < end).collect()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.api_month())
    }
}
