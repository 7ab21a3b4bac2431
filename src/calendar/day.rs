use super::week::iso_week;
use chrono::{Datelike, NaiveDate};

/// The five coordinates a repeat pattern can be matched against, plus the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCoordinates {
    pub date: NaiveDate,
    pub year: i32,
    /// 0 = January
    pub month0: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u32,
    pub iso_week: u32,
}

impl DayCoordinates {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            date,
            year: date.year(),
            month0: date.month0(),
            day: date.day(),
            weekday: date.weekday().num_days_from_sunday(),
            iso_week: iso_week(date),
        }
    }
}
