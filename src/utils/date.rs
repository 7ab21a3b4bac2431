use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a date coming from a request: `YYYY-MM-DD`, or an RFC 3339
/// timestamp whose date part is taken as written.
pub fn parse_api_date(field: &str, s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();

    if let Some(d) = parse_date(s) {
        return Ok(d);
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| AppError::InvalidDate(format!("{}: '{}'", field, s)))
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
