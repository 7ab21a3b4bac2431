//! Database row models: thin wrappers around SQLite rows, before they are
//! checked and turned into domain types.

use crate::models::PatternColumns;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct DbRecurringRow {
    pub id: i64,
    pub body: String,
    pub created_at: String,
    pub repeat_start: NaiveDate,
    pub repeat_end: Option<NaiveDate>,
    pub columns: PatternColumns, // ⇔ repeat_year .. repeat_weekday, all nullable
}

#[derive(Debug, Clone)]
pub struct DbLogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}
