//! Raw create/update payloads, shared by the HTTP boundary and the CLI.
//! Fields stay loosely typed here; `core::validate` turns them into
//! `NewEvent` or rejects them.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub body: Option<Value>,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub pattern: Option<PatternRequest>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PatternRequest {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub week: Option<i64>,
    pub weekday: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub body: Option<Value>,
}
