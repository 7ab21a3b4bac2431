//! Request validation. Runs before any store access; a rejected request
//! leaves nothing behind.

use crate::errors::{AppError, AppResult};
use crate::models::request::{CreateEventRequest, PatternRequest, UpdateEventRequest};
use crate::models::{NewEvent, PatternColumns, RecurrenceRule, RepeatPattern};
use crate::utils::date::parse_api_date;
use serde_json::Value;

fn require_body(body: Option<&Value>) -> AppResult<String> {
    match body {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(AppError::validation(
            "Event body is required and must be a string",
        )),
    }
}

impl From<PatternRequest> for PatternColumns {
    fn from(p: PatternRequest) -> Self {
        PatternColumns {
            year: p.year,
            month: p.month,
            day: p.day,
            week: p.week,
            weekday: p.weekday,
        }
    }
}

/// Turn a create payload into a `NewEvent`.
///
/// One-off: `body` + `date`. Recurring: `body` + `startDate` + exactly one
/// `pattern` key + optional `endDate`.
pub fn validate_create(req: &CreateEventRequest) -> AppResult<NewEvent> {
    let body = require_body(req.body.as_ref())?;

    if req.end_date.is_some() && req.pattern.is_none() {
        return Err(AppError::validation(
            "endDate can only be used with recurring events",
        ));
    }

    let Some(pattern) = req.pattern else {
        if req.start_date.is_some() {
            return Err(AppError::validation(
                "startDate can only be used with recurring events",
            ));
        }
        let date = req
            .date
            .as_deref()
            .ok_or_else(|| AppError::validation("Date is required for single-time events"))?;
        return Ok(NewEvent::once(body, parse_api_date("date", date)?));
    };

    if req.date.is_some() {
        return Err(AppError::validation(
            "date cannot be combined with a repeat pattern; use startDate",
        ));
    }

    let start = req.start_date.as_deref().ok_or_else(|| {
        AppError::validation("Start date is required for recurring events")
    })?;
    let start = parse_api_date("startDate", start)?;
    let end = req
        .end_date
        .as_deref()
        .map(|e| parse_api_date("endDate", e))
        .transpose()?;

    let columns: PatternColumns = pattern.into();
    let pattern = RepeatPattern::from_columns(&columns)?;
    let rule = RecurrenceRule::new(start, end, pattern)?;

    Ok(NewEvent::recurring(body, rule))
}

/// Extract the new body from an update payload.
pub fn validate_update(req: &UpdateEventRequest) -> AppResult<String> {
    require_body(req.body.as_ref())
}

/// Parse a raw JSON payload into a typed request, reporting shape errors
/// (e.g. a string where a number is expected) as validation errors.
pub fn parse_payload<T: serde::de::DeserializeOwned>(payload: Value) -> AppResult<T> {
    if !payload.is_object() {
        return Err(AppError::validation("Request body must be a JSON object"));
    }
    serde_json::from_value(payload).map_err(|e| AppError::validation(e.to_string()))
}
