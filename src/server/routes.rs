use super::AppState;
use crate::calendar::{DayInfo, YearMonth, build_grid};
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::edit::EditLogic;
use crate::core::resolve_month;
use crate::core::validate::parse_payload;
use crate::errors::{AppError, AppResult};
use crate::models::request::{CreateEventRequest, UpdateEventRequest};
use crate::models::{Event, MonthEvents, StoredEvent};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub message: String,
}

/// Raw bytes rather than axum's `Json` extractor, so that every malformed
/// payload is reported as a 400 with the usual error shape.
fn json_body(bytes: &Bytes) -> AppResult<Value> {
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::validation(format!("Invalid JSON payload: {}", e)))
}

fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::validation("Event id must be a number"))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn month_events(
    State(state): State<AppState>,
    Path((year, month)): Path<(String, String)>,
) -> AppResult<Json<MonthEvents>> {
    let month = YearMonth::parse_path(&year, &month)?;
    let events = state
        .with_pool(move |pool| resolve_month(&*pool, month))
        .await?;

    debug!(%month, total = events.len(), "month served");
    Ok(Json(events))
}

pub async fn month_grid(
    State(state): State<AppState>,
    Path((year, month)): Path<(String, String)>,
) -> AppResult<Json<Vec<DayInfo>>> {
    let month = YearMonth::parse_path(&year, &month)?;
    Ok(Json(build_grid(month, state.layout)))
}

pub async fn create_event(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<StoredEvent>)> {
    let req: CreateEventRequest = parse_payload(json_body(&body)?)?;
    let stored = state
        .with_pool(move |pool| AddLogic::apply(pool, &req))
        .await?;

    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Event>> {
    let id = parse_id(&id)?;
    let req: UpdateEventRequest = parse_payload(json_body(&body)?)?;
    let event = state
        .with_pool(move |pool| EditLogic::apply(pool, id, &req))
        .await?;

    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    let event = state
        .with_pool(move |pool| DeleteLogic::apply(pool, id))
        .await?;

    Ok(Json(DeleteResponse {
        id: event.id,
        message: "Event deleted successfully".to_string(),
    }))
}
