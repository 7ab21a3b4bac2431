use crate::core::validate::validate_create;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::create_event;
use crate::errors::AppResult;
use crate::models::request::CreateEventRequest;
use crate::models::{EventMeta, StoredEvent};

/// High-level business logic for creating an event.
pub struct AddLogic;

impl AddLogic {
    /// Validate the request, then insert the event and its meta row atomically.
    pub fn apply(pool: &mut DbPool, req: &CreateEventRequest) -> AppResult<StoredEvent> {
        let new = validate_create(req)?;
        let stored = pool.with_conn(|conn| create_event(conn, &new))?;

        let message = match &stored.meta {
            EventMeta::Single(m) => format!("Added event on {}", m.date),
            EventMeta::Recurring(m) => format!(
                "Added recurring event ({}) from {}",
                m.rule.pattern.describe(),
                m.rule.repeat_start
            ),
        };
        audit_quiet(&pool.conn, "add", &stored.event.id.to_string(), &message);

        Ok(stored)
    }
}
