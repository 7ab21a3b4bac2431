use crate::core::validate::validate_update;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::update_body;
use crate::errors::AppResult;
use crate::models::Event;
use crate::models::request::UpdateEventRequest;

pub struct EditLogic;

impl EditLogic {
    /// Replace the body of event `id`. Fails with NotFound for an unknown id.
    pub fn apply(pool: &mut DbPool, id: i64, req: &UpdateEventRequest) -> AppResult<Event> {
        let body = validate_update(req)?;
        let event = update_body(&pool.conn, id, &body)?;

        audit_quiet(&pool.conn, "edit", &id.to_string(), "Updated event body");
        Ok(event)
    }
}
