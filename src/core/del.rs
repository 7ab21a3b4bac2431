use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::delete_event;
use crate::errors::AppResult;
use crate::models::Event;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete event `id` and, through the cascade, its meta row.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Event> {
        let event = delete_event(&pool.conn, id)?;

        audit_quiet(
            &pool.conn,
            "del",
            &id.to_string(),
            &format!("Deleted event '{}'", event.body),
        );
        Ok(event)
    }
}
