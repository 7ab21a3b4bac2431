use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::request::UpdateEventRequest;
use crate::ui::messages::success;
use serde_json::Value;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, body } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let req = UpdateEventRequest {
            body: Some(Value::String(body.clone())),
        };

        let event = EditLogic::apply(&mut pool, *id, &req)?;
        success(format!("Event #{} updated: {}", event.id, event.body));
    }

    Ok(())
}
