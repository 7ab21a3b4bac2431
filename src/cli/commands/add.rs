use crate::calendar::month::month0_from_api;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::EventMeta;
use crate::models::request::{CreateEventRequest, PatternRequest};
use crate::ui::messages::success;
use serde_json::Value;

/// Build the same request the HTTP API receives from the command-line flags.
fn to_request(cmd: &Commands) -> AppResult<Option<CreateEventRequest>> {
    let Commands::Add {
        body,
        date,
        start,
        end,
        year,
        month,
        day,
        week,
        weekday,
    } = cmd
    else {
        return Ok(None);
    };

    let has_pattern =
        year.is_some() || month.is_some() || day.is_some() || week.is_some() || weekday.is_some();

    // --month is 1-12 on the command line, stored 0-11
    let month0 = month.map(month0_from_api).transpose()?.map(i64::from);

    let pattern = has_pattern.then(|| PatternRequest {
        year: *year,
        month: month0,
        day: *day,
        week: *week,
        weekday: *weekday,
    });

    Ok(Some(CreateEventRequest {
        body: Some(Value::String(body.clone())),
        date: date.clone(),
        start_date: start.clone(),
        end_date: end.clone(),
        pattern,
    }))
}

/// Add a one-off or recurring event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Some(req) = to_request(cmd)? else {
        return Ok(());
    };

    let mut pool = DbPool::open(&cfg.database)?;
    let stored = AddLogic::apply(&mut pool, &req)?;

    match &stored.meta {
        EventMeta::Single(m) => success(format!(
            "Event #{} added on {}.",
            stored.event.id, m.date
        )),
        EventMeta::Recurring(m) => {
            let until = m
                .rule
                .repeat_end
                .map(|e| format!(" until {}", e))
                .unwrap_or_default();
            success(format!(
                "Recurring event #{} added: {} from {}{}.",
                stored.event.id,
                m.rule.pattern.describe(),
                m.rule.repeat_start,
                until
            ))
        }
    }

    Ok(())
}
