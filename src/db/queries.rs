use crate::db::models::DbRecurringRow;
use crate::errors::{AppError, AppResult};
use crate::models::event::now_rfc3339;
use crate::models::{
    Event, EventMeta, NewEvent, PatternColumns, RecurrenceRule, RecurringEvent,
    RecurringEventMeta, RepeatPattern, Schedule, SingleEvent, SingleEventMeta, StoredEvent,
};
use crate::utils::date::format_date;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use tracing::{debug, warn};

const RECURRING_SELECT: &str = "SELECT e.id, e.body, e.created_at,
            m.repeat_start, m.repeat_end,
            m.repeat_year, m.repeat_month, m.repeat_day, m.repeat_week, m.repeat_weekday
     FROM events e
     JOIN recurring_event_meta m ON m.event_id = e.id";

fn parse_stored_date(idx: usize, raw: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

fn map_event(row: &Row) -> Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
    })
}

fn map_single(row: &Row) -> Result<SingleEvent> {
    let date_str: String = row.get("date")?;
    Ok(SingleEvent {
        event: map_event(row)?,
        date: parse_stored_date(3, date_str)?,
    })
}

fn map_recurring_row(row: &Row) -> Result<DbRecurringRow> {
    let start: String = row.get("repeat_start")?;
    let end: Option<String> = row.get("repeat_end")?;

    Ok(DbRecurringRow {
        id: row.get("id")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
        repeat_start: parse_stored_date(3, start)?,
        repeat_end: end.map(|e| parse_stored_date(4, e)).transpose()?,
        columns: PatternColumns {
            year: row.get("repeat_year")?,
            month: row.get("repeat_month")?,
            day: row.get("repeat_day")?,
            week: row.get("repeat_week")?,
            weekday: row.get("repeat_weekday")?,
        },
    })
}

impl DbRecurringRow {
    /// Check the one-dimension invariant and build the domain rule.
    pub fn into_recurring(self) -> AppResult<RecurringEvent> {
        let pattern = RepeatPattern::from_columns(&self.columns)?;
        let rule = RecurrenceRule::new(self.repeat_start, self.repeat_end, pattern)?;

        Ok(RecurringEvent {
            event: Event {
                id: self.id,
                body: self.body,
                created_at: self.created_at,
            },
            rule,
        })
    }
}

/// Rows breaking the one-dimension invariant are never matched: they are
/// logged and left out.
fn keep_valid_rules(rows: Vec<DbRecurringRow>) -> Vec<RecurringEvent> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id;
            match row.into_recurring() {
                Ok(ev) => Some(ev),
                Err(e) => {
                    warn!(event_id = id, error = %e, "skipping malformed recurring rule");
                    None
                }
            }
        })
        .collect()
}

/// Insert an event and its single meta row in one transaction.
pub fn create_event(conn: &mut Connection, new: &NewEvent) -> AppResult<StoredEvent> {
    let tx = conn.transaction()?;
    let created_at = now_rfc3339();

    tx.execute(
        "INSERT INTO events (body, created_at) VALUES (?1, ?2)",
        params![new.body, created_at],
    )?;
    let id = tx.last_insert_rowid();

    let meta = match new.schedule {
        Schedule::Once(date) => {
            tx.execute(
                "INSERT INTO event_meta (event_id, date) VALUES (?1, ?2)",
                params![id, format_date(&date)],
            )?;
            EventMeta::Single(SingleEventMeta { event_id: id, date })
        }
        Schedule::Recurring(rule) => {
            let cols = rule.pattern.to_columns();
            tx.execute(
                "INSERT INTO recurring_event_meta (
                    event_id, repeat_start, repeat_end,
                    repeat_year, repeat_month, repeat_day, repeat_week, repeat_weekday
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    id,
                    format_date(&rule.repeat_start),
                    rule.repeat_end.as_ref().map(format_date),
                    cols.year,
                    cols.month,
                    cols.day,
                    cols.week,
                    cols.weekday,
                ],
            )?;
            EventMeta::Recurring(RecurringEventMeta { event_id: id, rule })
        }
    };

    tx.commit()?;
    debug!(event_id = id, recurring = new.is_recurring(), "event created");

    Ok(StoredEvent {
        event: Event {
            id,
            body: new.body.clone(),
            created_at,
        },
        meta,
    })
}

pub fn find_event(conn: &Connection, id: i64) -> AppResult<Option<StoredEvent>> {
    let event = conn
        .query_row(
            "SELECT id, body, created_at FROM events WHERE id = ?1",
            [id],
            map_event,
        )
        .optional()?;

    let Some(event) = event else {
        return Ok(None);
    };

    let single = conn
        .query_row(
            "SELECT date FROM event_meta WHERE event_id = ?1",
            [id],
            |row| row.get::<_, String>(0),
        )
        .optional()?;

    if let Some(raw) = single {
        let date = parse_stored_date(0, raw)?;
        return Ok(Some(StoredEvent {
            event,
            meta: EventMeta::Single(SingleEventMeta { event_id: id, date }),
        }));
    }

    let recurring = conn
        .query_row(
            &format!("{RECURRING_SELECT} WHERE e.id = ?1"),
            [id],
            map_recurring_row,
        )
        .optional()?;

    match recurring {
        Some(row) => {
            let rec = row.into_recurring()?;
            Ok(Some(StoredEvent {
                event,
                meta: EventMeta::Recurring(RecurringEventMeta {
                    event_id: id,
                    rule: rec.rule,
                }),
            }))
        }
        None => Err(AppError::Other(format!("Event {} has no meta row", id))),
    }
}

/// Replace the body of an event. Meta and id never change.
pub fn update_body(conn: &Connection, id: i64, body: &str) -> AppResult<Event> {
    conn.query_row(
        "UPDATE events SET body = ?1 WHERE id = ?2
         RETURNING id, body, created_at",
        params![body, id],
        map_event,
    )
    .optional()?
    .ok_or(AppError::NotFound(id))
}

/// Delete an event; its meta row goes with it through the cascade.
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<Event> {
    conn.query_row(
        "DELETE FROM events WHERE id = ?1
         RETURNING id, body, created_at",
        [id],
        map_event,
    )
    .optional()?
    .ok_or(AppError::NotFound(id))
}

/// One-off events dated in `[start, end]` (both inclusive), ascending by date
/// then id. Both bounds are plain `YYYY-MM-DD` text for every accepted year.
pub fn single_events_between(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<SingleEvent>> {
    let mut stmt = conn.prepare_cached(
        "SELECT e.id, e.body, e.created_at, m.date
         FROM events e
         JOIN event_meta m ON m.event_id = e.id
         WHERE m.date >= ?1 AND m.date <= ?2
         ORDER BY m.date ASC, e.id ASC",
    )?;

    let rows = stmt.query_map(
        params![format_date(&start), format_date(&end)],
        map_single,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every stored recurring rule.
pub fn recurring_rules(conn: &Connection) -> AppResult<Vec<RecurringEvent>> {
    let mut stmt = conn.prepare_cached(&format!("{RECURRING_SELECT} ORDER BY e.id ASC"))?;
    let rows = stmt.query_map([], map_recurring_row)?;

    let mut raw = Vec::new();
    for r in rows {
        raw.push(r?);
    }
    Ok(keep_valid_rules(raw))
}

/// Recurring rules whose active range meets `[start, end]` (both inclusive).
pub fn recurring_rules_between(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<RecurringEvent>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{RECURRING_SELECT}
         WHERE m.repeat_start <= ?2
           AND (m.repeat_end IS NULL OR m.repeat_end >= ?1)
         ORDER BY e.id ASC"
    ))?;
    let rows = stmt.query_map(
        params![format_date(&start), format_date(&end)],
        map_recurring_row,
    )?;

    let mut raw = Vec::new();
    for r in rows {
        raw.push(r?);
    }
    Ok(keep_valid_rules(raw))
}

/// `(one-off, recurring)` event counts.
pub fn count_events(conn: &Connection) -> AppResult<(i64, i64)> {
    let single: i64 = conn.query_row("SELECT COUNT(*) FROM event_meta", [], |row| row.get(0))?;
    let recurring: i64 =
        conn.query_row("SELECT COUNT(*) FROM recurring_event_meta", [], |row| {
            row.get(0)
        })?;
    Ok((single, recurring))
}
