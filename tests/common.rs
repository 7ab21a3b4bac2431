#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rcalendar::db::DbPool;
use rcalendar::db::migrate::run_pending_migrations;
use rcalendar::models::{Event, RecurrenceRule, RecurringEvent, RepeatPattern, SingleEvent};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rcal() -> Command {
    cargo_bin_cmd!("rcalendar")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcalendar.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB through the CLI (test mode, no config file written)
pub fn init_db(db_path: &str) {
    rcal()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// In-memory store with the full schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::open_in_memory().expect("open in-memory db");
    run_pending_migrations(&pool.conn).expect("migrate");
    pool
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn event(id: i64, body: &str) -> Event {
    Event {
        id,
        body: body.to_string(),
        created_at: "2025-01-01T00:00:00+00:00".to_string(),
    }
}

pub fn single(id: i64, body: &str, on: NaiveDate) -> SingleEvent {
    SingleEvent {
        event: event(id, body),
        date: on,
    }
}

pub fn recurring(
    id: i64,
    body: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
    pattern: RepeatPattern,
) -> RecurringEvent {
    RecurringEvent {
        event: event(id, body),
        rule: RecurrenceRule::new(start, end, pattern).expect("valid rule"),
    }
}
