use crate::db::queries::count_events;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

pub struct DbInfo {
    pub file_size: u64,
    pub single_events: i64,
    pub recurring_events: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect_db_info(conn: &Connection, db_path: &str) -> AppResult<DbInfo> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let (single_events, recurring_events) = count_events(conn)?;

    let first_date: Option<String> = conn
        .query_row(
            "SELECT date FROM event_meta ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT date FROM event_meta ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbInfo {
        file_size,
        single_events,
        recurring_events,
        first_date,
        last_date,
    })
}

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    let info = collect_db_info(conn, db_path)?;
    println!();

    //
    // 1) FILE SIZE
    //
    let file_mb = (info.file_size as f64) / (1024.0 * 1024.0);
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) EVENT COUNTS
    //
    println!(
        "{}• One-off events:{} {}{}{}",
        CYAN, RESET, GREEN, info.single_events, RESET
    );
    println!(
        "{}• Recurring events:{} {}{}{}",
        CYAN, RESET, GREEN, info.recurring_events, RESET
    );

    //
    // 3) DATE RANGE (one-off events)
    //
    let fmt_first = info
        .first_date
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = info.last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
