use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{info, warn};

const CREATE_CALENDAR_TABLES: &str = "20250426_0001_create_calendar_tables";
const ADD_RECURRING_RANGE_INDEX: &str = "20250503_0002_recurring_range_index";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    info!(version, "migration applied: {}", message);
    Ok(())
}

/// Events, their one-off meta and their recurring meta.
fn create_calendar_tables(conn: &Connection) -> Result<()> {
    if migration_applied(conn, CREATE_CALENDAR_TABLES)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        BEGIN;

        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            body        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS event_meta (
            event_id  INTEGER PRIMARY KEY
                      REFERENCES events(id) ON DELETE CASCADE,
            date      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_event_meta_date ON event_meta(date);

        CREATE TABLE IF NOT EXISTS recurring_event_meta (
            event_id        INTEGER PRIMARY KEY
                            REFERENCES events(id) ON DELETE CASCADE,
            repeat_start    TEXT NOT NULL,
            repeat_end      TEXT,
            repeat_year     INTEGER,
            repeat_month    INTEGER CHECK(repeat_month BETWEEN 0 AND 11),
            repeat_day      INTEGER CHECK(repeat_day BETWEEN 1 AND 31),
            repeat_week     INTEGER CHECK(repeat_week BETWEEN 1 AND 53),
            repeat_weekday  INTEGER CHECK(repeat_weekday BETWEEN 0 AND 6)
        );

        COMMIT;
        "#,
    )?;

    mark_applied(
        conn,
        CREATE_CALENDAR_TABLES,
        "Created events, event_meta and recurring_event_meta tables",
    )
}

/// Month queries only look at rules whose active range meets the month.
fn add_recurring_range_index(conn: &Connection) -> Result<()> {
    if migration_applied(conn, ADD_RECURRING_RANGE_INDEX)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_recurring_range
             ON recurring_event_meta(repeat_start, repeat_end);",
    )?;

    mark_applied(
        conn,
        ADD_RECURRING_RANGE_INDEX,
        "Added (repeat_start, repeat_end) index on recurring_event_meta",
    )
}

/// Drop every calendar table, including the migration history.
/// The next `run_pending_migrations` recreates an empty schema.
pub fn drop_calendar_tables(conn: &Connection) -> Result<()> {
    warn!("dropping all calendar tables");

    conn.execute_batch(
        r#"
        BEGIN;
        DROP TABLE IF EXISTS recurring_event_meta;
        DROP TABLE IF EXISTS event_meta;
        DROP TABLE IF EXISTS events;
        DROP TABLE IF EXISTS log;
        COMMIT;
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and every time a store is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    create_calendar_tables(conn)?;
    add_recurring_range_index(conn)?;

    Ok(())
}
