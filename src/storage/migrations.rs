//! Database migrations for quickcal.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::QuickcalError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, QuickcalError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| QuickcalError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), QuickcalError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| QuickcalError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), QuickcalError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::info!(version, "applying database migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), QuickcalError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(QuickcalError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: calendar items.
///
/// Tasks store their due instant in `starts_at` and leave `ends_at` empty.
fn migrate_v1(conn: &Connection) -> Result<(), QuickcalError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS calendar_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            title TEXT NOT NULL,
            starts_at TEXT NOT NULL,
            ends_at TEXT,
            is_completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_calendar_items_starts_at
        ON calendar_items(starts_at);
        ",
    )
    .map_err(|e| QuickcalError::Database(format!("Migration v1 failed: {e}")))
}
