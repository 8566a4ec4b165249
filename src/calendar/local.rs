//! Calendar client backed by the local database.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use rusqlite::params;

use super::client::{CalendarClient, CreatedItem};
use crate::core::{CalendarMeeting, CalendarTask, EntryKind};
use crate::error::QuickcalError;
use crate::storage::Database;

/// Storage format for instants; sorts lexicographically.
const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Stores calendar items in the `calendar_items` table.
pub struct LocalCalendar {
    db: Database,
}

type ItemRow = (i64, String, String, String, Option<String>);

impl LocalCalendar {
    /// Create a calendar over an open database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    fn insert(
        &self,
        kind: EntryKind,
        title: &str,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        is_completed: bool,
    ) -> Result<CreatedItem, QuickcalError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO calendar_items (kind, title, starts_at, ends_at, is_completed, created_at)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                kind.as_str(),
                title,
                format_instant(start),
                end.map(format_instant),
                is_completed,
                Utc::now().to_rfc3339(),
            ],
        )
        .map_err(|e| QuickcalError::Database(format!("Failed to insert {kind}: {e}")))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, %kind, "stored calendar item");

        Ok(CreatedItem {
            id,
            kind,
            title: title.to_string(),
            start,
            end,
        })
    }
}

impl CalendarClient for LocalCalendar {
    fn create_task(&self, task: &CalendarTask) -> Result<CreatedItem, QuickcalError> {
        self.insert(EntryKind::Task, &task.title, task.due, None, task.is_completed)
    }

    fn create_meeting(&self, meeting: &CalendarMeeting) -> Result<CreatedItem, QuickcalError> {
        self.insert(
            EntryKind::Meeting,
            &meeting.title,
            meeting.start,
            Some(meeting.end),
            false,
        )
    }

    fn items_on(&self, date: NaiveDate) -> Result<Vec<CreatedItem>, QuickcalError> {
        let conn = self.db.connection();
        let from = date.and_time(chrono::NaiveTime::MIN);
        let until = from + Duration::days(1);

        let mut stmt = conn
            .prepare(
                r"SELECT id, kind, title, starts_at, ends_at
                  FROM calendar_items
                  WHERE starts_at >= ?1 AND starts_at < ?2
                  ORDER BY starts_at, id",
            )
            .map_err(|e| QuickcalError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params![format_instant(from), format_instant(until)], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })
            .map_err(|e| QuickcalError::Database(format!("Failed to query items: {e}")))?;

        rows.map(|row| {
            let row: ItemRow =
                row.map_err(|e| QuickcalError::Database(format!("Failed to read item: {e}")))?;
            row_to_item(row)
        })
        .collect()
    }
}

fn format_instant(at: NaiveDateTime) -> String {
    at.format(INSTANT_FORMAT).to_string()
}

fn parse_instant(raw: &str) -> Result<NaiveDateTime, QuickcalError> {
    NaiveDateTime::parse_from_str(raw, INSTANT_FORMAT)
        .map_err(|e| QuickcalError::Database(format!("Corrupt timestamp '{raw}': {e}")))
}

fn row_to_item((id, kind, title, start, end): ItemRow) -> Result<CreatedItem, QuickcalError> {
    Ok(CreatedItem {
        id,
        kind: kind.parse().map_err(QuickcalError::Database)?,
        title,
        start: parse_instant(&start)?,
        end: end.as_deref().map(parse_instant).transpose()?,
    })
}
