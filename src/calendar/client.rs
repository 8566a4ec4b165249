//! The calendar client seam.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::{CalendarMeeting, CalendarTask, EntryKind};
use crate::error::QuickcalError;

/// An item as the calendar stored it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedItem {
    pub id: i64,
    pub kind: EntryKind,
    pub title: String,
    /// Due instant of a task, start of a meeting.
    pub start: NaiveDateTime,
    /// End of a meeting; tasks have none.
    pub end: Option<NaiveDateTime>,
}

/// A calendar that can store tasks and meetings.
#[cfg_attr(test, mockall::automock)]
pub trait CalendarClient {
    /// Store a task and return its canonical representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar rejects or cannot store the task.
    fn create_task(&self, task: &CalendarTask) -> Result<CreatedItem, QuickcalError>;

    /// Store a meeting and return its canonical representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar rejects or cannot store the meeting.
    fn create_meeting(&self, meeting: &CalendarMeeting) -> Result<CreatedItem, QuickcalError>;

    /// Items starting (or due) on `date`, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot be read.
    fn items_on(&self, date: NaiveDate) -> Result<Vec<CreatedItem>, QuickcalError>;
}
