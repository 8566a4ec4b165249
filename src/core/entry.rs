//! Calendar entities produced by the entry parser.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::datetime::meeting_end;

/// Which kind of calendar item a message describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A due-date item without duration.
    Task,
    /// A timed block with a start and an end.
    Meeting,
}

impl EntryKind {
    /// Stable lowercase name, used for storage and output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Meeting => "meeting",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(Self::Task),
            "meeting" => Ok(Self::Meeting),
            other => Err(format!("unknown entry kind '{other}'")),
        }
    }
}

/// A task with a due instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTask {
    pub title: String,
    pub due: NaiveDateTime,
    pub is_completed: bool,
}

impl CalendarTask {
    /// A new, not yet completed task.
    #[must_use]
    pub fn new(title: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            due,
            is_completed: false,
        }
    }
}

/// A meeting occupying `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMeeting {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarMeeting {
    /// A meeting with the default one-hour block.
    #[must_use]
    pub fn starting_at(title: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            end: meeting_end(start),
        }
    }
}

/// Outcome of parsing one message: exactly one of a task or a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarEntryParseResult {
    Task(CalendarTask),
    Meeting(CalendarMeeting),
}

impl CalendarEntryParseResult {
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Task(_) => EntryKind::Task,
            Self::Meeting(_) => EntryKind::Meeting,
        }
    }

    /// The task payload, present only for [`EntryKind::Task`].
    #[must_use]
    pub const fn task(&self) -> Option<&CalendarTask> {
        match self {
            Self::Task(task) => Some(task),
            Self::Meeting(_) => None,
        }
    }

    /// The meeting payload, present only for [`EntryKind::Meeting`].
    #[must_use]
    pub const fn meeting(&self) -> Option<&CalendarMeeting> {
        match self {
            Self::Meeting(meeting) => Some(meeting),
            Self::Task(_) => None,
        }
    }

    /// Cleaned title of whichever payload is present.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Task(task) => &task.title,
            Self::Meeting(meeting) => &meeting.title,
        }
    }

    /// Due instant of a task, start instant of a meeting.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        match self {
            Self::Task(task) => task.due,
            Self::Meeting(meeting) => meeting.start,
        }
    }
}
