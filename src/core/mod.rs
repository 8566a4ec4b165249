//! Core types shared across quickcal.
//!
//! Calendar entities and the date arithmetic the parser relies on.

pub mod datetime;
mod entry;

pub use datetime::{local_today, next_weekday, MEETING_MINUTES};
pub use entry::{CalendarEntryParseResult, CalendarMeeting, CalendarTask, EntryKind};
