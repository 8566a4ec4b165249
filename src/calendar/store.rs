//! Message-to-calendar pipeline.

use chrono::NaiveDate;

use super::client::{CalendarClient, CreatedItem};
use crate::core::CalendarEntryParseResult;
use crate::error::QuickcalError;
use crate::features::nlp::EntryParser;

/// Parses free-text messages and stores the result through a [`CalendarClient`].
pub struct EventStore<C> {
    client: C,
    parser: &'static EntryParser,
}

impl<C: CalendarClient> EventStore<C> {
    /// Create a store using the Russian parser.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            parser: EntryParser::russian(),
        }
    }

    /// Parse `message` relative to `today` and store the entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the message has an invalid date literal or the
    /// calendar fails to store the entry. Nothing is stored in the first case.
    pub fn create(&self, message: &str, today: NaiveDate) -> Result<CreatedItem, QuickcalError> {
        let entry = self.parser.parse(message, today)?;

        let created = match &entry {
            CalendarEntryParseResult::Task(task) => self.client.create_task(task)?,
            CalendarEntryParseResult::Meeting(meeting) => self.client.create_meeting(meeting)?,
        };

        tracing::info!(id = created.id, kind = %created.kind, start = %created.start, "created calendar item");
        Ok(created)
    }

    /// Everything on the calendar for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar cannot be read.
    pub fn agenda(&self, date: NaiveDate) -> Result<Vec<CreatedItem>, QuickcalError> {
        self.client.items_on(date)
    }
}
