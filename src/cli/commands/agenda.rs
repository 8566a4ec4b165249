//! `quickcal agenda`: list stored items for a day.

use crate::calendar::{CalendarClient, EventStore};
use crate::cli::args::{AgendaArgs, OutputFormat};
use crate::core::local_today;
use crate::error::QuickcalError;
use crate::output::format_agenda;

/// Execute the agenda command.
///
/// # Errors
///
/// Returns an error if the calendar cannot be read or output formatting fails.
pub fn agenda<C: CalendarClient>(
    store: &EventStore<C>,
    args: &AgendaArgs,
    format: OutputFormat,
) -> Result<String, QuickcalError> {
    let date = args.date.unwrap_or_else(local_today);
    let items = store.agenda(date)?;
    tracing::debug!(%date, count = items.len(), "loaded agenda");
    format_agenda(date, &items, format)
}
