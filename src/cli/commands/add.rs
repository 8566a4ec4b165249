//! `quickcal add`: parse a message and store it.

use crate::calendar::{CalendarClient, EventStore};
use crate::cli::args::{MessageArgs, OutputFormat};
use crate::core::local_today;
use crate::error::QuickcalError;
use crate::output::format_created;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if parsing fails, the calendar cannot store the entry,
/// or output formatting fails.
pub fn add<C: CalendarClient>(
    store: &EventStore<C>,
    args: &MessageArgs,
    format: OutputFormat,
) -> Result<String, QuickcalError> {
    let today = args.today.unwrap_or_else(local_today);
    let created = store.create(&args.message(), today)?;
    format_created(&created, format)
}
