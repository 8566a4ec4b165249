//! `quickcal parse`: show how a message is understood.

use crate::cli::args::{MessageArgs, OutputFormat};
use crate::core::local_today;
use crate::error::QuickcalError;
use crate::features::nlp::EntryParser;
use crate::output::format_outcome;

/// Execute the parse command. Nothing is stored.
///
/// # Errors
///
/// Returns an error if the message has an invalid date literal or output
/// formatting fails.
pub fn parse(args: &MessageArgs, format: OutputFormat) -> Result<String, QuickcalError> {
    let text = args.message();
    let today = args.today.unwrap_or_else(local_today);
    let outcome = EntryParser::russian().parse_detailed(&text, today)?;
    format_outcome(&text, &outcome, format)
}
