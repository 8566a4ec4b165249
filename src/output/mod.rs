//! Output formatting for quickcal.
//!
//! Every command result can be printed for humans or as JSON.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::calendar::CreatedItem;
use crate::cli::args::OutputFormat;
use crate::error::QuickcalError;
use crate::features::nlp::ParseOutcome;

pub use json::*;
pub use pretty::*;

/// Format a parse outcome for `text` based on output format.
///
/// # Errors
///
/// Returns `QuickcalError::Json` if JSON serialization fails.
pub fn format_outcome(
    text: &str,
    outcome: &ParseOutcome,
    format: OutputFormat,
) -> Result<String, QuickcalError> {
    match format {
        OutputFormat::Pretty => Ok(format_outcome_pretty(text, outcome)),
        OutputFormat::Json => format_outcome_json(text, outcome),
    }
}

/// Format a stored item based on output format.
///
/// # Errors
///
/// Returns `QuickcalError::Json` if JSON serialization fails.
pub fn format_created(item: &CreatedItem, format: OutputFormat) -> Result<String, QuickcalError> {
    match format {
        OutputFormat::Pretty => Ok(format_created_pretty(item)),
        OutputFormat::Json => to_json(item),
    }
}

/// Format the items of one day based on output format.
///
/// # Errors
///
/// Returns `QuickcalError::Json` if JSON serialization fails.
pub fn format_agenda(
    date: NaiveDate,
    items: &[CreatedItem],
    format: OutputFormat,
) -> Result<String, QuickcalError> {
    match format {
        OutputFormat::Pretty => Ok(format_agenda_pretty(date, items)),
        OutputFormat::Json => format_agenda_json(date, items),
    }
}
