//! JSON output formatting.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::calendar::CreatedItem;
use crate::error::QuickcalError;
use crate::features::nlp::ParseOutcome;

/// Format a parse outcome as JSON, echoing the input message.
///
/// # Errors
///
/// Returns `QuickcalError::Json` if JSON serialization fails.
pub fn format_outcome_json(text: &str, outcome: &ParseOutcome) -> Result<String, QuickcalError> {
    let output = json!({
        "input": text,
        "entry": outcome.result,
        "date": outcome.date,
        "time": outcome.time,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the items of one day as JSON.
///
/// # Errors
///
/// Returns `QuickcalError::Json` if JSON serialization fails.
pub fn format_agenda_json(date: NaiveDate, items: &[CreatedItem]) -> Result<String, QuickcalError> {
    let output = json!({
        "date": date,
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `QuickcalError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, QuickcalError> {
    Ok(serde_json::to_string_pretty(value)?)
}
