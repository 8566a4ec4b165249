//! Error types for quickcal.

use thiserror::Error;

/// Errors produced while parsing a calendar entry.
///
/// Absence of a date or time is not an error; the parser falls back to
/// defaults. Only literals that cannot name a real calendar day fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A numeric date literal such as `40.13` that is not a real calendar day.
    #[error("invalid date literal '{literal}'")]
    InvalidDate {
        /// The matched text, exactly as written by the user.
        literal: String,
    },
}

/// Top-level error type for quickcal.
#[derive(Debug, Error)]
pub enum QuickcalError {
    /// The message could not be turned into a calendar entry.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration could not be read, parsed or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// A local database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// A command-line argument had an unusable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message_quotes_literal() {
        let err = ParseError::InvalidDate {
            literal: "40.13".to_string(),
        };
        assert_eq!(err.to_string(), "invalid date literal '40.13'");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: QuickcalError = ParseError::InvalidDate {
            literal: "31.02".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid date literal '31.02'");
    }
}
