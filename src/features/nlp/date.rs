//! Date recognition.
//!
//! Three families compete for the first date-like token in a message:
//! numeric literals (`22.08`, `22/08/26`, `22-08-2026`), relative day words
//! and weekday names. The leftmost match wins regardless of family.

use chrono::{Datelike, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use super::locale::{alternation, Vocabulary, RUSSIAN};
use super::span::Span;
use crate::core::datetime::{date_from_parts, next_weekday, offset_days};
use crate::error::ParseError;

/// `D[.-/]M[[.-/]Y]` with a 2- or 4-digit year.
const NUMERIC_DATE: &str =
    r"\b(?P<day>[0-9]{1,2})[./-](?P<month>[0-9]{1,2})(?:[./-](?P<year>[0-9]{4}|[0-9]{2}))?\b";

/// What a date token says, before resolution against the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DateKind {
    /// Explicit day and month; `year` is already expanded to four digits.
    Numeric {
        day: u32,
        month: u32,
        year: Option<i32>,
    },
    /// "today", "tomorrow" and friends, as a day offset.
    Relative { offset_days: u8 },
    /// Next occurrence of a weekday, never the reference date itself.
    Weekday { weekday: Weekday },
}

impl DateKind {
    /// Concrete date relative to `reference`, `None` for impossible literals.
    #[must_use]
    pub fn resolve(&self, reference: NaiveDate) -> Option<NaiveDate> {
        match *self {
            Self::Numeric { day, month, year } => {
                date_from_parts(year.unwrap_or_else(|| reference.year()), month, day)
            },
            Self::Relative { offset_days: days } => Some(offset_days(reference, days)),
            Self::Weekday { weekday } => Some(next_weekday(reference, weekday)),
        }
    }
}

/// A recognized date fragment and where it sits in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateToken {
    pub kind: DateKind,
    pub span: Span,
}

/// Date recognizer compiled from a [`Vocabulary`].
#[derive(Debug)]
pub struct DateMatcher {
    pattern: Regex,
    vocabulary: &'static Vocabulary,
}

static RUSSIAN_DATES: Lazy<DateMatcher> = Lazy::new(|| DateMatcher::new(&RUSSIAN));

impl DateMatcher {
    /// Compile the date pattern for `vocabulary`.
    ///
    /// # Panics
    ///
    /// Panics if the generated pattern is not a valid regex, which would mean
    /// the vocabulary escaping is broken.
    #[must_use]
    pub fn new(vocabulary: &'static Vocabulary) -> Self {
        let words = alternation(vocabulary.relative_days.iter().map(|(w, _)| *w));
        let weekdays = alternation(vocabulary.weekdays.iter().map(|(w, _)| *w));
        let pattern = format!(
            r"(?i)(?P<numeric>{NUMERIC_DATE})|\b(?P<word>{words})\b|\b(?P<weekday>{weekdays})\b"
        );

        Self {
            pattern: Regex::new(&pattern).unwrap_or_else(|e| panic!("Invalid date regex: {e}")),
            vocabulary,
        }
    }

    /// First date token in `text`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDate`] if a numeric literal has digits
    /// that do not fit the date fields.
    pub fn find(&self, text: &str) -> Result<Option<DateToken>, ParseError> {
        let Some(caps) = self.pattern.captures(text) else {
            return Ok(None);
        };

        let kind = if caps.name("numeric").is_some() {
            numeric_kind(&caps)?
        } else if let Some(word) = caps.name("word") {
            let offset_days = self.vocabulary.relative_offset(word.as_str()).unwrap_or_else(|| {
                unreachable!("day word '{}' matched but is not in the vocabulary", word.as_str())
            });
            DateKind::Relative { offset_days }
        } else if let Some(day) = caps.name("weekday") {
            let weekday = self.vocabulary.weekday(day.as_str()).unwrap_or_else(|| {
                unreachable!("weekday '{}' matched but is not in the vocabulary", day.as_str())
            });
            DateKind::Weekday { weekday }
        } else {
            return Ok(None);
        };

        let span = caps.get(0).map_or(Span::new(0, 0), Span::from);
        Ok(Some(DateToken { kind, span }))
    }

    /// Resolve the first date in `text` against `reference`.
    ///
    /// Without a date token the reference date itself is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDate`] for numeric literals that name no
    /// real day, such as `31.02` or `40.13`.
    pub fn extract(
        &self,
        text: &str,
        reference: NaiveDate,
    ) -> Result<(NaiveDate, Option<DateToken>), ParseError> {
        let Some(token) = self.find(text)? else {
            return Ok((reference, None));
        };

        let date = token
            .kind
            .resolve(reference)
            .ok_or_else(|| invalid_literal(&text[token.span.start..token.span.end]))?;

        tracing::trace!(?token, %date, "date token resolved");
        Ok((date, Some(token)))
    }
}

/// Resolve the first date in `text` using the Russian vocabulary.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDate`] for numeric literals that name no real day.
pub fn extract_date(
    text: &str,
    reference: NaiveDate,
) -> Result<(NaiveDate, Option<DateToken>), ParseError> {
    RUSSIAN_DATES.extract(text, reference)
}

fn numeric_kind(caps: &Captures<'_>) -> Result<DateKind, ParseError> {
    let literal = caps.name("numeric").map_or("", |m| m.as_str());
    let field = |name: &str| -> Result<u32, ParseError> {
        caps.name(name)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(|| invalid_literal(literal))
    };

    let day = field("day")?;
    let month = field("month")?;
    let year = match caps.name("year") {
        Some(m) => {
            let digits = m.as_str();
            let value: i32 = digits.parse().map_err(|_| invalid_literal(literal))?;
            Some(if digits.len() == 2 { 2000 + value } else { value })
        },
        None => None,
    };

    Ok(DateKind::Numeric { day, month, year })
}

fn invalid_literal(literal: &str) -> ParseError {
    ParseError::InvalidDate {
        literal: literal.to_string(),
    }
}
