//! Clock time recognition.
//!
//! Times are found by three tiers tried in order. A tier wins as soon as it
//! yields a candidate outside the date span; lower tiers are then ignored.
//!
//! 1. `16:30`: hour and minutes joined by a colon
//! 2. `в 16`, `на 9`: an hour introduced by a preposition
//! 3. `16`: a bare hour that is not part of a `22.08`-style date

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::locale::{alternation, Vocabulary, RUSSIAN};
use super::span::{clear_of, Span};
use crate::core::datetime::time_of_day;

const HOUR: &str = r"(?P<hour>[01]?[0-9]|2[0-3])";
const MINUTE: &str = r"(?P<minute>[0-5][0-9])";

/// Which recognition strategy produced a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeTier {
    Exact,
    PrepositionedHour,
    BareHour,
}

/// A recognized clock time and where it sits in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeToken {
    pub hour: u32,
    pub minute: u32,
    pub tier: TimeTier,
    pub span: Span,
}

impl TimeToken {
    /// Time of day this token denotes.
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        time_of_day(self.hour, self.minute).unwrap_or_default()
    }
}

type TierMatcher = fn(&TimeMatcher, &str, Option<Span>) -> Option<TimeToken>;

/// Tiers in priority order.
const TIERS: [TierMatcher; 3] = [
    TimeMatcher::exact_time,
    TimeMatcher::prepositioned_hour,
    TimeMatcher::bare_hour,
];

/// Time recognizer compiled from a [`Vocabulary`].
#[derive(Debug)]
pub struct TimeMatcher {
    exact: Regex,
    prepositioned: Regex,
    bare: Regex,
}

static RUSSIAN_TIMES: Lazy<TimeMatcher> = Lazy::new(|| TimeMatcher::new(&RUSSIAN));

impl TimeMatcher {
    /// Compile the time patterns for `vocabulary`.
    ///
    /// # Panics
    ///
    /// Panics if a generated pattern is not a valid regex.
    #[must_use]
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let prepositions = alternation(vocabulary.time_prepositions.iter().copied());

        Self {
            exact: compile(&format!(r"\b{HOUR}:{MINUTE}\b")),
            prepositioned: compile(&format!(r"(?i)\b(?:{prepositions})\s*{HOUR}\b")),
            bare: compile(&format!(r"\b{HOUR}\b")),
        }
    }

    /// First time in `text` outside `date_span`, by tier priority.
    ///
    /// Without a match the time is midnight and no token is returned.
    #[must_use]
    pub fn extract(&self, text: &str, date_span: Option<Span>) -> (NaiveTime, Option<TimeToken>) {
        let token = TIERS.iter().find_map(|tier| tier(self, text, date_span));

        if let Some(token) = &token {
            tracing::trace!(?token, "time token matched");
        }

        (token.map_or_else(NaiveTime::default, |t| t.time()), token)
    }

    fn exact_time(&self, text: &str, date_span: Option<Span>) -> Option<TimeToken> {
        self.exact
            .captures_iter(text)
            .filter_map(|caps| {
                let span = Span::from(caps.get(0)?);
                let hour = caps.name("hour")?.as_str().parse().ok()?;
                let minute = caps.name("minute")?.as_str().parse().ok()?;
                Some(TimeToken {
                    hour,
                    minute,
                    tier: TimeTier::Exact,
                    span,
                })
            })
            .find(|token| clear_of(token.span, date_span))
    }

    fn prepositioned_hour(&self, text: &str, date_span: Option<Span>) -> Option<TimeToken> {
        hours(&self.prepositioned, text, TimeTier::PrepositionedHour)
            .find(|token| clear_of(token.span, date_span))
    }

    fn bare_hour(&self, text: &str, date_span: Option<Span>) -> Option<TimeToken> {
        hours(&self.bare, text, TimeTier::BareHour).find(|token| {
            clear_of(token.span, date_span)
                && !joined_before(text, token.span.start)
                && !joined_after(text, token.span.end)
        })
    }
}

/// First time in `text` outside `date_span`, using the Russian vocabulary.
#[must_use]
pub fn extract_time(text: &str, date_span: Option<Span>) -> (NaiveTime, Option<TimeToken>) {
    RUSSIAN_TIMES.extract(text, date_span)
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
}

/// Hour-only candidates of `pattern`, left to right.
fn hours<'a>(
    pattern: &'a Regex,
    text: &'a str,
    tier: TimeTier,
) -> impl Iterator<Item = TimeToken> + 'a {
    pattern.captures_iter(text).filter_map(move |caps| {
        Some(TimeToken {
            hour: caps.name("hour")?.as_str().parse().ok()?,
            minute: 0,
            tier,
            span: Span::from(caps.get(0)?),
        })
    })
}

fn is_date_separator(c: char) -> bool {
    matches!(c, '.' | '-' | '/')
}

/// Whether the text before `start` ends with `<digit><separator>`.
fn joined_before(text: &str, start: usize) -> bool {
    let mut before = text[..start].chars().rev();
    before.next().is_some_and(is_date_separator) && before.next().is_some_and(|c| c.is_ascii_digit())
}

/// Whether the text from `end` continues with `<separator><digit>`, spaces allowed.
fn joined_after(text: &str, end: usize) -> bool {
    text[end..]
        .trim_start()
        .strip_prefix(is_date_separator)
        .is_some_and(|rest| rest.trim_start().starts_with(|c: char| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn token(text: &str) -> Option<TimeToken> {
        extract_time(text, None).1
    }

    #[test]
    fn test_no_time_is_midnight() {
        let (time, token) = extract_time("купить молоко", None);
        assert_eq!(time, hm(0, 0));
        assert!(token.is_none());
    }

    #[test]
    fn test_exact_time() {
        let (time, token) = extract_time("рыба 16:30", None);
        assert_eq!(time, hm(16, 30));
        let token = token.unwrap();
        assert_eq!(token.tier, TimeTier::Exact);
        assert_eq!(token.span, Span::new("рыба ".len(), "рыба 16:30".len()));
    }

    #[test]
    fn test_exact_time_single_digit_hour() {
        assert_eq!(extract_time("7:05 рыба", None).0, hm(7, 5));
    }

    #[test]
    fn test_exact_time_rejects_out_of_range_minutes() {
        // 16:75 is no clock time; the bare tier still finds the hour
        let token = token_of("16:75 рыба");
        assert_eq!(token.tier, TimeTier::BareHour);
        assert_eq!(token.hour, 16);
    }

    fn token_of(text: &str) -> TimeToken {
        token(text).unwrap()
    }

    #[test]
    fn test_dot_is_not_a_time_separator() {
        // 16.30 reads as a date, and both halves are joined to it
        assert!(token("16.30 рыба").is_none());
    }

    #[test]
    fn test_exact_beats_prepositioned() {
        let token = token_of("в 9 созвон 16:30");
        assert_eq!(token.tier, TimeTier::Exact);
        assert_eq!((token.hour, token.minute), (16, 30));
    }

    #[test]
    fn test_prepositioned_hour_includes_preposition() {
        let text = "рыба на 16";
        let token = token_of(text);
        assert_eq!(token.tier, TimeTier::PrepositionedHour);
        assert_eq!(token.hour, 16);
        assert_eq!(&text[token.span.start..token.span.end], "на 16");
    }

    #[test]
    fn test_prepositioned_hour_without_space() {
        let token = token_of("рыба в9");
        assert_eq!(token.tier, TimeTier::PrepositionedHour);
        assert_eq!(token.hour, 9);
    }

    #[test]
    fn test_prepositioned_beats_bare() {
        let token = token_of("3 рыбы в 18");
        assert_eq!(token.tier, TimeTier::PrepositionedHour);
        assert_eq!(token.hour, 18);
    }

    #[test]
    fn test_bare_hour() {
        let token = token_of("16 рыба");
        assert_eq!(token.tier, TimeTier::BareHour);
        assert_eq!((token.hour, token.minute), (16, 0));
    }

    #[test]
    fn test_bare_hour_rejects_out_of_range() {
        assert!(token("купить 25 рыб").is_none());
        assert!(token("купить 100 рыб").is_none());
    }

    #[test]
    fn test_bare_hour_skips_date_parts() {
        assert!(token("22.08 рыба").is_none());
        assert!(token("22/08 рыба").is_none());
        assert!(token("22 - 08.2025 рыба").is_none());
    }

    #[test]
    fn test_bare_hour_after_date_is_eligible() {
        let date = Some(Span::new(0, 5));
        let (time, token) = extract_time("22.08 16 рыба", date);
        assert_eq!(time, hm(16, 0));
        assert_eq!(token.unwrap().span, Span::new(6, 8));
    }

    #[test]
    fn test_bare_hour_after_dated_year() {
        let text = "22-08-2026 7 рыба";
        let (time, _) = extract_time(text, Some(Span::new(0, 10)));
        assert_eq!(time, hm(7, 0));
    }

    #[test]
    fn test_candidates_inside_date_span_are_skipped() {
        // "на 22" would match the preposition tier but belongs to the date
        let text = "на 22.08 в 16";
        let date = Some(Span::new("на ".len(), "на 22.08".len()));
        let token = extract_time(text, date).1.unwrap();
        assert_eq!(token.tier, TimeTier::PrepositionedHour);
        assert_eq!(token.hour, 16);
    }

    #[test]
    fn test_number_glued_to_word_is_not_an_hour() {
        assert!(token("купить 2шт рыбы").is_none());
    }

    #[test]
    fn test_joined_helpers() {
        assert!(joined_before("22.08", 3));
        assert!(!joined_before("22 08", 3));
        assert!(!joined_before("08", 0));
        assert!(joined_after("22 / 08", 2));
        assert!(!joined_after("22 рыба", 2));
        assert!(!joined_after("22.", 2));
    }
}
