//! Calendar entry parser.
//!
//! Turns one informal line such as "22.08 в 16 рыба" or "купить молоко" into
//! a meeting or a task. Date and time recognition are independent scans of
//! the raw text, reconciled by span overlap; the title is what is left once
//! both fragments are cut out.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::date::{DateMatcher, DateToken};
use super::locale::{Vocabulary, RUSSIAN};
use super::span::Span;
use super::time::{TimeMatcher, TimeToken};
use super::title::TitleCleaner;
use crate::core::datetime::at_time;
use crate::core::{CalendarEntryParseResult, CalendarMeeting, CalendarTask, EntryKind};
use crate::error::ParseError;

/// A parse result together with the tokens that shaped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub result: CalendarEntryParseResult,
    pub date: Option<DateToken>,
    pub time: Option<TimeToken>,
}

/// Parser for one locale. Stateless once built; share it freely.
#[derive(Debug)]
pub struct EntryParser {
    dates: DateMatcher,
    times: TimeMatcher,
    titles: TitleCleaner,
}

static RUSSIAN_PARSER: Lazy<EntryParser> = Lazy::new(|| EntryParser::new(&RUSSIAN));

impl EntryParser {
    /// Build a parser whose matchers come from `vocabulary`.
    #[must_use]
    pub fn new(vocabulary: &'static Vocabulary) -> Self {
        Self {
            dates: DateMatcher::new(vocabulary),
            times: TimeMatcher::new(vocabulary),
            titles: TitleCleaner::new(vocabulary),
        }
    }

    /// The shared Russian-language parser.
    #[must_use]
    pub fn russian() -> &'static Self {
        &RUSSIAN_PARSER
    }

    /// Parse `text` relative to `reference`, keeping the matched tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDate`] when a numeric date literal names
    /// no real calendar day.
    pub fn parse_detailed(
        &self,
        text: &str,
        reference: NaiveDate,
    ) -> Result<ParseOutcome, ParseError> {
        let (date, date_token) = self.dates.extract(text, reference)?;
        let date_span = date_token.map(|t| t.span);
        let (time, time_token) = self.times.extract(text, date_span);

        let spans: Vec<Span> = date_span.into_iter().chain(time_token.map(|t| t.span)).collect();
        let title = self.titles.clean(text, &spans);
        let kind = classify(date_token.as_ref(), time_token.as_ref());
        let result = build_result(kind, title, at_time(date, time));

        tracing::debug!(kind = %result.kind(), start = %result.start(), "parsed calendar entry");
        Ok(ParseOutcome {
            result,
            date: date_token,
            time: time_token,
        })
    }

    /// Parse `text` relative to `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidDate`] when a numeric date literal names
    /// no real calendar day.
    pub fn parse(
        &self,
        text: &str,
        reference: NaiveDate,
    ) -> Result<CalendarEntryParseResult, ParseError> {
        self.parse_detailed(text, reference).map(|outcome| outcome.result)
    }
}

/// Parse a Russian message relative to `reference`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quickcal::core::EntryKind;
/// use quickcal::features::nlp::parse_entry;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
///
/// let entry = parse_entry("22.08 16:30 рыба", today).unwrap();
/// assert_eq!(entry.kind(), EntryKind::Meeting);
/// assert_eq!(entry.title(), "Рыба");
///
/// let entry = parse_entry("купить молоко", today).unwrap();
/// assert_eq!(entry.kind(), EntryKind::Task);
/// ```
///
/// # Errors
///
/// Returns [`ParseError::InvalidDate`] when a numeric date literal names no
/// real calendar day.
pub fn parse_entry(text: &str, reference: NaiveDate) -> Result<CalendarEntryParseResult, ParseError> {
    RUSSIAN_PARSER.parse(text, reference)
}

/// Any recognized date or time makes a meeting, a date alone included.
#[must_use]
pub const fn classify(date: Option<&DateToken>, time: Option<&TimeToken>) -> EntryKind {
    if date.is_some() || time.is_some() {
        EntryKind::Meeting
    } else {
        EntryKind::Task
    }
}

/// Assemble the entity for `kind`. Meetings get the default one-hour block.
#[must_use]
pub fn build_result(kind: EntryKind, title: String, at: NaiveDateTime) -> CalendarEntryParseResult {
    match kind {
        EntryKind::Task => CalendarEntryParseResult::Task(CalendarTask::new(title, at)),
        EntryKind::Meeting => {
            CalendarEntryParseResult::Meeting(CalendarMeeting::starting_at(title, at))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::time::TimeTier;
    use chrono::{Datelike, Duration, Weekday};

    // 2025-01-10 is a Friday
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn meeting(text: &str) -> CalendarMeeting {
        match parse_entry(text, today()).unwrap() {
            CalendarEntryParseResult::Meeting(meeting) => meeting,
            other => panic!("expected a meeting for {text:?}, got {other:?}"),
        }
    }

    fn next(day: Weekday) -> NaiveDate {
        crate::core::next_weekday(today(), day)
    }

    // ======================
    // Reference scenarios
    // ======================

    #[test]
    fn test_date_time_and_title() {
        let m = meeting("22.08 16:30 рыба");
        assert_eq!(m.start, at(2025, 8, 22, 16, 30));
        assert_eq!(m.title, "Рыба");
    }

    #[test]
    fn test_date_only_is_a_meeting_at_midnight() {
        let m = meeting("22.08 рыба");
        assert_eq!(m.start, at(2025, 8, 22, 0, 0));
        assert_eq!(m.title, "Рыба");
    }

    #[test]
    fn test_bare_hour_only() {
        let m = meeting("16 рыба");
        assert_eq!(m.start, at(2025, 1, 10, 16, 0));
        assert_eq!(m.title, "Рыба");
    }

    #[test]
    fn test_no_date_no_time_is_a_task_due_at_midnight() {
        let entry = parse_entry("купить молоко", today()).unwrap();
        assert_eq!(entry.kind(), EntryKind::Task);
        let task = entry.task().unwrap();
        assert_eq!(task.title, "Купить молоко");
        assert_eq!(task.due, at(2025, 1, 10, 0, 0));
        assert!(!task.is_completed);
        assert!(entry.meeting().is_none());
    }

    #[test]
    fn test_weekday_and_bare_hour() {
        let m = meeting("понедельник 9 рыба");
        assert_eq!(m.start, at(2025, 1, 13, 9, 0));
        assert_eq!(m.title, "Рыба");
    }

    #[test]
    fn test_slashed_date_with_short_year_and_preposition() {
        let m = meeting("22/08/26 в 9 рыба");
        assert_eq!(m.start, at(2026, 8, 22, 9, 0));
        assert_eq!(m.title, "Рыба");
    }

    // ======================
    // Regression suite
    // ======================

    #[test]
    fn test_date_and_bare_hour() {
        let m = meeting("22.08 16 Рыба");
        assert_eq!(m.start, at(2025, 8, 22, 16, 0));
        assert_eq!(m.title, "Рыба");
    }

    #[test]
    fn test_date_and_prepositioned_hour() {
        let m = meeting("22.08 на 16 Рыба");
        assert_eq!(m.start, at(2025, 8, 22, 16, 0));
        assert_eq!(m.title, "Рыба");
    }

    #[test]
    fn test_time_before_relative_word() {
        let m = meeting("на 16 послезавтра Рыба");
        assert_eq!(m.start, at(2025, 1, 12, 16, 0));
        assert_eq!(m.title, "Рыба");
    }

    #[test]
    fn test_separators_and_years() {
        assert_eq!(meeting("22/08 16:05 Рыба").start, at(2025, 8, 22, 16, 5));
        assert_eq!(meeting("22-08-2026 7 Рыба").start, at(2026, 8, 22, 7, 0));
        assert_eq!(meeting("22.08.26 в 9 Рыба").start, at(2026, 8, 22, 9, 0));

        for text in ["22/08 16:05 Рыба", "22-08-2026 7 Рыба", "22.08.26 в 9 Рыба"] {
            assert_eq!(meeting(text).title, "Рыба", "{text}");
        }
    }

    #[test]
    fn test_relative_words() {
        assert_eq!(meeting("сегодня 10 Рыба").start, at(2025, 1, 10, 10, 0));
        assert_eq!(meeting("завтра 10 Рыба").start, at(2025, 1, 11, 10, 0));
        assert_eq!(meeting("послезавтра 10 Рыба").start, at(2025, 1, 12, 10, 0));
        assert_eq!(meeting("послепослезавтра 10 Рыба").start, at(2025, 1, 13, 10, 0));
    }

    #[test]
    fn test_weekdays() {
        let mon = meeting("понедельник 9 Рыба");
        let wed = meeting("среду в 14 Рыба");
        let sat = meeting("суббота 18 Рыба");

        assert_eq!(mon.start, next(Weekday::Mon).and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(wed.start, next(Weekday::Wed).and_hms_opt(14, 0, 0).unwrap());
        assert_eq!(sat.start, next(Weekday::Sat).and_hms_opt(18, 0, 0).unwrap());

        for m in [mon, wed, sat] {
            assert_eq!(m.title, "Рыба");
        }
    }

    #[test]
    fn test_todays_weekday_means_next_week() {
        let m = meeting("пятница 12 обед");
        assert_eq!(m.start.date(), today() + Duration::days(7));
        assert_eq!(m.start.date().weekday(), Weekday::Fri);
    }

    #[test]
    fn test_title_noise_is_removed() {
        assert_eq!(meeting("22.08 в 16:30   ,    Рыба   ").title, "Рыба");
    }

    #[test]
    fn test_time_after_title() {
        let m = meeting("Рыба 22.08 в 18");
        assert_eq!(m.start, at(2025, 8, 22, 18, 0));
        assert_eq!(m.title, "Рыба");
    }

    #[test]
    fn test_orphan_zero_is_not_in_title() {
        assert_eq!(meeting("на 16 послезавтра   0   Рыба").title, "Рыба");
    }

    #[test]
    fn test_bare_hour_next_to_date() {
        let m = meeting("22.08 16 Рыба встреча");
        assert_eq!(m.start, at(2025, 8, 22, 16, 0));
        assert_eq!(m.title, "Рыба встреча");
    }

    #[test]
    fn test_spaced_separator_leaves_hour_after_it() {
        let m = meeting("22 - 08 рыба");
        assert_eq!(m.start, at(2025, 1, 10, 8, 0));
        assert_eq!(m.title, "22 - рыба");
    }

    #[test]
    fn test_uppercase_expansion_keeps_first_letter() {
        assert_eq!(meeting("ß рыба 16").title, "ß рыба");
    }

    #[test]
    fn test_colon_time_is_not_a_date() {
        let m = meeting("16:30 Рыба");
        assert_eq!(m.start, at(2025, 1, 10, 16, 30));
        assert_eq!(m.title, "Рыба");
    }

    // ======================
    // Result shape
    // ======================

    #[test]
    fn test_meeting_lasts_one_hour() {
        let m = meeting("завтра 23:30 созвон");
        assert_eq!(m.end - m.start, Duration::hours(1));
        assert_eq!(m.end, at(2025, 1, 12, 0, 30));
    }

    #[test]
    fn test_empty_title_is_passed_through() {
        let m = meeting("завтра в 16");
        assert_eq!(m.title, "");
    }

    #[test]
    fn test_invalid_date_literal_is_an_error() {
        let err = parse_entry("32.01 рыба", today()).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidDate {
                literal: "32.01".to_string()
            }
        );
    }

    #[test]
    fn test_error_does_not_poison_later_calls() {
        assert!(parse_entry("31.02 рыба", today()).is_err());
        assert_eq!(meeting("28.02 рыба").start, at(2025, 2, 28, 0, 0));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "в пятницу в 9, ревью";
        assert_eq!(
            parse_entry(text, today()).unwrap(),
            parse_entry(text, today()).unwrap()
        );
    }

    #[test]
    fn test_reference_date_drives_relative_words() {
        let new_year = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let entry = parse_entry("завтра 10 салют", new_year).unwrap();
        assert_eq!(entry.start(), at(2026, 1, 1, 10, 0));
    }

    #[test]
    fn test_detailed_outcome_exposes_tokens() {
        let outcome = EntryParser::russian()
            .parse_detailed("22.08 на 16 Рыба", today())
            .unwrap();
        assert_eq!(outcome.date.unwrap().span, Span::new(0, 5));
        let time = outcome.time.unwrap();
        assert_eq!(time.tier, TimeTier::PrepositionedHour);
        assert_eq!(time.hour, 16);
    }

    // ======================
    // Classifier
    // ======================

    #[test]
    fn test_classify() {
        let date = DateToken {
            kind: crate::features::nlp::DateKind::Relative { offset_days: 1 },
            span: Span::new(0, 1),
        };
        let time = TimeToken {
            hour: 9,
            minute: 0,
            tier: TimeTier::BareHour,
            span: Span::new(2, 3),
        };

        assert_eq!(classify(None, None), EntryKind::Task);
        assert_eq!(classify(Some(&date), None), EntryKind::Meeting);
        assert_eq!(classify(None, Some(&time)), EntryKind::Meeting);
        assert_eq!(classify(Some(&date), Some(&time)), EntryKind::Meeting);
    }

    #[test]
    fn test_build_task() {
        let entry = build_result(EntryKind::Task, "Отчёт".to_string(), at(2025, 1, 10, 0, 0));
        assert_eq!(entry.task().unwrap().due, at(2025, 1, 10, 0, 0));
    }
}
