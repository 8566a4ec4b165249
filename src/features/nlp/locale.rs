//! Locale vocabulary for the entry parser.
//!
//! Every word the matchers recognize lives in a [`Vocabulary`] table. The
//! regular expressions are generated from these tables, so the lookup in
//! [`Vocabulary::weekday`] and the alternation in the date pattern cannot
//! drift apart.

use chrono::Weekday;

/// Words a locale uses for dates, weekdays and prepositions.
#[derive(Debug)]
pub struct Vocabulary {
    /// Day words and their offset from the reference date.
    pub relative_days: &'static [(&'static str, u8)],
    /// Weekday names in every accepted form, abbreviations included.
    pub weekdays: &'static [(&'static str, Weekday)],
    /// Prepositions that may introduce an hour ("at 16").
    pub time_prepositions: &'static [&'static str],
    /// Prepositions removed from the title together with the fragment they precede.
    pub title_prepositions: &'static [&'static str],
}

/// Russian vocabulary.
pub static RUSSIAN: Vocabulary = Vocabulary {
    relative_days: &[
        ("сегодня", 0),
        ("завтра", 1),
        ("послезавтра", 2),
        ("послепослезавтра", 3),
    ],
    weekdays: &[
        ("понедельник", Weekday::Mon),
        ("пн", Weekday::Mon),
        ("вторник", Weekday::Tue),
        ("вт", Weekday::Tue),
        ("среда", Weekday::Wed),
        ("среду", Weekday::Wed),
        ("ср", Weekday::Wed),
        ("четверг", Weekday::Thu),
        ("чт", Weekday::Thu),
        ("пятница", Weekday::Fri),
        ("пятницу", Weekday::Fri),
        ("пт", Weekday::Fri),
        ("суббота", Weekday::Sat),
        ("субботу", Weekday::Sat),
        ("сб", Weekday::Sat),
        ("воскресенье", Weekday::Sun),
        ("вс", Weekday::Sun),
    ],
    time_prepositions: &["в", "на"],
    title_prepositions: &["в", "на", "к"],
};

impl Vocabulary {
    /// Offset in days for a relative day word, any casing.
    #[must_use]
    pub fn relative_offset(&self, word: &str) -> Option<u8> {
        let word = word.to_lowercase();
        self.relative_days
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, offset)| *offset)
    }

    /// Weekday named by `word`, any casing.
    #[must_use]
    pub fn weekday(&self, word: &str) -> Option<Weekday> {
        let word = word.to_lowercase();
        self.weekdays
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, day)| *day)
    }
}

/// Regex alternation matching any of `words`, longest first.
pub(crate) fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = words.into_iter().collect();
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    words.dedup();
    words
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_offsets() {
        assert_eq!(RUSSIAN.relative_offset("сегодня"), Some(0));
        assert_eq!(RUSSIAN.relative_offset("Завтра"), Some(1));
        assert_eq!(RUSSIAN.relative_offset("ПОСЛЕЗАВТРА"), Some(2));
        assert_eq!(RUSSIAN.relative_offset("послепослезавтра"), Some(3));
        assert_eq!(RUSSIAN.relative_offset("вчера"), None);
    }

    #[test]
    fn test_weekday_forms() {
        assert_eq!(RUSSIAN.weekday("среда"), Some(Weekday::Wed));
        assert_eq!(RUSSIAN.weekday("среду"), Some(Weekday::Wed));
        assert_eq!(RUSSIAN.weekday("Пятницу"), Some(Weekday::Fri));
        assert_eq!(RUSSIAN.weekday("вс"), Some(Weekday::Sun));
        assert_eq!(RUSSIAN.weekday("рыба"), None);
    }

    #[test]
    fn test_every_weekday_is_covered() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert!(RUSSIAN.weekdays.iter().any(|(_, d)| *d == day), "{day} missing");
        }
    }

    #[test]
    fn test_alternation_prefers_longer_words() {
        let alt = alternation(["завтра", "послезавтра", "в", "на"]);
        assert_eq!(alt, "послезавтра|завтра|на|в");
    }

    #[test]
    fn test_alternation_escapes_metacharacters() {
        assert_eq!(alternation(["a.b"]), r"a\.b");
    }
}
