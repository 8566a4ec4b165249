//! Title cleanup after date and time fragments are recognized.

use once_cell::sync::Lazy;
use regex::Regex;

use super::locale::{alternation, Vocabulary, RUSSIAN};
use super::span::Span;

static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\s]+").unwrap_or_else(|e| panic!("Invalid separator regex: {e}")));

/// Removes recognized fragments from a message and tidies what is left.
#[derive(Debug)]
pub struct TitleCleaner {
    leading_preposition: Regex,
}

static RUSSIAN_TITLES: Lazy<TitleCleaner> = Lazy::new(|| TitleCleaner::new(&RUSSIAN));

impl TitleCleaner {
    /// Compile the preposition pattern for `vocabulary`.
    ///
    /// # Panics
    ///
    /// Panics if the generated pattern is not a valid regex.
    #[must_use]
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let prepositions = alternation(vocabulary.title_prepositions.iter().copied());
        let pattern = format!(r"(?i)(?:^|\s)(?P<prep>{prepositions})\s*$");

        Self {
            leading_preposition: Regex::new(&pattern)
                .unwrap_or_else(|e| panic!("Invalid preposition regex: {e}")),
        }
    }

    /// Cut `spans` (and the prepositions in front of them) out of `text`.
    ///
    /// The remainder loses orphaned `0` tokens, has comma and whitespace
    /// runs collapsed to one space, and gets an upper-case first letter.
    #[must_use]
    pub fn clean(&self, text: &str, spans: &[Span]) -> String {
        let mut spans: Vec<Span> = spans
            .iter()
            .filter(|s| {
                s.start <= s.end && text.is_char_boundary(s.start) && text.is_char_boundary(s.end)
            })
            .map(|s| self.with_preposition(text, *s))
            .collect();
        spans.sort();

        let mut remaining = text.to_string();
        for span in merge(spans).iter().rev() {
            remaining.replace_range(span.start..span.end, "");
        }

        let without_zeros = remaining
            .split_whitespace()
            .filter(|token| *token != "0")
            .collect::<Vec<_>>()
            .join(" ");
        let collapsed = SEPARATOR_RUNS.replace_all(&without_zeros, " ");

        capitalize_first(collapsed.trim())
    }

    /// `span` moved back over a directly preceding preposition and its spaces.
    fn with_preposition(&self, text: &str, span: Span) -> Span {
        self.leading_preposition
            .captures(&text[..span.start])
            .and_then(|caps| caps.name("prep"))
            .map_or(span, |prep| span.extended_back_to(prep.start()))
    }
}

/// Clean a Russian message given its date and time spans.
#[must_use]
pub fn clean_title(text: &str, date_span: Option<Span>, time_span: Option<Span>) -> String {
    let spans: Vec<Span> = date_span.into_iter().chain(time_span).collect();
    RUSSIAN_TITLES.clean(text, &spans)
}

/// Coalesce overlapping spans; input must be sorted by start.
fn merge(spans: Vec<Span>) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.overlaps(&span) => *last = last.cover(&span),
            _ => merged.push(span),
        }
    }
    merged
}

/// Upper-cases the first char when its upper case is a single char.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut upper = first.to_uppercase();
        let first = match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => first,
        };
        std::iter::once(first).chain(chars).collect()
    })
}
