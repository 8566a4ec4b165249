//! Byte ranges of recognized fragments within the input text.

use serde::Serialize;

/// Half-open byte interval `[start, end)` into the parsed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether the two intervals share at least one byte.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    /// Smallest span covering both.
    #[must_use]
    pub fn cover(&self, other: &Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// The same span with its start moved back to `start`.
    #[must_use]
    pub fn extended_back_to(&self, start: usize) -> Self {
        Self::new(start.min(self.start), self.end)
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}

/// `true` if `span` is clear of `other`, or there is no `other`.
#[must_use]
pub fn clear_of(span: Span, other: Option<Span>) -> bool {
    other.map_or(true, |o| !span.overlaps(&o))
}
