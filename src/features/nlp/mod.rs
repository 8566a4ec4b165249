//! Natural language parsing for calendar entries.
//!
//! This module turns informal Russian messages into tasks and meetings:
//! - "22.08 16:30 рыба" → meeting on 22 August at 16:30, titled "Рыба"
//! - "понедельник 9 планёрка" → meeting next Monday at 09:00
//! - "купить молоко" → task due today

mod date;
mod locale;
mod parser;
mod span;
mod time;
mod title;

pub use date::{extract_date, DateKind, DateMatcher, DateToken};
pub use locale::{Vocabulary, RUSSIAN};
pub use parser::{build_result, classify, parse_entry, EntryParser, ParseOutcome};
pub use span::Span;
pub use time::{extract_time, TimeMatcher, TimeTier, TimeToken};
pub use title::{clean_title, TitleCleaner};
