//! Feature implementations for quickcal.
//!
//! - Natural language parsing of calendar entries
//! - Shell completions

pub mod nlp;
pub mod shell;
