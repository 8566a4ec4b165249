//! quickcal - natural-language calendar entry
//!
//! This crate turns short informal Russian messages such as
//! "22.08 16:30 рыба" into calendar tasks and meetings, and keeps them in a
//! local `SQLite` calendar.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::{ParseError, QuickcalError};
pub use features::nlp::{parse_entry, EntryParser};
