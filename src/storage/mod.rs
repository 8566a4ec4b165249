//! Storage layer for quickcal.
//!
//! SQLite persistence for calendar items created from parsed messages.

mod database;
mod migrations;

pub use database::Database;
