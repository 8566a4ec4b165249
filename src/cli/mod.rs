//! Command-line interface for quickcal.

pub mod args;
pub mod commands;
