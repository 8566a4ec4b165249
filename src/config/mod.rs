//! Configuration management for quickcal.
//!
//! This module handles loading configuration from `~/.quickcal/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, LoggingConfig, StorageConfig};
