//! Path resolution for quickcal configuration and data files.
//!
//! All quickcal data is stored in `~/.quickcal/`:
//! - `config.yaml` - Main configuration file
//! - `quickcal.db` - SQLite database with created calendar items

use std::path::PathBuf;

use crate::error::QuickcalError;

/// Paths to quickcal configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.quickcal/`
    pub root: PathBuf,
    /// Config file: `~/.quickcal/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.quickcal/quickcal.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, QuickcalError> {
        let home = std::env::var("HOME")
            .map_err(|_| QuickcalError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".quickcal")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("quickcal.db"),
            root,
        }
    }
}
