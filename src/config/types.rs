//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;
use crate::domain::Decision;

/// Default word count threshold.
pub const DEFAULT_COUNT: i64 = 10;

/// Main configuration structure.
///
/// ```toml
/// count = 5
/// on_match = "ACCEPT"
/// on_mismatch = "DENY"
/// ```
///
/// `onMatch`/`onMismatch` are accepted as aliases. Unknown keys are rejected
/// so a misspelled action never silently falls back to its default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word count threshold; messages with fewer words match
    pub count: i64,

    /// Action when the message matches (default: NEUTRAL)
    #[serde(alias = "onMatch")]
    pub on_match: Option<Decision>,

    /// Action otherwise (default: DENY)
    #[serde(alias = "onMismatch")]
    pub on_mismatch: Option<Decision>,

    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            on_match: None,
            on_mismatch: None,
            debug: false,
            log_path: default_log_path(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self).map(|_| ())
    }
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("word-count-filter")
        })
        .join("logs")
}
