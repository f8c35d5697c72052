//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::default_log_path_for_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    /// Always uses ~/.config/word-count-filter/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("word-count-filter")
            .join("config.toml")
    }

    /// Load and validate configuration from file.
    ///
    /// If `path` is `None`, uses the default path. A missing file is created
    /// with the default content first.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);
        let config = Self::load_unvalidated(Some(&path))?;
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration without validating it.
    ///
    /// Lets the caller set up logging from the file before validation
    /// diagnostics are emitted.
    pub fn load_unvalidated(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        if !path.exists() {
            Self::generate_at(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::deserialize(&content, path.parent())
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration content.
    pub fn parse(content: &str, config_dir: Option<&Path>) -> Result<Config> {
        let config = Self::deserialize(content, config_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Deserialize configuration content.
    ///
    /// When `log_path` is not set, logs go to `<config_dir>/logs`.
    fn deserialize(content: &str, config_dir: Option<&Path>) -> Result<Config> {
        let mut config: Config = toml::from_str(content).context("Failed to parse TOML")?;

        // Unset log_path still holds the general default
        if config.log_path == default_log_path_for_config_dir(None) {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content();
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> String {
        r#"# word-count-filter configuration file

# Word count threshold (default: 10, must be >= 0)
# Messages with strictly fewer words than this take the on_match action.
count = 10

# Action when the message has fewer than `count` words (default: NEUTRAL)
# One of ACCEPT, DENY, NEUTRAL (case-insensitive)
# on_match = "NEUTRAL"

# Action otherwise, and for events without a message (default: DENY)
# on_mismatch = "DENY"

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# If --config is specified, logs go to that directory/logs
# log_path = "~/.config/word-count-filter/logs"
"#
        .to_string()
    }
}
