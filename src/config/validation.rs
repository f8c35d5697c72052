//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;
use crate::domain::{TracingReporter, WordCountFilter};

/// Validate configuration and build the filter it describes.
///
/// Threshold errors are also reported through `tracing`, so they reach the
/// log file when logging is initialized before this call.
pub fn validate(config: &Config) -> Result<WordCountFilter> {
    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    let filter = WordCountFilter::from_config(config, &TracingReporter)?;

    Ok(filter)
}
