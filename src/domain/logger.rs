//! File logging for filter runs.
//!
//! Logs go to `<log_path>/word-count-filter.<date>`, one file per day.
//! `RUST_LOG` overrides the default directive.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Prefix shared by all log files written by this tool.
pub const LOG_FILE_PREFIX: &str = "word-count-filter";

/// How long rotated log files are kept.
pub const LOG_RETENTION: Duration = Duration::from_secs(2 * 24 * 60 * 60);

/// Directive used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "word_count_filter=debug";

/// Install the global subscriber writing to the configured log directory.
pub fn init(config: &Config) -> Result<()> {
    let dir = &config.log_path;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let removed = cleanup_old_logs(dir, LOG_RETENTION)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // Event decisions are made on the pipeline's threads, so name them
    let layer = fmt::layer()
        .with_writer(RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX))
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true)
        .with_line_number(true)
        .with_timer(local_timer());

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::debug!("Logging to {} ({} expired files removed)", dir.display(), removed);
    Ok(())
}

/// Timestamps in the local timezone, falling back to UTC.
fn local_timer() -> OffsetTime<&'static [BorrowedFormatItem<'static>]> {
    let offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    OffsetTime::new(
        offset,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
}

/// Whether `file_name` is one of ours and was last written before `cutoff`.
fn is_expired_log(file_name: &str, modified: SystemTime, cutoff: SystemTime) -> bool {
    file_name.starts_with(LOG_FILE_PREFIX) && modified < cutoff
}

/// Remove this tool's log files older than `retention`.
///
/// Returns the number of files removed. Files that cannot be inspected or
/// removed are skipped.
pub fn cleanup_old_logs(log_path: &Path, retention: Duration) -> Result<usize> {
    if !log_path.exists() {
        return Ok(0);
    }

    let cutoff = SystemTime::now()
        .checked_sub(retention)
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let mut removed = 0;

    for entry in fs::read_dir(log_path)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };

        if is_expired_log(name, modified, cutoff) && fs::remove_file(&path).is_ok() {
            removed += 1;
        }
    }

    Ok(removed)
}
