//! File-based tracing setup.
//!
//! The terminal is owned by the UI, so log output goes to a file instead of
//! stderr. `RUST_LOG` takes precedence over the configured level; a
//! configured level that does not parse falls back to `info` and is reported
//! in the log once the subscriber is up.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const DEFAULT_LEVEL: &str = "info";

/// Build the filter for a configured level, falling back to `info`.
fn level_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LEVEL), Some(err)),
    }
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `level` - Default filter directive, e.g. `info` or `todo_tui=debug`
/// * `log_file` - File to append log lines to
///
/// # Returns
/// * `Result<()>` - Error if the file cannot be opened or a subscriber is already set
pub fn init_logging(level: &str, log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => level_filter(level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %log_file.display(),
        "logging initialized"
    );
    if let Some(err) = rejected {
        tracing::warn!(
            configured = level,
            error = %err,
            "invalid log level, using {}",
            DEFAULT_LEVEL
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_level_filter_accepts_valid_level() {
        let (filter, rejected) = level_filter("debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert!(rejected.is_none());
    }

    #[test]
    fn test_level_filter_falls_back_to_info() {
        let (filter, rejected) = level_filter("todo_tui=notalevel");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        assert!(rejected.is_some());
    }

    // Installs the global subscriber; keep it the only test that does.
    #[test]
    fn test_init_logging_creates_log_file() {
        let dir = tempdir().unwrap();
        let log_file = dir.path().join("nested").join("todo-tui.log");
        init_logging("not=a=level", &log_file).unwrap();
        assert!(log_file.exists());
    }
}
