//! Configuration management for the todo TUI.
//!
//! Handles loading and saving configuration from JSONC files.
//! Controls seed data, completion behaviour, notifications and logging.

use crate::todo::CompletionScope;
use anyhow::{Context, Result};
use dirs::{config_dir, data_local_dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "todo-tui";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Titles of the todos the store starts with
    pub seed_todos: Vec<String>,
    /// Whether completing operates on the full store or the filtered view
    pub completion_scope: CompletionScope,
    /// How long a notification stays on screen, in milliseconds
    pub toast_duration_ms: u64,
    /// Maximum number of notifications shown at once
    pub max_toasts: usize,
    /// Log filter directive (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Log file path (relative to the data dir or absolute)
    pub log_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_todos: (1..=5).map(|n| format!("todo #{}", n)).collect(),
            completion_scope: CompletionScope::FullStore,
            toast_duration_ms: 3000,
            max_toasts: 4,
            log_level: "info".to_string(),
            log_path: "todo-tui.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/todo-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/todo-tui/config.jsonc` or error
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join(APP_DIR).join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to log file or error
    ///
    /// # Details
    /// If log_path is absolute, returns it as-is.
    /// Otherwise, returns path relative to the local data directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_path);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            let data_dir = data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))?;
            Ok(data_dir.join(APP_DIR).join(&self.log_path))
        }
    }

    /// Notification lifetime as a duration.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Strip `//` comments that are not inside a string literal.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let mut prev = None;
            for (idx, ch) in line.char_indices() {
                match ch {
                    _ if escaped => escaped = false,
                    '\\' if in_string => escaped = true,
                    '"' => in_string = !in_string,
                    '/' if !in_string && prev == Some('/') => {
                        return line[..idx - 1].trim_end();
                    }
                    _ => {}
                }
                prev = Some(ch);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.seed_todos.len(), 5);
        assert_eq!(config.seed_todos[0], "todo #1");
        assert_eq!(config.completion_scope, CompletionScope::FullStore);
        assert_eq!(config.toast_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("absent.jsonc"))).unwrap();
        assert_eq!(loaded.max_toasts, 4);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            seed_todos: vec!["milk".to_string()],
            completion_scope: CompletionScope::FilteredView,
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.seed_todos, vec!["milk".to_string()]);
        assert_eq!(loaded.completion_scope, CompletionScope::FilteredView);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Start with a single todo
            "seed_todos": ["read // the docs"], // trailing comment
            "completion_scope": "filtered_view",
            "toast_duration_ms": 500
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.seed_todos, vec!["read // the docs".to_string()]);
        assert_eq!(loaded.completion_scope, CompletionScope::FilteredView);
        assert_eq!(loaded.toast_duration_ms, 500);
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_invalid_scope_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");
        fs::write(&config_path, r#"{ "completion_scope": "everything" }"#).unwrap();
        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_absolute_log_path_kept() {
        let temp_dir = TempDir::new().unwrap();
        let absolute = temp_dir.path().join("app.log");
        let config = Config {
            log_path: absolute.display().to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_file_path().unwrap(), absolute);
    }
}
