//! Configuration for the bet-report CLI

use anyhow::{Context, Result};
use bet_ledger::sheet::DEFAULT_SHEET_URL;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::constants;

// =============================================================================
// File-based Configuration (config.toml)
// =============================================================================

/// Configuration loaded from config.toml. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub sheet: Option<SheetConfig>,
    #[serde(default)]
    pub http: Option<HttpConfig>,
    #[serde(default)]
    pub watch: Option<WatchConfig>,
}

/// Which spreadsheet to read
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Shared Google Sheets link (any URL containing `/d/<id>`)
    #[serde(default)]
    pub url: Option<String>,
}

/// Export download settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds (default: 15)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Settings for `watch`
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Minutes between reloads (default: 30)
    #[serde(default = "default_interval_mins")]
    pub interval_mins: u64,
}

fn default_timeout_secs() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_interval_mins() -> u64 {
    constants::DEFAULT_WATCH_INTERVAL_MINS
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse {}. Check for:\n\
                 - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
                 - Incorrect data types (sheet.url is a string, http.timeout_secs and watch.interval_mins are numbers)",
                path.display()
            )
        })
    }

    /// Like [`FileConfig::load`], but a missing file means "all defaults"
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Where records come from for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Generated demo records
    Demo,
    /// A local CSV export
    File(PathBuf),
    /// A shared spreadsheet link
    Sheet(String),
}

/// Settings resolved from flags, environment and config.toml
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Input,
    pub http_timeout: Duration,
    pub watch_interval: Duration,
}

impl Config {
    /// Merge command-line input flags over config.toml.
    ///
    /// `--demo` wins over `--csv`, which wins over any sheet link. Sheet link
    /// precedence: `--sheet` / `BET_SHEET_URL`, then `[sheet] url`, then the
    /// built-in default. Blank links are skipped.
    pub fn resolve(file: &FileConfig, demo: bool, csv: Option<PathBuf>, sheet: Option<String>) -> Self {
        let input = if demo {
            Input::Demo
        } else if let Some(path) = csv {
            Input::File(path)
        } else {
            let url = sheet
                .filter(|s| !s.trim().is_empty())
                .or_else(|| {
                    file.sheet
                        .as_ref()
                        .and_then(|s| s.url.clone())
                        .filter(|s| !s.trim().is_empty())
                })
                .unwrap_or_else(|| DEFAULT_SHEET_URL.to_string());
            Input::Sheet(url.trim().to_string())
        };

        let timeout_secs = file
            .http
            .as_ref()
            .map_or(constants::DEFAULT_HTTP_TIMEOUT_SECS, |h| h.timeout_secs);
        let interval_mins = file
            .watch
            .as_ref()
            .map_or(constants::DEFAULT_WATCH_INTERVAL_MINS, |w| w.interval_mins);

        Self {
            input,
            http_timeout: Duration::from_secs(timeout_secs.max(1)),
            watch_interval: Duration::from_secs(interval_mins.max(1).saturating_mul(60)),
        }
    }

    /// Same as `watch_interval` unless `--interval-mins` was given
    pub fn with_watch_interval(mut self, interval_mins: Option<u64>) -> Self {
        if let Some(mins) = interval_mins {
            self.watch_interval = Duration::from_secs(mins.max(1).saturating_mul(60));
        }
        self
    }
}
