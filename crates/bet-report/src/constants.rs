//! Constants for the bet-report CLI

// =============================================================================
// Files
// =============================================================================

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Default export file name for `export`
pub const DEFAULT_EXPORT_FILENAME: &str = "bets_export.csv";

// =============================================================================
// Refresh
// =============================================================================

/// Default reload interval for `watch`
pub const DEFAULT_WATCH_INTERVAL_MINS: u64 = 30;

/// Request timeout used when config.toml does not set one
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

// =============================================================================
// Console layout
// =============================================================================

/// Width of the summary banner
pub const BANNER_WIDTH: usize = 60;

/// Column width for competition and tipster in the records table
pub const LABEL_COLUMN_WIDTH: usize = 18;
