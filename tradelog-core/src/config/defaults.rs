//! Default configuration values for TradeLog Core.
//!
//! These functions back `serde`'s `default` attributes in the configuration
//! structures, providing the values used when a field is not present in the
//! configuration file.

use std::path::PathBuf;

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`: no file logging).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default toast time-to-live in milliseconds (5000).
pub(super) fn default_toast_duration_ms() -> u64 {
    5000
}

/// Returns the default cap on simultaneously active toasts (5).
pub(super) fn default_max_active() -> usize {
    5
}

/// Returns the default snapshot broadcast capacity (32).
pub(super) fn default_event_buffer() -> usize {
    32
}
