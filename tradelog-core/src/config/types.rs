//! Configuration struct definitions for TradeLog Core.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults;

/// Configuration for the logging subsystem.
///
/// # Examples
///
/// ```
/// use tradelog_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/tradelog.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/tradelog.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// The format for log messages.
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// Configuration for the toast notification store.
///
/// Consumed by the domain layer's notification service; kept here so all
/// tunables live in the one core configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationConfig {
    /// Time-to-live in milliseconds granted to a toast whose caller did not
    /// specify one.
    #[serde(default = "defaults::default_toast_duration_ms")]
    pub default_duration_ms: u64,
    /// Upper bound on the number of simultaneously active toasts. When an
    /// enqueue would exceed it, the oldest toast is evicted. `0` disables
    /// the cap.
    #[serde(default = "defaults::default_max_active")]
    pub max_active: usize,
    /// Capacity of the snapshot broadcast channel. Must be greater than
    /// zero; a subscriber that falls more than this many snapshots behind
    /// observes a lag error instead of stalling the store.
    #[serde(default = "defaults::default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: defaults::default_toast_duration_ms(),
            max_active: defaults::default_max_active(),
            event_buffer: defaults::default_event_buffer(),
        }
    }
}

/// Root configuration structure for the TradeLog core system.
///
/// Designed to be deserialized from a TOML file, with default values for
/// missing sections or fields.
///
/// # Examples
///
/// ```
/// use tradelog_core::config::CoreConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [notifications]
/// default_duration_ms = 3000
/// "#;
/// let config: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(config.logging.level, "warn");
/// assert_eq!(config.logging.format, "text"); // defaulted
/// assert_eq!(config.notifications.default_duration_ms, 3000);
/// assert_eq!(config.notifications.max_active, 5); // defaulted
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Configuration for the logging subsystem.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Configuration for the toast notification store.
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.file_path, None);
        assert_eq!(config.format, "text");
    }

    #[test]
    fn notification_config_defaults() {
        let config = NotificationConfig::default();
        assert_eq!(config.default_duration_ms, 5000);
        assert_eq!(config.max_active, 5);
        assert_eq!(config.event_buffer, 32);
    }

    #[test]
    fn core_config_from_empty_toml_is_default() {
        let config: CoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn core_config_partial_sections_fill_in_defaults() {
        let toml_str = r#"
            [notifications]
            max_active = 0
        "#;
        let config: CoreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.notifications.max_active, 0);
        assert_eq!(config.notifications.default_duration_ms, 5000);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn core_config_rejects_unknown_fields() {
        let toml_str = r#"
            [notifications]
            default_duration = 5000
        "#;
        assert!(toml::from_str::<CoreConfig>(toml_str).is_err());
    }
}
