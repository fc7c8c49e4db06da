//! Loading and validation of the TradeLog core configuration.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: &[&str] = &["text", "json"];

/// Loads and validates the [`CoreConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration from the given TOML file.
    ///
    /// A missing file is not an error: the default configuration is used.
    /// Unreadable or unparsable files, and configurations that fail
    /// validation, are reported as [`ConfigError`]s.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let config = match fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw).map_err(ConfigError::ParseError)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => CoreConfig::default(),
            Err(err) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: err,
                }
                .into())
            }
        };
        Self::validate(config).map_err(CoreError::from)
    }

    /// Normalizes and checks a parsed configuration.
    ///
    /// Level and format strings are matched case-insensitively and stored
    /// lowercased, so the logging layer can match on them directly.
    fn validate(mut config: CoreConfig) -> Result<CoreConfig, ConfigError> {
        config.logging.level = config.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown log level '{}', expected one of {:?}",
                config.logging.level, VALID_LOG_LEVELS
            )));
        }

        config.logging.format = config.logging.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown log format '{}', expected one of {:?}",
                config.logging.format, VALID_LOG_FORMATS
            )));
        }

        // A zero-capacity broadcast channel cannot be constructed.
        if config.notifications.event_buffer == 0 {
            return Err(ConfigError::ValidationError(
                "notifications.event_buffer must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}
