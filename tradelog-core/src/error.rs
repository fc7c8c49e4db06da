//! Error handling for the TradeLog core layer.
//!
//! The main error type for this crate is [`CoreError`], which encapsulates
//! the more specific [`ConfigError`] and [`LoggingError`] families. All
//! error types are defined with the `thiserror` crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the TradeLog infrastructure layer.
///
/// Used as the common error type at the crate boundary, usually by
/// wrapping one of the more specific error families below.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur while setting up or operating the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// General I/O errors not covered by a more specific variant.
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),

    /// Catch-all for unexpected internal errors within the core library.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An error occurred while parsing a configuration file (invalid TOML).
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A configuration value failed validation after successful parsing.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Error type for logging-related operations.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to initialize the logging system, e.g. because a global
    /// subscriber was already installed.
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    /// Failed to build or apply a log filter.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),

    /// An I/O error occurred during logging setup, such as failing to
    /// create the log file's parent directory.
    #[error("Logging I/O error: {0}")]
    IoError(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn core_error_config_variant_display_and_source() {
        let config_err = ConfigError::ValidationError("bad level".to_string());
        let core_err = CoreError::from(config_err);
        assert_eq!(
            core_err.to_string(),
            "Configuration Error: Configuration validation failed: bad level"
        );
        assert!(core_err.source().is_some());
    }

    #[test]
    fn config_read_error_preserves_source() {
        let io_err = IoError::new(ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::ReadError {
            path: PathBuf::from("/etc/tradelog/config.toml"),
            source: io_err,
        };
        assert!(err.to_string().contains("config.toml"));
        let source = err.source().expect("io source should be preserved");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn logging_error_wraps_io() {
        let io_err = IoError::new(ErrorKind::NotFound, "no log dir");
        let err = LoggingError::from(io_err);
        assert!(matches!(err, LoggingError::IoError(_)));
        assert_eq!(err.to_string(), "Logging I/O error: no log dir");
    }

    #[test]
    fn core_error_internal_display() {
        let err = CoreError::Internal("invariant violated".to_string());
        assert_eq!(
            err.to_string(),
            "An unexpected internal error occurred: invariant violated"
        );
    }
}
