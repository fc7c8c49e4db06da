//! Logging setup for TradeLog Core.
//!
//! Built on the `tracing` ecosystem: a console layer (text or JSON) and an
//! optional non-blocking file layer, both filtered by the configured level.

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};

use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Holds the `WorkerGuard` of the non-blocking file writer for the process
/// lifetime, so buffered log lines keep getting flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests and early application startup before the full
/// configuration is loaded. Filters via the `RUST_LOG` environment
/// variable, defaulting to "info". Errors (e.g. a global subscriber being
/// already installed) are ignored, so this is safe to call repeatedly.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Creates a file logging layer with a daily-rolling, non-blocking writer.
///
/// Ensures the parent directory for the log file exists and configures the
/// requested format. The returned `WorkerGuard` must be kept alive for
/// logs to flush.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(LoggingError::IoError)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("tradelog.log")),
    );

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    match format.to_lowercase().as_str() {
        "json" => {
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
        _ => {
            let layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false);
            Ok((Box::new(layer), guard))
        }
    }
}

/// Initializes the global logging system from the provided [`LoggingConfig`].
///
/// Installs a console layer and, when `file_path` is set, a file layer.
/// The file writer's guard is parked in a process-wide slot so it outlives
/// the caller.
///
/// # Errors
///
/// Returns [`CoreError::Logging`] if the configured level is invalid or a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    // The loader normalizes these, but init may be called with a
    // hand-built config too.
    let level_filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE.to_string(),
        "debug" => Level::DEBUG.to_string(),
        "info" => Level::INFO.to_string(),
        "warn" => Level::WARN.to_string(),
        "error" => Level::ERROR.to_string(),
        invalid_level => {
            return Err(CoreError::Logging(LoggingError::InitializationError(
                format!("Invalid log level in config: {}", invalid_level),
            )));
        }
    };

    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(EnvFilter::new(level_filter.clone()))
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(EnvFilter::new(level_filter.clone()))
            .boxed(),
    };

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = vec![stdout_layer];

    let mut file_guard: Option<WorkerGuard> = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        file_guard = Some(guard);
        layers.push(file_layer.with_filter(EnvFilter::new(level_filter)).boxed());
    }

    Registry::default().with(layers).try_init().map_err(|err| {
        CoreError::Logging(LoggingError::InitializationError(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            err
        )))
    })?;

    match LOG_WORKER_GUARD.lock() {
        Ok(mut guard_slot) => *guard_slot = file_guard,
        Err(err) => {
            eprintln!(
                "[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.",
                err
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_minimal_logging_is_idempotent() {
        init_minimal_logging();
        init_minimal_logging();
        tracing::info!("minimal logging smoke message");
    }

    #[test]
    fn create_file_layer_text_format() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("test_text.log");

        let result = create_file_layer(&log_path, "text");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
    }

    #[test]
    fn create_file_layer_json_format() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("test_json.log");

        let result = create_file_layer(&log_path, "json");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
    }

    #[test]
    fn create_file_layer_creates_missing_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested_log_path = temp_dir.path().join("logs/nested.log");
        assert!(!nested_log_path.parent().unwrap().exists());

        let result = create_file_layer(&nested_log_path, "text");
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
        assert!(nested_log_path.parent().unwrap().exists());
    }

    #[test]
    fn init_logging_rejects_invalid_level() {
        let config = LoggingConfig {
            level: "supertrace".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        let result = init_logging(&config);
        match result {
            Err(CoreError::Logging(LoggingError::InitializationError(msg))) => {
                assert!(msg.contains("supertrace"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
