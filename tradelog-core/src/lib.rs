//! # TradeLog Core Library (`tradelog-core`)
//!
//! `tradelog-core` is the infrastructure layer of the TradeLog trading
//! journal. It carries the concerns every other layer leans on without
//! knowing anything about the domain itself:
//!
//! - **Error Handling**: a unified error system through the [`CoreError`]
//!   enum and its specific families, [`ConfigError`] and [`LoggingError`].
//! - **Configuration Management**: TOML-based configuration loading with
//!   default fallbacks and validation, through [`ConfigLoader`] and
//!   [`CoreConfig`].
//! - **Logging**: a logging framework built on the `tracing` ecosystem,
//!   configurable for console and file output in text or JSON formats.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tradelog_core::config::ConfigLoader;
//! use tradelog_core::error::CoreError;
//! use tradelog_core::logging::init_logging;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load_from_path("tradelog.toml".as_ref())?;
//!     init_logging(&config.logging)?;
//!     tracing::info!("TradeLog core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export key types for convenience.
pub use config::{ConfigLoader, CoreConfig, LoggingConfig, NotificationConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
