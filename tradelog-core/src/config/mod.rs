//! Configuration Management for TradeLog Core.
//!
//! This module defines how configuration is structured, loaded, validated,
//! and accessed.
//!
//! ## Key Components:
//!
//! - [`types`]: the configuration struct definitions, [`CoreConfig`],
//!   [`LoggingConfig`], and [`NotificationConfig`]. These define the schema
//!   of the configuration file.
//! - [`defaults`]: functions returning default values for individual
//!   settings, used when a configuration file is missing or incomplete.
//! - [`loader`]: the [`ConfigLoader`] with the logic for loading and
//!   validating configuration data from a TOML file.
//!
//! ## Configuration Loading Process:
//!
//! 1. [`ConfigLoader::load_from_path`] is called with the path of a TOML
//!    file (e.g. `tradelog.toml`).
//! 2. If the file does not exist, a default [`CoreConfig`] is used.
//! 3. If the file exists, its content is parsed into [`CoreConfig`];
//!    parsing errors are mapped to [`crate::error::ConfigError::ParseError`].
//! 4. The resulting config undergoes validation (normalizing log level and
//!    format strings, rejecting impossible channel capacities); failures
//!    are mapped to [`crate::error::ConfigError::ValidationError`].

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, NotificationConfig};
