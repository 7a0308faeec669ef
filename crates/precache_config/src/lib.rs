//! Parsing and validation of offline-cache configuration files.
//!
//! This crate reads an `ngsw-config.json` style configuration (JSON, or the
//! equivalent TOML) and produces a strongly-typed [`Config`] describing asset
//! groups, data groups, and navigation URLs.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, ConfigFormat};
pub use types::*;
