//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The file content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// The file extension does not name a supported format.
    #[error("unsupported configuration format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Two groups of the same kind share a name.
    #[error("duplicate {kind} name '{name}'")]
    DuplicateGroup {
        /// `"asset group"` or `"data group"`.
        kind: &'static str,
        /// The repeated name.
        name: String,
    },

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
