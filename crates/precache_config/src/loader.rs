//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::Config;
use std::collections::HashSet;
use std::path::Path;

/// On-disk syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `ngsw-config.json`.
    Json,
    /// The same schema expressed in TOML.
    Toml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Loads and validates a configuration file, choosing the parser by extension.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content, format)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let config: Config = match format {
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
    };
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and group names are unique.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.index.is_empty() {
        return Err(ConfigError::MissingField("index".to_string()));
    }

    let mut seen = HashSet::new();
    for (i, group) in config.asset_groups.iter().enumerate() {
        if group.name.is_empty() {
            return Err(ConfigError::MissingField(format!("assetGroups[{i}].name")));
        }
        if !seen.insert(group.name.as_str()) {
            return Err(ConfigError::DuplicateGroup {
                kind: "asset group",
                name: group.name.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for (i, group) in config.data_groups.iter().enumerate() {
        if group.name.is_empty() {
            return Err(ConfigError::MissingField(format!("dataGroups[{i}].name")));
        }
        if !seen.insert(group.name.as_str()) {
            return Err(ConfigError::DuplicateGroup {
                kind: "data group",
                name: group.name.clone(),
            });
        }
    }

    Ok(())
}
