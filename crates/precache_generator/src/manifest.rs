//! The generated manifest and its JSON wire format.
//!
//! Field names and nesting are the contract with the runtime cache that reads
//! the manifest, so every struct here serializes in `camelCase` and in the
//! declared field order.

use std::collections::BTreeMap;

use precache_config::{InstallMode, Strategy};
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// The manifest format version written into every manifest.
pub const CONFIG_VERSION: u32 = 1;

/// A complete offline-cache manifest for one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Always [`CONFIG_VERSION`].
    pub config_version: u32,
    /// Opaque application data copied from the configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_data: Option<serde_json::Value>,
    /// Opaque push settings copied from the configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<serde_json::Value>,
    /// The entry document URL, joined onto the base href.
    pub index: String,
    /// Resolved asset groups, in configuration order.
    pub asset_groups: Vec<AssetGroupManifest>,
    /// Resolved data groups, in configuration order.
    pub data_groups: Vec<DataGroupManifest>,
    /// Content hash of every claimed file, keyed by URL in sorted order.
    pub hash_table: BTreeMap<String, String>,
    /// Navigation request patterns, in declaration order.
    pub navigation_urls: Vec<NavigationUrl>,
}

impl Manifest {
    /// Serializes the manifest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GenerateError> {
        serde_json::to_string_pretty(self).map_err(|e| GenerateError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Parses a manifest previously written by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(json).map_err(|e| GenerateError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Looks up a resolved asset group by name.
    pub fn asset_group(&self, name: &str) -> Option<&AssetGroupManifest> {
        self.asset_groups.iter().find(|g| g.name == name)
    }

    /// Looks up a resolved data group by name.
    pub fn data_group(&self, name: &str) -> Option<&DataGroupManifest> {
        self.data_groups.iter().find(|g| g.name == name)
    }
}

/// An asset group with its files resolved to URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetGroupManifest {
    /// The group name from the configuration.
    pub name: String,
    /// When the group's files are fetched.
    pub install_mode: InstallMode,
    /// When changed files are re-fetched.
    pub update_mode: InstallMode,
    /// Claimed files joined onto the base href, sorted.
    pub urls: Vec<String>,
    /// Compiled regex fragments for dynamically matched URLs.
    pub patterns: Vec<String>,
}

/// A data group with its patterns compiled and durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGroupManifest {
    /// The group name from the configuration.
    pub name: String,
    /// Compiled regex fragments for the group's URLs.
    pub patterns: Vec<String>,
    /// Caching strategy.
    pub strategy: Strategy,
    /// Maximum number of cached responses.
    pub max_size: u64,
    /// Maximum response age in milliseconds.
    pub max_age: u64,
    /// Network timeout in milliseconds, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    /// Cache version; bumping it discards previously cached responses.
    pub version: u32,
}

/// One anchored navigation pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationUrl {
    /// `false` for patterns declared with a leading `!`.
    pub positive: bool,
    /// The anchored regular expression (`^...$`).
    pub regex: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Manifest {
        let mut hash_table = BTreeMap::new();
        hash_table.insert("/main.js".to_string(), "abc123".to_string());
        hash_table.insert("/index.html".to_string(), "def456".to_string());
        Manifest {
            config_version: CONFIG_VERSION,
            app_data: None,
            push: None,
            index: "/index.html".to_string(),
            asset_groups: vec![AssetGroupManifest {
                name: "app".to_string(),
                install_mode: InstallMode::Prefetch,
                update_mode: InstallMode::Lazy,
                urls: vec!["/index.html".to_string(), "/main.js".to_string()],
                patterns: vec![],
            }],
            data_groups: vec![DataGroupManifest {
                name: "api".to_string(),
                patterns: vec!["\\/api\\/.*".to_string()],
                strategy: Strategy::Freshness,
                max_size: 100,
                max_age: 3_600_000,
                timeout_ms: None,
                version: 1,
            }],
            hash_table,
            navigation_urls: vec![NavigationUrl {
                positive: true,
                regex: "^(?:\\/.*)?$".to_string(),
            }],
        }
    }

    #[test]
    fn field_names_and_order() {
        let json = sample().to_json().unwrap();
        let keys = [
            "\"configVersion\"",
            "\"index\"",
            "\"assetGroups\"",
            "\"dataGroups\"",
            "\"hashTable\"",
            "\"navigationUrls\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(json.contains("\"installMode\": \"prefetch\""));
        assert!(json.contains("\"updateMode\": \"lazy\""));
        assert!(json.contains("\"strategy\": \"freshness\""));
        assert!(json.contains("\"maxSize\": 100"));
        assert!(json.contains("\"maxAge\": 3600000"));
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let json = sample().to_json().unwrap();
        assert!(!json.contains("appData"));
        assert!(!json.contains("push"));
        assert!(!json.contains("timeoutMs"));
    }

    #[test]
    fn app_data_passes_through() {
        let mut manifest = sample();
        manifest.app_data = Some(serde_json::json!({ "release": "2.1" }));
        let value: serde_json::Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(value["appData"]["release"], "2.1");
    }

    #[test]
    fn hash_table_keys_are_sorted() {
        let json = sample().to_json().unwrap();
        assert!(json.find("/index.html\": \"def456").unwrap() < json.find("/main.js\": \"abc123").unwrap());
    }

    #[test]
    fn from_json_reads_back() {
        let manifest = sample();
        let parsed = Manifest::from_json(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = Manifest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GenerateError::Serialize { .. }));
    }

    #[test]
    fn lookup_by_name() {
        let manifest = sample();
        assert!(manifest.asset_group("app").is_some());
        assert!(manifest.asset_group("missing").is_none());
        assert_eq!(manifest.data_group("api").unwrap().max_age, 3_600_000);
    }
}
