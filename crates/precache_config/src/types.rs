//! Configuration types deserialized from `ngsw-config.json`.
//!
//! Field names follow the JSON wire format (`assetGroups`, `installMode`,
//! `cacheConfig`, ...). Unknown fields such as `$schema` are ignored.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A glob pattern. A leading `!` negates it where negation is supported.
pub type Glob = String;

/// A compact duration string such as `"3d12h"`.
pub type Duration = String;

/// The top-level offline-cache configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the application's entry document, e.g. `/index.html`.
    pub index: String,
    /// Opaque application data copied into the manifest unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_data: Option<serde_json::Value>,
    /// Opaque push configuration copied into the manifest unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<serde_json::Value>,
    /// Static asset groups, in priority order.
    #[serde(default)]
    pub asset_groups: Vec<AssetGroup>,
    /// Dynamic data groups, in priority order.
    #[serde(default)]
    pub data_groups: Vec<DataGroup>,
    /// Navigation URL globs; `None` selects the built-in default set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_urls: Option<Vec<Glob>>,
}

/// How and when the files of an asset group are fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMode {
    /// Fetch every resource up front.
    #[default]
    Prefetch,
    /// Fetch resources only when first requested.
    Lazy,
}

impl InstallMode {
    /// The wire name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            InstallMode::Prefetch => "prefetch",
            InstallMode::Lazy => "lazy",
        }
    }
}

/// A named collection of static files sharing an install/update policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetGroup {
    /// Unique group name.
    pub name: String,
    /// Install policy; defaults to prefetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_mode: Option<InstallMode>,
    /// Update policy; defaults to the resolved install policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mode: Option<InstallMode>,
    /// The resources belonging to this group.
    #[serde(default)]
    pub resources: AssetResources,
}

/// Glob lists describing the contents of an asset group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResources {
    /// Globs resolved against the deployed file list.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub files: Vec<Glob>,
    /// Legacy alias of `files`, kept for older configurations.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub versioned_files: Vec<Glob>,
    /// URL patterns matched at runtime, never resolved against files.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub urls: Vec<Glob>,
}

/// A named collection of dynamic URL patterns sharing a runtime cache policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGroup {
    /// Unique group name.
    pub name: String,
    /// URL patterns covered by this group.
    #[serde(deserialize_with = "deserialize_string_or_vec")]
    pub urls: Vec<Glob>,
    /// Cache version; bumping it discards previously cached responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Runtime caching policy.
    pub cache_config: CacheConfig,
}

/// Runtime caching policy of a data group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    /// Maximum number of cached responses.
    pub max_size: u64,
    /// Maximum age of a cached response.
    pub max_age: Duration,
    /// Network timeout before falling back to the cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
    /// Caching strategy; defaults to performance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
}

/// Data-group caching strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Prefer the network, fall back to cache.
    Freshness,
    /// Prefer the cache, refresh in the background.
    #[default]
    Performance,
}

/// Deserializes a glob list that can be either a single string or a list of strings.
///
/// Allows `"files": "/*.js"` as shorthand for `"files": ["/*.js"]`.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a glob or a list of globs")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
