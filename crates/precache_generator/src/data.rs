//! Data-group resolution. Pure transform, no filesystem access.

use precache_common::parse_duration_ms;
use precache_config::DataGroup;

use crate::error::GenerateError;
use crate::manifest::DataGroupManifest;
use crate::patterns::url_patterns;

/// Version assigned to data groups that do not declare one.
pub const DEFAULT_DATA_GROUP_VERSION: u32 = 1;

/// Resolves data groups in configuration order.
///
/// `maxAge` and `timeout` are converted to milliseconds; a missing or empty
/// `timeout` leaves `timeoutMs` unset. The first malformed duration aborts
/// resolution.
pub fn process_data_groups(
    base_href: &str,
    groups: &[DataGroup],
) -> Result<Vec<DataGroupManifest>, GenerateError> {
    groups
        .iter()
        .map(|group| resolve_data_group(base_href, group))
        .collect()
}

fn resolve_data_group(base_href: &str, group: &DataGroup) -> Result<DataGroupManifest, GenerateError> {
    let duration = |field: &'static str, value: &str| {
        parse_duration_ms(value).map_err(|source| GenerateError::Duration {
            group: group.name.clone(),
            field,
            source,
        })
    };

    let cache = &group.cache_config;
    let max_age = duration("maxAge", &cache.max_age)?;
    let timeout_ms = match cache.timeout.as_deref() {
        None | Some("") => None,
        Some(timeout) => Some(duration("timeout", timeout)?),
    };

    let resolved = DataGroupManifest {
        name: group.name.clone(),
        patterns: url_patterns(base_href, &group.urls),
        strategy: cache.strategy.unwrap_or_default(),
        max_size: cache.max_size,
        max_age,
        timeout_ms,
        version: group.version.unwrap_or(DEFAULT_DATA_GROUP_VERSION),
    };
    tracing::debug!(group = %resolved.name, max_age, "resolved data group");
    Ok(resolved)
}
