//! Error types for manifest generation.

use precache_common::MalformedDuration;
use precache_fs::FsError;

/// Errors that abort a generation run.
///
/// Generation never returns a partial manifest: the first failure is
/// reported with the group, file, or pattern it concerns.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A data group's `maxAge` or `timeout` is not a valid duration.
    #[error("data group '{group}': invalid {field}: {source}")]
    Duration {
        /// The data group name.
        group: String,
        /// The offending field (`maxAge` or `timeout`).
        field: &'static str,
        /// The parse failure.
        source: MalformedDuration,
    },

    /// A pattern could not be compiled for in-process matching.
    ///
    /// File globs have regex syntax escaped first, so in practice this comes
    /// from hand-written navigation patterns.
    #[error("invalid pattern '{pattern}' in '{group}': {source}")]
    InvalidPattern {
        /// The group (or `navigationUrls`) declaring the pattern.
        group: String,
        /// The glob as written in the configuration.
        pattern: String,
        /// The regex compilation failure.
        source: regex::Error,
    },

    /// Listing the deployed files failed.
    #[error("asset group '{group}': failed to list files: {source}")]
    List {
        /// The asset group being resolved.
        group: String,
        /// The filesystem failure.
        source: FsError,
    },

    /// Hashing a claimed file failed.
    #[error("asset group '{group}': failed to hash {file}: {source}")]
    Hash {
        /// The asset group that claimed the file.
        group: String,
        /// The file being hashed.
        file: String,
        /// The filesystem failure.
        source: FsError,
    },

    /// Persisting the manifest failed.
    #[error("failed to write manifest to {path}: {source}")]
    Write {
        /// The destination path.
        path: String,
        /// The filesystem failure.
        source: FsError,
    },

    /// The manifest could not be serialized or parsed.
    #[error("manifest serialization failed: {reason}")]
    Serialize {
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use precache_common::parse_duration_ms;

    #[test]
    fn duration_error_names_group_and_field() {
        let source = parse_duration_ms("5x").unwrap_err();
        let err = GenerateError::Duration {
            group: "api".to_string(),
            field: "maxAge",
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("'api'"));
        assert!(msg.contains("maxAge"));
        assert!(msg.contains("5x"));
    }

    #[test]
    fn hash_error_names_file() {
        let err = GenerateError::Hash {
            group: "app".to_string(),
            file: "/main.js".to_string(),
            source: FsError::NotFound {
                path: "/main.js".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("'app'"));
        assert!(msg.contains("/main.js"));
    }

    #[test]
    fn source_chain_is_exposed() {
        use std::error::Error;
        let err = GenerateError::List {
            group: "app".to_string(),
            source: FsError::NotFound {
                path: "/".to_string(),
            },
        };
        assert!(err.source().is_some());
    }
}
