//! Offline-cache manifest generation.
//!
//! Given a [`Config`](precache_config::Config) and a
//! [`Filesystem`](precache_fs::Filesystem) snapshot of the deployed build,
//! [`Generator::generate`] resolves asset groups into concrete URLs and
//! content hashes, compiles data-group and navigation patterns into regular
//! expressions, and assembles a [`Manifest`] for the runtime cache to consume.
//!
//! ```
//! use precache_config::{load_config_from_str, ConfigFormat};
//! use precache_diagnostics::DiagnosticSink;
//! use precache_fs::MemoryFilesystem;
//! use precache_generator::Generator;
//!
//! let config = load_config_from_str(
//!     r#"{ "index": "/index.html",
//!          "assetGroups": [{ "name": "app", "resources": { "files": ["/*.js"] } }] }"#,
//!     ConfigFormat::Json,
//! ).unwrap();
//! let fs = MemoryFilesystem::new()
//!     .with_hashed_file("/main.js", "", "abc123")
//!     .with_file("/readme.md", "");
//!
//! let manifest = Generator::new(fs, "/")
//!     .generate(&config, &DiagnosticSink::new())
//!     .unwrap();
//! assert_eq!(manifest.asset_groups[0].urls, vec!["/main.js"]);
//! assert_eq!(manifest.hash_table["/main.js"], "abc123");
//! ```

#![warn(missing_docs)]

pub mod data;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod matcher;
pub mod patterns;

pub use data::process_data_groups;
pub use error::GenerateError;
pub use generator::{versioned_files_warning, Generator, DEFAULT_MANIFEST_NAME};
pub use manifest::{AssetGroupManifest, DataGroupManifest, Manifest, NavigationUrl};
pub use matcher::PatternSet;
pub use patterns::{process_navigation_urls, url_to_regex, DEFAULT_NAVIGATION_URLS};
