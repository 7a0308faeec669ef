//! Shared foundational pieces used across the precache manifest toolchain.
//!
//! This crate provides the glob-to-regex compiler, the compact duration parser
//! used for cache-policy values, the URL joining rule applied to every emitted
//! path, and the content hash used as the manifest's integrity token.

#![warn(missing_docs)]

pub mod duration;
pub mod glob;
pub mod hash;
pub mod url;

pub use duration::{parse_duration_ms, MalformedDuration};
pub use glob::glob_to_regex;
pub use hash::ContentHash;
pub use url::join_urls;
