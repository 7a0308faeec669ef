//! The manifest generator.
//!
//! Resolution runs in two phases. Listing the deployed files and compiling
//! each asset group's matchers is independent per group and runs in parallel.
//! Claiming files and hashing them then runs strictly in configuration order,
//! so a file matched by several groups always lands in the first one and the
//! result never depends on thread scheduling or listing order.

use std::collections::{BTreeMap, HashSet};

use precache_common::join_urls;
use precache_config::{AssetGroup, Config};
use precache_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use precache_fs::Filesystem;
use rayon::prelude::*;

use crate::data::process_data_groups;
use crate::error::GenerateError;
use crate::manifest::{AssetGroupManifest, Manifest, CONFIG_VERSION};
use crate::matcher::PatternSet;
use crate::patterns::{process_navigation_urls, url_patterns};

/// File name the manifest is conventionally written to.
pub const DEFAULT_MANIFEST_NAME: &str = "/ngsw.json";

/// Produces manifests from a configuration and a filesystem snapshot.
///
/// Every emitted URL is prefixed with the base href. The generator holds no
/// state between runs.
#[derive(Debug)]
pub struct Generator<F> {
    fs: F,
    base_href: String,
}

/// One asset group after the parallel phase.
struct Listing<'a> {
    group: &'a AssetGroup,
    files: Vec<String>,
    plain: PatternSet,
    versioned: PatternSet,
}

impl<F: Filesystem> Generator<F> {
    /// Creates a generator over `fs` that prefixes URLs with `base_href`.
    pub fn new(fs: F, base_href: impl Into<String>) -> Self {
        Self {
            fs,
            base_href: base_href.into(),
        }
    }

    /// The URL prefix applied to every emitted path.
    pub fn base_href(&self) -> &str {
        &self.base_href
    }

    /// The underlying filesystem.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Generates a manifest for `config`.
    ///
    /// Deprecation notices go to `sink`; they never fail the run. Any error
    /// aborts generation and no partial manifest is returned.
    pub fn generate(
        &self,
        config: &Config,
        sink: &DiagnosticSink,
    ) -> Result<Manifest, GenerateError> {
        let mut hash_table = BTreeMap::new();
        let asset_groups = self.process_asset_groups(config, sink, &mut hash_table)?;
        let data_groups = process_data_groups(&self.base_href, &config.data_groups)?;
        let navigation_urls =
            process_navigation_urls(&self.base_href, config.navigation_urls.as_deref());

        tracing::debug!(
            asset_groups = asset_groups.len(),
            data_groups = data_groups.len(),
            files = hash_table.len(),
            "generated manifest"
        );

        Ok(Manifest {
            config_version: CONFIG_VERSION,
            app_data: config.app_data.clone(),
            push: config.push.clone(),
            index: join_urls(&self.base_href, &config.index),
            asset_groups,
            data_groups,
            hash_table,
            navigation_urls,
        })
    }

    /// Serializes `manifest` and writes it through the filesystem.
    pub fn write_manifest(&self, manifest: &Manifest, path: &str) -> Result<(), GenerateError> {
        let json = manifest.to_json()?;
        self.fs
            .write(path, &json)
            .map_err(|source| GenerateError::Write {
                path: path.to_string(),
                source,
            })?;
        tracing::info!(path, bytes = json.len(), "wrote manifest");
        Ok(())
    }

    fn process_asset_groups(
        &self,
        config: &Config,
        sink: &DiagnosticSink,
        hash_table: &mut BTreeMap<String, String>,
    ) -> Result<Vec<AssetGroupManifest>, GenerateError> {
        // Collected whole so the reported failure is the first in declaration
        // order, not whichever worker failed first.
        let listings = config
            .asset_groups
            .par_iter()
            .map(|group| self.list_group(group))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        listings
            .into_iter()
            .map(|listing| self.claim_group(listing, &mut seen, sink, hash_table))
            .collect()
    }

    fn list_group<'a>(&self, group: &'a AssetGroup) -> Result<Listing<'a>, GenerateError> {
        let plain = PatternSet::from_globs(&group.name, &group.resources.files)?;
        let versioned = PatternSet::from_globs(&group.name, &group.resources.versioned_files)?;
        let files = self.fs.list("/").map_err(|source| GenerateError::List {
            group: group.name.clone(),
            source,
        })?;
        Ok(Listing {
            group,
            files,
            plain,
            versioned,
        })
    }

    fn claim_group(
        &self,
        listing: Listing<'_>,
        seen: &mut HashSet<String>,
        sink: &DiagnosticSink,
        hash_table: &mut BTreeMap<String, String>,
    ) -> Result<AssetGroupManifest, GenerateError> {
        let group = listing.group;
        if !group.resources.versioned_files.is_empty() {
            sink.emit(versioned_files_warning(&group.name));
        }

        let mut matched = claim(&listing.files, &listing.plain, seen);
        matched.extend(claim(&listing.files, &listing.versioned, seen));
        matched.sort();

        for file in &matched {
            let hash = self.fs.hash(file).map_err(|source| GenerateError::Hash {
                group: group.name.clone(),
                file: file.clone(),
                source,
            })?;
            hash_table.insert(join_urls(&self.base_href, file), hash);
        }

        let install_mode = group.install_mode.unwrap_or_default();
        let update_mode = group.update_mode.unwrap_or(install_mode);
        tracing::debug!(
            group = %group.name,
            files = matched.len(),
            install_mode = install_mode.as_str(),
            "resolved asset group"
        );

        Ok(AssetGroupManifest {
            name: group.name.clone(),
            install_mode,
            update_mode,
            urls: matched
                .iter()
                .map(|file| join_urls(&self.base_href, file))
                .collect(),
            patterns: url_patterns(&self.base_href, &group.resources.urls),
        })
    }
}

/// Takes every not-yet-seen file that `patterns` accepts and marks it seen.
fn claim(files: &[String], patterns: &PatternSet, seen: &mut HashSet<String>) -> Vec<String> {
    let mut claimed = Vec::new();
    for file in files {
        if patterns.is_match(file) && seen.insert(file.clone()) {
            claimed.push(file.clone());
        }
    }
    claimed
}

/// The `W001` notice for an asset group that still uses `versionedFiles`.
pub fn versioned_files_warning(group: &str) -> Diagnostic {
    Diagnostic::warning(
        DiagnosticCode::DEPRECATED_VERSIONED_FILES,
        format!("asset group '{group}' uses the 'versionedFiles' option"),
    )
    .with_location(format!("assetGroups[{group}]"))
    .with_note("'versionedFiles' and 'files' have the same behavior")
    .with_help("move these globs into 'files'")
}
