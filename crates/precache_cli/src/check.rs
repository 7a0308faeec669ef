//! `precache check` — validate a configuration without a build output.

use precache_config::DataGroup;
use precache_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use precache_generator::{
    process_data_groups, process_navigation_urls, versioned_files_warning, DataGroupManifest,
    GenerateError, PatternSet,
};

use crate::report::report;
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `precache check` command.
///
/// Loads the configuration, resolves data groups and navigation URLs, and
/// prints a summary. Every data group is resolved on its own, so all broken
/// groups are reported as `E001` in one pass. `--url` paths are classified as
/// navigation requests or not. Returns exit code 1 when any group fails.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = precache_config::load_config(&args.config)?;
    let sink = DiagnosticSink::new();

    for group in &config.asset_groups {
        if !group.resources.versioned_files.is_empty() {
            sink.emit(versioned_files_warning(&group.name));
        }
    }
    let data_groups = resolve_data_groups(&args.base_href, &config.data_groups, &sink);
    let navigation_urls =
        process_navigation_urls(&args.base_href, config.navigation_urls.as_deref());

    report(&sink.take_all(), ReportFormat::Text, global, &args.config)?;

    if sink.has_errors() {
        if !global.quiet {
            eprintln!("   check failed: {} invalid data group(s)", sink.error_count());
        }
        return Ok(1);
    }

    if !global.quiet {
        println!("asset groups: {}", config.asset_groups.len());
        for group in &data_groups {
            let timeout = group
                .timeout_ms
                .map(|ms| format!(", timeout {ms}ms"))
                .unwrap_or_default();
            println!(
                "data group '{}': {} pattern(s), max age {}ms{timeout}",
                group.name,
                group.patterns.len(),
                group.max_age
            );
        }
        println!("navigation urls: {}", navigation_urls.len());
    }

    if !args.urls.is_empty() {
        let navigation = PatternSet::from_navigation_urls(&navigation_urls)?;
        for url in &args.urls {
            let verdict = if navigation.is_match(url) {
                "navigation"
            } else {
                "not navigation"
            };
            println!("{url}: {verdict}");
        }
    }

    Ok(0)
}

/// Resolves each data group separately, emitting an error for every failure.
fn resolve_data_groups(
    base_href: &str,
    groups: &[DataGroup],
    sink: &DiagnosticSink,
) -> Vec<DataGroupManifest> {
    let mut resolved = Vec::with_capacity(groups.len());
    for group in groups {
        match process_data_groups(base_href, std::slice::from_ref(group)) {
            Ok(manifest) => resolved.extend(manifest),
            Err(err) => sink.emit(invalid_data_group_error(&group.name, &err)),
        }
    }
    resolved
}

fn invalid_data_group_error(group: &str, err: &GenerateError) -> Diagnostic {
    Diagnostic::error(DiagnosticCode::INVALID_DATA_GROUP, err.to_string())
        .with_location(format!("dataGroups[{group}]"))
        .with_help("durations are digit runs with a unit: d, h, m, s or u")
}
