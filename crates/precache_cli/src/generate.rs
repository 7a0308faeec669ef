//! `precache generate` — hash a build output directory and write its manifest.
//!
//! 1. Load and validate the configuration
//! 2. Resolve groups against the build output on disk
//! 3. Report diagnostics
//! 4. Write the manifest into the build output directory

use precache_common::join_urls;
use precache_config::Config;
use precache_diagnostics::{Diagnostic, DiagnosticSink};
use precache_fs::{Filesystem, LocalFilesystem};
use precache_generator::{GenerateError, Generator, Manifest};

use crate::report::report;
use crate::{GenerateArgs, GlobalArgs};

/// Runs the `precache generate` command.
///
/// Returns exit code 0 on success. Any failure aborts before the manifest is
/// written, so an existing manifest is never replaced by a partial one.
pub fn run(args: &GenerateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = precache_config::load_config(&args.config)?;

    if !args.dist.is_dir() {
        return Err(format!("build output directory not found: {}", args.dist.display()).into());
    }

    let generator = Generator::new(LocalFilesystem::new(&args.dist), args.base_href.as_str());
    let (generated, diagnostics) = generate_collecting(&generator, &config);
    report(&diagnostics, args.format, global, &args.config)?;
    let manifest = generated?;

    let output = join_urls("/", &args.output);
    generator.write_manifest(&manifest, &output)?;

    if !global.quiet {
        eprintln!(
            "   Generated {} ({} asset group(s), {} data group(s), {} file(s))",
            args.dist.join(args.output.trim_start_matches('/')).display(),
            manifest.asset_groups.len(),
            manifest.data_groups.len(),
            manifest.hash_table.len()
        );
    }

    Ok(0)
}

/// Runs the generator and hands back its diagnostics whether or not it failed.
fn generate_collecting<F: Filesystem>(
    generator: &Generator<F>,
    config: &Config,
) -> (Result<Manifest, GenerateError>, Vec<Diagnostic>) {
    let sink = DiagnosticSink::new();
    let generated = generator.generate(config, &sink);
    (generated, sink.take_all())
}
