//! Diagnostic output shared by the subcommands.

use std::path::Path;

use precache_diagnostics::{Diagnostic, DiagnosticRenderer, TerminalRenderer};

use crate::{GlobalArgs, ReportFormat};

/// Writes diagnostics to stderr (text) or stdout (JSON).
pub fn report(
    diagnostics: &[Diagnostic],
    format: ReportFormat,
    global: &GlobalArgs,
    config: &Path,
) -> Result<(), serde_json::Error> {
    match format {
        ReportFormat::Text => {
            eprint!(
                "{}",
                render_text(diagnostics, global.color, global.quiet, &display_name(config))
            );
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(diagnostics)?),
    }
    Ok(())
}

/// Renders diagnostics for the terminal. In quiet mode only errors are kept.
pub fn render_text(diagnostics: &[Diagnostic], color: bool, quiet: bool, config_name: &str) -> String {
    let renderer = TerminalRenderer::new(color).with_config_name(config_name);
    diagnostics
        .iter()
        .filter(|d| !quiet || d.severity.is_error())
        .map(|d| renderer.render(d))
        .collect()
}

/// The file name shown in `-->` lines.
pub fn display_name(config: &Path) -> String {
    config
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.display().to_string())
}
