//! Diagnostic rendering for human-readable output.

use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[W001]: asset group 'legacy' uses the 'versionedFiles' option
///   --> ngsw-config.json: assetGroups[legacy]
///    = note: 'versionedFiles' and 'files' have the same behavior
///    = help: move these globs into 'files'
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Name of the configuration file shown in location lines.
    pub config_name: Option<String>,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self {
            color,
            config_name: None,
        }
    }

    /// Prefixes location lines with the given configuration file name.
    pub fn with_config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = Some(name.into());
        self
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        if self.color {
            out.push_str(&format!(
                "{}{}[{}]\x1b[0m\x1b[1m: {}\x1b[0m\n",
                diag.severity.ansi_style(),
                diag.severity,
                diag.code,
                diag.message
            ));
        } else {
            out.push_str(&format!(
                "{}[{}]: {}\n",
                diag.severity, diag.code, diag.message
            ));
        }

        match (&self.config_name, &diag.location) {
            (Some(file), Some(location)) => out.push_str(&format!("  --> {file}: {location}\n")),
            (None, Some(location)) => out.push_str(&format!("  --> {location}\n")),
            (Some(file), None) => out.push_str(&format!("  --> {file}\n")),
            (None, None) => {}
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}
