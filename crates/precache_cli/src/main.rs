//! Precache CLI — builds offline-cache manifests for deployed web apps.
//!
//! Provides `precache generate` to hash a build output directory and write its
//! manifest, and `precache check` to validate a configuration without one.

#![warn(missing_docs)]

mod check;
mod generate;
mod report;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Precache — offline-cache manifest generator.
#[derive(Parser, Debug)]
#[command(name = "precache", version, about = "Offline-cache manifest generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a manifest for a build output directory.
    Generate(GenerateArgs),
    /// Validate a configuration and show how its patterns resolve.
    Check(CheckArgs),
}

/// Arguments for the `precache generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// The deployed build output directory.
    pub dist: PathBuf,

    /// The configuration file (`.json` or `.toml`).
    pub config: PathBuf,

    /// URL prefix the app is served under.
    #[arg(long, default_value = "/")]
    pub base_href: String,

    /// Manifest file name, relative to the build output directory.
    #[arg(short, long, default_value = "ngsw.json")]
    pub output: String,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `precache check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The configuration file (`.json` or `.toml`).
    pub config: PathBuf,

    /// URL prefix the app is served under.
    #[arg(long, default_value = "/")]
    pub base_href: String,

    /// Request paths to classify against the navigation URLs.
    #[arg(long = "url", num_args = 1..)]
    pub urls: Vec<String>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
}

impl GlobalArgs {
    /// The log level used when `RUST_LOG` is unset.
    fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
    };
    init_tracing(&global);

    let result = match cli.command {
        Command::Generate(ref args) => generate::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flag-derived level.
fn init_tracing(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(global.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(global.color)
        .without_time()
        .init();
}
