// fixibake/src/cli.rs
//! This file defines the command-line interface (CLI) for the fixibake application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default number of preview characters shown per candidate.
pub const DEFAULT_PREVIEW_WIDTH: usize = 50;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "fixibake",
    author = "Fixibake Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Guess the legacy CJK encoding behind mojibake",
    long_about = "Fixibake tries every candidate encoding (UTF-8, GBK, Big5, Shift_JIS, EUC-JP, EUC-KR by default) against raw bytes, a text file or the entry names of a ZIP archive, and ranks the candidates by how natural the resulting Chinese, Japanese or Korean text looks.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG asks for it
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `fixibake` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ranks the candidate encodings for a file, an archive or stdin.
    #[command(about = "Rank candidate encodings for a file, a ZIP archive or stdin.")]
    Detect(DetectCommand),

    /// Lists the candidate encodings and the codec each label resolves to.
    #[command(about = "List the candidate encodings and the codec each one resolves to.")]
    Encodings(EncodingsCommand),
}

/// Arguments for the `detect` command.
#[derive(Parser, Debug)]
pub struct DetectCommand {
    /// Input file or ZIP archive; `-` or nothing reads raw bytes from stdin.
    #[arg(value_name = "PATH", help = "Input file or ZIP archive ('-' or omitted reads stdin).")]
    pub input: Option<PathBuf>,

    /// Path to a custom detection configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom detection configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Candidate encodings to try, in order (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', value_name = "LIST", help = "Candidate encodings to try, in order (comma-separated).")]
    pub encodings: Vec<String>,

    /// Print the ranking as JSON.
    #[arg(long, help = "Print the ranking as JSON instead of a table.")]
    pub json: bool,

    /// Maximum number of preview characters shown per candidate.
    #[arg(long = "preview-width", value_name = "N", default_value_t = DEFAULT_PREVIEW_WIDTH, help = "Maximum number of preview characters shown per candidate.")]
    pub preview_width: usize,
}

impl DetectCommand {
    /// Whether input comes from stdin rather than a path.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_deref().is_none_or(|p| p.as_os_str() == "-")
    }
}

/// Arguments for the `encodings` command.
#[derive(Parser, Debug)]
pub struct EncodingsCommand {
    /// Path to a custom detection configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom detection configuration file (YAML).")]
    pub config: Option<PathBuf>,
}
