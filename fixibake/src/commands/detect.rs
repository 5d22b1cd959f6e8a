// fixibake/src/commands/detect.rs
//! The `detect` command: rank candidate encodings for a path or stdin.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use fixibake_core::{open_source, ByteSource, EncodingRanker, Ranking};

use crate::cli::DetectCommand;
use crate::commands::load_detection_config;
use crate::ui::output_format;
use crate::ui::ranking_table;
use crate::ui::theme::ThemeMap;

/// Options for the `detect` command, decoupled from clap.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub encodings: Vec<String>,
    pub json: bool,
    pub preview_width: usize,
    /// Suppresses the informational line naming the source.
    pub quiet: bool,
}

impl From<DetectCommand> for DetectOptions {
    fn from(cmd: DetectCommand) -> Self {
        let input = if cmd.reads_stdin() { None } else { cmd.input };
        Self {
            input,
            config: cmd.config,
            encodings: cmd.encodings,
            json: cmd.json,
            preview_width: cmd.preview_width,
            quiet: false,
        }
    }
}

/// Runs detection and prints the ranking to stdout.
pub fn run_detect(opts: &DetectOptions, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting detect operation.");
    let config = load_detection_config(opts.config.as_deref(), &opts.encodings)?;
    let resolved = config.resolve().context("Invalid detection settings")?;
    let ranker = EncodingRanker::with_bundled_model(resolved);

    let ranking = match &opts.input {
        Some(path) => {
            let source = open_source(path, &ranker.config().limits)
                .with_context(|| format!("Cannot read {}", path.display()))?;
            if !opts.quiet {
                info_msg(format!("Detecting encoding of {}", source.describe()), theme_map);
            }
            ranker.rank(source.as_ref())?
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("Failed to read input from stdin")?;
            debug!("Read {} bytes from stdin", buffer.len());
            ranker.rank(&ByteSource::new(&buffer))?
        }
    };

    print_ranking(&ranking, opts, theme_map)?;
    warn_if_inconclusive(&ranking, theme_map);
    info!("Detect operation completed.");
    Ok(())
}

fn print_ranking(ranking: &Ranking, opts: &DetectOptions, theme_map: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if opts.json {
        ranking_table::print_ranking_json(ranking, &mut writer)
    } else {
        ranking_table::print_ranking_table(ranking, &mut writer, theme_map, opts.preview_width, supports_color)
    }
}

/// Helper for printing info messages to stderr.
fn info_msg(msg: impl AsRef<str>, theme_map: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme_map, supports_color);
}

fn warn_if_inconclusive(ranking: &Ranking, theme_map: &ThemeMap) {
    let message = match ranking.best() {
        None => "No candidate encodings are configured.",
        Some(best) if best.score <= 0.0 => "No CJK text was found under any candidate encoding.",
        Some(_) => return,
    };
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), message, theme_map, supports_color);
}
