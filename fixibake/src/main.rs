// fixibake/src/main.rs
//! Fixibake entry point.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use fixibake::cli::{Cli, Commands};
use fixibake::logger;
use fixibake::ui::output_format::print_error_message;
use fixibake::ui::theme::{build_theme_map, ThemeStyle};
use fixibake::{run_detect, run_encodings, DetectOptions};

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug, args.disable_debug));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let theme = ThemeStyle::default_theme_map();
            let supports_color = io::stderr().is_terminal();
            let _ = print_error_message(&mut io::stderr(), &format!("{:#}", e), &theme, supports_color);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let theme_map = build_theme_map(args.theme.as_deref()).context("Theme error")?;

    match args.command {
        Commands::Detect(cmd) => {
            let opts = DetectOptions {
                quiet: args.quiet,
                ..DetectOptions::from(cmd)
            };
            run_detect(&opts, &theme_map)
        }
        Commands::Encodings(cmd) => run_encodings(cmd.config.as_deref(), &theme_map),
    }
}
