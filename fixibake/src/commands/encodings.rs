// fixibake/src/commands/encodings.rs
//! The `encodings` command: show which codec each candidate label resolves to.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use is_terminal::IsTerminal;

use fixibake_core::EncodingCandidate;

use crate::commands::load_detection_config;
use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

pub fn run_encodings(config_path: Option<&Path>, theme_map: &ThemeMap) -> Result<()> {
    let config = load_detection_config(config_path, &[])?;
    let resolved = config.resolve().context("Invalid detection settings")?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    print_candidates(&resolved.candidates, &mut writer, theme_map, supports_color)
}

/// Writes one row per candidate: trial order, configured label, codec name.
pub fn print_candidates<W: Write>(
    candidates: &[EncodingCandidate],
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(
        ["#", "Label", "Codec"].map(|h| paint(h, ThemeEntry::Header, theme_map, enable_colors)),
    );
    for (index, candidate) in candidates.iter().enumerate() {
        table.add_row([
            (index + 1).to_string(),
            candidate.label().to_string(),
            candidate.encoding().name().to_string(),
        ]);
    }
    writeln!(writer, "{}", table)?;
    Ok(())
}
