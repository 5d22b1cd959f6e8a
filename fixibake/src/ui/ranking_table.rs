// fixibake/src/ui/ranking_table.rs
//! Renders a [`Ranking`] as a table or as JSON.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use fixibake_core::Ranking;

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

/// Writes the ranking as a table, best candidate first.
///
/// Previews are cut to `preview_width` characters; the ranking itself is untouched.
pub fn print_ranking_table<W: Write>(
    ranking: &Ranking,
    writer: &mut W,
    theme: &ThemeMap,
    preview_width: usize,
    enable_colors: bool,
) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(
            ["#", "Encoding", "Score", "Preview"]
                .map(|h| paint(h, ThemeEntry::Header, theme, enable_colors)),
        );

    for (index, entry) in ranking.iter().enumerate() {
        let style = if entry.is_failed() {
            ThemeEntry::FailedCandidate
        } else if index == 0 {
            ThemeEntry::BestCandidate
        } else {
            ThemeEntry::Candidate
        };
        table.add_row(
            [
                (index + 1).to_string(),
                entry.encoding.clone(),
                format!("{:.3}", entry.score),
                entry.display_preview(preview_width),
            ]
            .map(|cell| paint(&cell, style, theme, enable_colors)),
        );
    }

    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    writeln!(writer, "{}", table).context("Failed to write ranking table")?;
    Ok(())
}

/// Writes the ranking as a pretty-printed JSON array.
pub fn print_ranking_json<W: Write>(ranking: &Ranking, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, ranking).context("Failed to serialize ranking")?;
    writeln!(writer)?;
    Ok(())
}
