// fixibake/src/ui/mod.rs
//! Terminal presentation: colour theme, status messages and the ranking table.

pub mod output_format;
pub mod ranking_table;
pub mod theme;
