//! Module for managing the application's terminal colour theme.
//!
//! Users may restyle the ranking table and status messages with a small YAML
//! file mapping each [`ThemeEntry`] to one of the 16 named ANSI colours.
//! Entries missing from a custom theme fall back to the built-in style.

use anyhow::{Context, Result};
use owo_colors::{AnsiColors, OwoColorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Table headers.
    Header,
    /// The highest-ranked candidate.
    BestCandidate,
    /// Candidates that decoded but did not win.
    Candidate,
    /// Candidates that failed to decode.
    FailedCandidate,
    /// General informational messages.
    Info,
    /// Warning messages.
    Warn,
    /// Error messages.
    Error,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 7] = [
        ThemeEntry::Header,
        ThemeEntry::BestCandidate,
        ThemeEntry::Candidate,
        ThemeEntry::FailedCandidate,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
    ];
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white" |
            "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue" |
            "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the colour into its `owo_colors::AnsiColors` counterpart.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&Path>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

/// Paints `text` with the entry's colour, or returns it unchanged when colour is off.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

impl ThemeStyle {
    /// Loads a theme from a YAML file and fills missing entries from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in ThemeStyle::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let mut default_theme = HashMap::new();
        default_theme.insert(ThemeEntry::Header, ThemeStyle { fg: Some(ThemeColor::named("cyan")) });
        default_theme.insert(ThemeEntry::BestCandidate, ThemeStyle { fg: Some(ThemeColor::named("brightgreen")) });
        default_theme.insert(ThemeEntry::FailedCandidate, ThemeStyle { fg: Some(ThemeColor::named("brightblack")) });
        default_theme.insert(ThemeEntry::Warn, ThemeStyle { fg: Some(ThemeColor::named("yellow")) });
        default_theme.insert(ThemeEntry::Error, ThemeStyle { fg: Some(ThemeColor::named("red")) });

        for entry in [ThemeEntry::Candidate, ThemeEntry::Info] {
            default_theme.entry(entry).or_insert_with(|| ThemeStyle { fg: Some(ThemeColor::named("white")) });
        }
        default_theme
    }
}
