//! Configuration management for `fixibake-core`.
//!
//! This module defines the detection settings: which candidate encodings are
//! tried, in which order, and the safety caps that bound the work done per
//! candidate. Settings are read from YAML, merged field by field over the
//! built-in defaults, and finally resolved into a validated [`ResolvedConfig`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::candidate::{EncodingCandidate, DEFAULT_ENCODINGS};
use crate::errors::FixibakeError;

/// Default cap on scored CJK characters per candidate.
pub const DEFAULT_MAX_CHARS: usize = fixibake_freq::DEFAULT_MAX_CHARS;
/// Default cap on archive entries whose names are sampled.
pub const DEFAULT_MAX_ENTRIES: usize = 1_000;
/// Default number of bytes read from the start of a text file.
pub const DEFAULT_TEXT_PREFIX_BYTES: usize = 10 * 1024;

/// Safety caps as they appear in a configuration file. Unset fields inherit.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of CJK characters scored per candidate.
    pub max_chars: Option<usize>,
    /// Maximum number of archive entries whose names are read.
    pub max_entries: Option<usize>,
    /// Number of bytes sampled from the start of a text file.
    pub text_prefix_bytes: Option<usize>,
}

/// Represents the top-level detection configuration.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct DetectionConfig {
    /// Candidate encoding labels in trial order.
    pub encodings: Option<Vec<String>>,
    /// Safety caps.
    pub limits: LimitsConfig,
}

/// Resolved, validated caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limits {
    pub max_chars: usize,
    pub max_entries: usize,
    pub text_prefix_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_entries: DEFAULT_MAX_ENTRIES,
            text_prefix_bytes: DEFAULT_TEXT_PREFIX_BYTES,
        }
    }
}

/// A configuration whose labels resolved to codecs and whose caps are usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub candidates: Vec<EncodingCandidate>,
    pub limits: Limits,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            candidates: EncodingCandidate::resolve_all(&DEFAULT_ENCODINGS[..])
                .expect("every built-in encoding label is a WHATWG label"),
            limits: Limits::default(),
        }
    }
}

impl DetectionConfig {
    /// Loads detection settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading detection config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DetectionConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .resolve()
            .with_context(|| format!("Invalid detection config in {}", path.display()))?;
        Ok(config)
    }

    /// Loads the built-in detection settings from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default detection config from embedded string...");
        let default_yaml = include_str!("../config/default_detection.yaml");
        let config: DetectionConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default detection config")?;
        Ok(config)
    }

    /// Replaces the candidate list, e.g. from a command-line override.
    pub fn with_encodings<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.encodings = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Fills unset fields with the defaults and validates everything.
    pub fn resolve(&self) -> Result<ResolvedConfig, FixibakeError> {
        let candidates = match &self.encodings {
            Some(labels) => {
                warn_on_duplicates(labels);
                EncodingCandidate::resolve_all(labels.as_slice())?
            }
            None => EncodingCandidate::resolve_all(&DEFAULT_ENCODINGS[..])?,
        };

        let defaults = Limits::default();
        let limits = Limits {
            max_chars: non_zero("max_chars", self.limits.max_chars, defaults.max_chars)?,
            max_entries: non_zero("max_entries", self.limits.max_entries, defaults.max_entries)?,
            text_prefix_bytes: non_zero(
                "text_prefix_bytes",
                self.limits.text_prefix_bytes,
                defaults.text_prefix_bytes,
            )?,
        };

        debug!(
            "Resolved {} candidate encodings, limits {:?}",
            candidates.len(),
            limits
        );
        Ok(ResolvedConfig { candidates, limits })
    }
}

/// Merges user-defined detection settings over the defaults, field by field.
pub fn merge_config(
    default_config: DetectionConfig,
    user_config: Option<DetectionConfig>,
) -> DetectionConfig {
    let mut merged = default_config;

    if let Some(user_cfg) = user_config {
        if let Some(encodings) = user_cfg.encodings {
            debug!("Overriding candidate encodings with user list: {:?}", encodings);
            merged.encodings = Some(encodings);
        }
        if let Some(max_chars) = user_cfg.limits.max_chars {
            debug!("Overriding max_chars with user value: {}", max_chars);
            merged.limits.max_chars = Some(max_chars);
        }
        if let Some(max_entries) = user_cfg.limits.max_entries {
            debug!("Overriding max_entries with user value: {}", max_entries);
            merged.limits.max_entries = Some(max_entries);
        }
        if let Some(prefix) = user_cfg.limits.text_prefix_bytes {
            debug!("Overriding text_prefix_bytes with user value: {}", prefix);
            merged.limits.text_prefix_bytes = Some(prefix);
        }
    }

    merged
}

fn non_zero(
    name: &'static str,
    value: Option<usize>,
    default: usize,
) -> Result<usize, FixibakeError> {
    match value.unwrap_or(default) {
        0 => Err(FixibakeError::InvalidLimit(name)),
        n => Ok(n),
    }
}

fn warn_on_duplicates(labels: &[String]) {
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.trim().to_ascii_lowercase()) {
            warn!("Encoding '{}' is listed more than once and will be tried twice.", label);
        }
    }
}
