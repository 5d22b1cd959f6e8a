// File: fixibake-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive detection.
//!
//! Each function resolves the configuration, picks the right source adapter,
//! and runs the bundled-model ranker in a single call.

use std::path::Path;

use log::debug;

use crate::config::DetectionConfig;
use crate::errors::FixibakeError;
use crate::ranker::{EncodingRanker, Ranking};
use crate::sources::{open_source, ByteSource};

/// Ranks the candidate encodings for an in-memory byte buffer.
///
/// # Arguments
///
/// * `bytes` - The raw, undecoded data.
/// * `config` - The merged detection settings (defaults + optional user overrides).
pub fn detect_bytes(bytes: &[u8], config: &DetectionConfig) -> Result<Ranking, FixibakeError> {
    let resolved = config.resolve()?;
    let source = ByteSource::new(bytes);
    EncodingRanker::with_bundled_model(resolved).rank(&source)
}

/// Ranks the candidate encodings for a file, auto-detecting its kind.
///
/// ZIP archives are judged by their entry names and text files by their
/// leading block. Any other file is rejected with `UnsupportedSource`.
pub fn detect_path<P: AsRef<Path>>(path: P, config: &DetectionConfig) -> Result<Ranking, FixibakeError> {
    let path = path.as_ref();
    let resolved = config.resolve()?;
    let source = open_source(path, &resolved.limits)?;
    debug!("Detecting encoding of {} ({})", path.display(), source.kind());
    EncodingRanker::with_bundled_model(resolved).rank(source.as_ref())
}
