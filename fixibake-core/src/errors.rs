//! errors.rs - Custom error types for the fixibake-core library.
//!
//! Only structural problems are errors here: a source that cannot be read or is
//! of an unsupported kind, or a configuration that cannot be resolved. A
//! candidate encoding failing to decode the input is an ordinary outcome and is
//! reported through `DecodeOutcome::Failed` instead.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

use fixibake_freq::ScoreError;

/// This enum represents all possible error types in the `fixibake-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FixibakeError {
    #[error("Unknown or unsupported encoding label '{0}'")]
    UnknownEncoding(String),

    #[error("Limit '{0}' must be greater than zero")]
    InvalidLimit(&'static str),

    #[error("Not a valid ZIP archive: {}: {source}", path.display())]
    NotAnArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Unsupported input, neither a ZIP archive nor a text file: {}", .0.display())]
    UnsupportedSource(PathBuf),

    #[error("Scoring failed: {0}")]
    Score(#[from] ScoreError),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
