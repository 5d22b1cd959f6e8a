// fixibake-core/src/sources/mod.rs
//! Input adapters that turn a source into text under a trial encoding.
//!
//! Every adapter exposes the same shape to the ranker: "give me your text as
//! if it were encoded in X". How the encoding is applied differs per source:
//! an in-memory buffer is decoded strictly, an archive decodes its entry names
//! itself, and a text file is sampled and decoded leniently.
//!
//! To add a new input kind, create a file in this directory, implement
//! [`TextSource`] for it and, if it can be recognised from a path, teach
//! [`open_source`] to pick it.

use std::fmt;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::candidate::EncodingCandidate;
use crate::config::Limits;
use crate::decoder::DecodeOutcome;
use crate::errors::FixibakeError;

pub mod archive;
pub mod bytes;
pub mod text;

pub use archive::ArchiveSource;
pub use bytes::ByteSource;
pub use text::{looks_like_text, TextFileSource};

/// The kind of input behind a [`TextSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Entry names of a ZIP archive.
    Archive,
    /// The leading block of a text file.
    Text,
    /// A raw in-memory byte buffer.
    Bytes,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Archive => "archive",
            SourceKind::Text => "text",
            SourceKind::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

/// A source of text that can be re-read under any candidate encoding.
///
/// Implementations validate their input when they are constructed, so that a
/// structurally broken source is rejected before any candidate is tried.
pub trait TextSource {
    fn kind(&self) -> SourceKind;

    /// A short human-readable description for logs.
    fn describe(&self) -> String;

    /// Reads the source as text encoded in `candidate`.
    ///
    /// `Ok(DecodeOutcome::Failed)` means the candidate does not fit the data.
    /// `Err` is reserved for faults unrelated to the encoding, such as I/O errors.
    fn read_under(&self, candidate: &EncodingCandidate) -> Result<DecodeOutcome, FixibakeError>;
}

/// Opens `path` with the adapter matching its content.
///
/// A valid ZIP archive gets the archive adapter; anything that sniffs as text
/// gets the text adapter. Everything else is an `UnsupportedSource` error.
pub fn open_source(path: &Path, limits: &Limits) -> Result<Box<dyn TextSource>, FixibakeError> {
    match ArchiveSource::open(path, limits.max_entries) {
        Ok(source) => {
            debug!("{} opened as a ZIP archive", path.display());
            return Ok(Box::new(source));
        }
        Err(FixibakeError::NotAnArchive { source, .. }) => {
            debug!("{} is not a ZIP archive ({}), sniffing for text", path.display(), source);
        }
        Err(e) => return Err(e),
    }

    let source = TextFileSource::open(path, limits.text_prefix_bytes)?;
    debug!("{} opened as a text file", path.display());
    Ok(Box::new(source))
}
