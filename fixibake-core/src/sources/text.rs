// fixibake-core/src/sources/text.rs
//! The leading block of a text file as a text source.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

use super::{SourceKind, TextSource};
use crate::candidate::EncodingCandidate;
use crate::decoder::{decode_lossy, DecodeOutcome};
use crate::errors::FixibakeError;

/// Bytes inspected when deciding whether a file is text.
pub const SNIFF_BLOCK_BYTES: usize = 8 * 1024;

/// Signatures of common binary formats.
const BINARY_MAGIC: [&[u8]; 9] = [
    &[0xFF, 0xD8, 0xFF],                         // JPEG
    &[0x89, 0x50, 0x4E, 0x47],                   // PNG
    b"GIF8",                                     // GIF
    &[0x7F, 0x45, 0x4C, 0x46],                   // ELF
    &[0x50, 0x4B, 0x03, 0x04],                   // ZIP local header
    &[0x1F, 0x8B],                               // GZ
    b"%PDF-",                                    // PDF
    &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C],       // 7z
    &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07],       // RAR
];

/// A text file on disk, sampled from the start.
#[derive(Debug, Clone)]
pub struct TextFileSource {
    path: PathBuf,
    prefix_bytes: usize,
}

impl TextFileSource {
    /// Validates that `path` holds text, judged by content rather than extension.
    pub fn open<P: AsRef<Path>>(path: P, prefix_bytes: usize) -> Result<Self, FixibakeError> {
        let path = path.as_ref().to_path_buf();
        let head = read_prefix(&path, SNIFF_BLOCK_BYTES)?;
        if !looks_like_text(&head) {
            return Err(FixibakeError::UnsupportedSource(path));
        }
        Ok(Self { path, prefix_bytes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for TextFileSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Text
    }

    fn describe(&self) -> String {
        format!("text file {} (first {} bytes)", self.path.display(), self.prefix_bytes)
    }

    /// Never reports `Failed`: malformed bytes become U+FFFD, which carries no
    /// score, so a few corrupt bytes in the sample do not disqualify a candidate.
    fn read_under(&self, candidate: &EncodingCandidate) -> Result<DecodeOutcome, FixibakeError> {
        let prefix = read_prefix(&self.path, self.prefix_bytes)?;
        debug!("read {} bytes of {} for {}", prefix.len(), self.path.display(), candidate);
        Ok(DecodeOutcome::Decoded {
            text: decode_lossy(&prefix, candidate),
        })
    }
}

/// Content sniffing: rejects known binary signatures and NUL/control-heavy data.
///
/// An empty buffer counts as text.
pub fn looks_like_text(buffer: &[u8]) -> bool {
    if buffer.is_empty() {
        return true;
    }

    if BINARY_MAGIC.iter().any(|magic| buffer.starts_with(magic)) {
        return false;
    }

    let len = buffer.len() as f64;
    let nul_count = buffer.iter().filter(|&&b| b == 0).count();
    if nul_count as f64 / len > 0.05 {
        return false;
    }

    let control_count = buffer
        .iter()
        .filter(|&&b| b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r' | 0x0C | 0x1B))
        .count();
    control_count as f64 / len <= 0.10
}

fn read_prefix(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(limit.min(64 * 1024));
    file.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}
