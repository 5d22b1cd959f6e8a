// fixibake-core/src/sources/archive.rs
//! ZIP entry names as a text source.
//!
//! The archive is reopened for every candidate and its raw, undecoded name
//! bytes are decoded with that candidate. This is the only way to get at the
//! names "as if" they were written in the candidate encoding, since the
//! container itself does not record which legacy code page was used.
//!
//! Entries with general-purpose flag bit 11 set (or an Info-ZIP Unicode path
//! field) declare UTF-8 names, and those are decoded as UTF-8 under every
//! candidate.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use zip::read::ZipFile;
use zip::ZipArchive;

use super::{SourceKind, TextSource};
use crate::candidate::EncodingCandidate;
use crate::decoder::{decode, DecodeOutcome};
use crate::errors::FixibakeError;

/// Entry names of a ZIP archive on disk.
#[derive(Debug, Clone)]
pub struct ArchiveSource {
    path: PathBuf,
    max_entries: usize,
    entry_count: usize,
}

impl ArchiveSource {
    /// Validates that `path` is a readable ZIP archive.
    ///
    /// Only the first `max_entries` entries are read on each trial.
    pub fn open<P: AsRef<Path>>(path: P, max_entries: usize) -> Result<Self, FixibakeError> {
        let path = path.as_ref().to_path_buf();
        let entry_count = open_archive(&path)?.len();
        if entry_count > max_entries {
            debug!(
                "{} has {} entries, only the first {} are sampled",
                path.display(),
                entry_count,
                max_entries
            );
        }
        Ok(Self {
            path,
            max_entries,
            entry_count,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total number of entries in the archive, sampled or not.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

impl TextSource for ArchiveSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Archive
    }

    fn describe(&self) -> String {
        format!("ZIP archive {} ({} entries)", self.path.display(), self.entry_count)
    }

    fn read_under(&self, candidate: &EncodingCandidate) -> Result<DecodeOutcome, FixibakeError> {
        // The handle lives only for this trial.
        let mut archive = open_archive(&self.path)?;
        let sampled = archive.len().min(self.max_entries);
        let utf8 = EncodingCandidate::utf8();

        let mut names = String::new();
        for index in 0..sampled {
            let entry = archive
                .by_index_raw(index)
                .map_err(|source| FixibakeError::NotAnArchive {
                    path: self.path.clone(),
                    source,
                })?;
            let encoding = if declares_utf8(&entry) { &utf8 } else { candidate };
            match decode(entry.name_raw(), encoding) {
                DecodeOutcome::Decoded { text } => names.push_str(&text),
                DecodeOutcome::Failed => {
                    debug!("entry #{} name is malformed as {}", index, encoding);
                    return Ok(DecodeOutcome::Failed);
                }
            }
        }

        Ok(DecodeOutcome::Decoded { text: names })
    }
}

/// Whether the entry's name is declared UTF-8.
///
/// `zip` does not expose the flag itself. It decodes flagged names as UTF-8
/// and all others as CP437, and for a name with any non-ASCII byte the two
/// decodings never agree.
fn declares_utf8<R: std::io::Read>(entry: &ZipFile<'_, R>) -> bool {
    let raw = entry.name_raw();
    !raw.is_ascii() && entry.name() == String::from_utf8_lossy(raw)
}

fn open_archive(path: &Path) -> Result<ZipArchive<BufReader<File>>, FixibakeError> {
    let file = File::open(path)?;
    ZipArchive::new(BufReader::new(file)).map_err(|source| FixibakeError::NotAnArchive {
        path: path.to_path_buf(),
        source,
    })
}
