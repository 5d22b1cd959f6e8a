// fixibake-core/src/sources/bytes.rs
use super::{SourceKind, TextSource};
use crate::candidate::EncodingCandidate;
use crate::decoder::{decode, DecodeOutcome};
use crate::errors::FixibakeError;

/// An in-memory byte buffer, decoded strictly under each candidate.
#[derive(Debug, Clone, Copy)]
pub struct ByteSource<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl TextSource for ByteSource<'_> {
    fn kind(&self) -> SourceKind {
        SourceKind::Bytes
    }

    fn describe(&self) -> String {
        format!("{} byte buffer", self.bytes.len())
    }

    fn read_under(&self, candidate: &EncodingCandidate) -> Result<DecodeOutcome, FixibakeError> {
        Ok(decode(self.bytes, candidate))
    }
}
