// fixibake-core/src/decoder.rs
//! Trial decoding of raw bytes and CJK character extraction.
//!
//! A decode either succeeds or fails; it never panics and never errors. Whether
//! the decoded text is *plausible* is left to the scorer, so mojibake that
//! happens to be well-formed in the trial encoding still counts as `Decoded`.

use log::trace;

use crate::candidate::EncodingCandidate;

/// The result of decoding one buffer under one candidate encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The bytes are well-formed in the encoding.
    Decoded { text: String },
    /// The bytes contain a sequence that is malformed in the encoding.
    Failed,
}

impl DecodeOutcome {
    pub fn decoded(text: impl Into<String>) -> Self {
        DecodeOutcome::Decoded { text: text.into() }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DecodeOutcome::Failed)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DecodeOutcome::Decoded { text } => Some(text),
            DecodeOutcome::Failed => None,
        }
    }
}

/// Strictly decodes `bytes` with the candidate's codec.
///
/// No BOM sniffing happens: a UTF-8 BOM in front of GBK bytes does not switch
/// the decoder to UTF-8.
pub fn decode(bytes: &[u8], candidate: &EncodingCandidate) -> DecodeOutcome {
    match candidate
        .encoding()
        .decode_without_bom_handling_and_without_replacement(bytes)
    {
        Some(text) => DecodeOutcome::decoded(text),
        None => {
            trace!("{} bytes are malformed as {}", bytes.len(), candidate);
            DecodeOutcome::Failed
        }
    }
}

/// Decodes `bytes`, replacing malformed sequences with U+FFFD.
pub fn decode_lossy(bytes: &[u8], candidate: &EncodingCandidate) -> String {
    let (text, had_errors) = candidate.encoding().decode_without_bom_handling(bytes);
    if had_errors {
        trace!("lossy decode as {} replaced malformed sequences", candidate);
    }
    text.into_owned()
}

/// Whether `ch` belongs to one of the scored CJK blocks.
pub fn is_cjk(ch: char) -> bool {
    matches!(ch,
        '\u{3040}'..='\u{309F}'   // Hiragana
        | '\u{30A0}'..='\u{30FF}' // Katakana
        | '\u{3400}'..='\u{4DBF}' // CJK Unified Ideographs Extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{AC00}'..='\u{D7AF}' // Hangul Syllables
    )
}

/// Extracts the CJK characters of `text` in order, keeping at most `max_chars`.
pub fn extract_cjk(text: &str, max_chars: usize) -> Vec<char> {
    text.chars().filter(|&c| is_cjk(c)).take(max_chars).collect()
}
