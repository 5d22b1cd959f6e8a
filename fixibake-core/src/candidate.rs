// fixibake-core/src/candidate.rs
//! Named trial encodings.

use std::fmt;

use encoding_rs::Encoding;

use crate::errors::FixibakeError;

/// The candidate labels tried when no configuration says otherwise.
pub const DEFAULT_ENCODINGS: [&str; 6] = ["utf-8", "gbk", "big5", "shift_jis", "euc-jp", "euc-kr"];

/// One trial encoding: the label it was configured with plus the codec it resolves to.
///
/// The label is kept verbatim so rankings report what the user asked for
/// (`shift_jis`), not the codec's canonical name (`Shift_JIS`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingCandidate {
    label: String,
    encoding: &'static Encoding,
}

impl EncodingCandidate {
    /// Resolves a WHATWG encoding label.
    ///
    /// Labels that map to the `replacement` encoding are rejected since they can
    /// never produce real text.
    pub fn resolve(label: &str) -> Result<Self, FixibakeError> {
        let trimmed = label.trim();
        let encoding = Encoding::for_label_no_replacement(trimmed.as_bytes())
            .ok_or_else(|| FixibakeError::UnknownEncoding(label.to_string()))?;
        Ok(Self {
            label: trimmed.to_string(),
            encoding,
        })
    }

    /// UTF-8 under its usual label, for data that declares its own encoding.
    pub fn utf8() -> Self {
        Self {
            label: "utf-8".to_string(),
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Resolves every label in order, failing on the first unknown one.
    pub fn resolve_all<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Self>, FixibakeError> {
        labels.iter().map(|l| Self::resolve(l.as_ref())).collect()
    }

    /// The label as configured.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl fmt::Display for EncodingCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
