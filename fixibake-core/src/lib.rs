// fixibake-core/src/lib.rs
//! # Fixibake Core Library
//!
//! `fixibake-core` guesses which legacy East Asian text encoding a piece of
//! undecoded data was written in. It decodes the data under every candidate
//! encoding, keeps the CJK characters each trial produces, and ranks the
//! candidates by how much those characters look like ordinary Chinese,
//! Japanese or Korean text.
//!
//! The library performs no terminal I/O and keeps no state between calls.
//!
//! ## Modules
//!
//! * `candidate`: Resolves encoding labels into codecs.
//! * `decoder`: Strict and lenient trial decoding, plus CJK extraction.
//! * `sources`: Input adapters (in-memory bytes, ZIP entry names, text files).
//! * `ranker`: Scores every candidate against a source and sorts the results.
//! * `config`: Candidate list and safety caps, loaded from YAML.
//! * `headless`: One-shot convenience wrappers.
//! * `errors`: The library's error type.
//!
//! ## Public API
//!
//! **Configuration**
//!
//! * [`DetectionConfig`]: Candidate labels and caps as written in a config file.
//! * [`DetectionConfig::load_default`]: Loads the built-in settings.
//! * [`merge_config`]: Merges user settings over the defaults.
//! * [`ResolvedConfig`]: Validated settings, ready for a ranker.
//!
//! **Detection**
//!
//! * [`TextSource`]: The seam between input kinds and the ranker.
//! * [`EncodingRanker`]: Ranks the candidates for a source.
//! * [`detect_bytes`] / [`detect_path`]: Single-call detection.
//!
//! ## Usage Example
//!
//! ```rust
//! use fixibake_core::{detect_bytes, DetectionConfig, FixibakeError};
//!
//! fn main() -> Result<(), FixibakeError> {
//!     // "测试" encoded as UTF-8.
//!     let bytes = [0xE6, 0xB5, 0x8B, 0xE8, 0xAF, 0x95];
//!
//!     let config = DetectionConfig::default();
//!     let ranking = detect_bytes(&bytes, &config)?;
//!
//!     let best = ranking.best().expect("the default config has candidates");
//!     assert_eq!(best.encoding, "utf-8");
//!     for entry in &ranking {
//!         println!("{:<10} {:>6.3} {}", entry.encoding, entry.score, entry.preview);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`FixibakeError`]. A candidate that fails to
//! decode is *not* an error: it stays in the ranking with [`FAILED_SCORE`].
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod candidate;
pub mod config;
pub mod decoder;
pub mod errors;
pub mod headless;
pub mod ranker;
pub mod sources;

/// Re-exports the configuration types and functions.
pub use config::{
    merge_config,
    DetectionConfig,
    Limits,
    LimitsConfig,
    ResolvedConfig,
    DEFAULT_MAX_CHARS,
    DEFAULT_MAX_ENTRIES,
    DEFAULT_TEXT_PREFIX_BYTES,
};

pub use candidate::{EncodingCandidate, DEFAULT_ENCODINGS};
pub use decoder::{decode, decode_lossy, extract_cjk, is_cjk, DecodeOutcome};
pub use errors::FixibakeError;

pub use ranker::{
    rank,
    EncodingRanker,
    Ranking,
    ScoredCandidate,
    DECODE_ERROR_PREVIEW,
    FAILED_SCORE,
};

pub use sources::{
    looks_like_text,
    open_source,
    ArchiveSource,
    ByteSource,
    SourceKind,
    TextFileSource,
    TextSource,
};

pub use headless::{detect_bytes, detect_path};

/// The frequency model and scorer the ranker is built on.
pub use fixibake_freq::{BundledModel, FrequencyModel, Language, LanguageScores, Scorer};
