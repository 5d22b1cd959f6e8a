// fixibake-freq/src/lib.rs
//! Character frequency statistics for Chinese, Japanese and Korean text.
//!
//! The crate answers one question: "how plausible is this run of CJK characters
//! as ordinary text in *some* CJK language?". It bundles a character frequency corpus
//! per language, exposes it behind the [`FrequencyModel`] trait, and provides a
//! [`Scorer`] that turns a character sequence into a single naturalness score.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod language;
pub mod model;
pub mod scoring;
pub mod statistics;

pub use language::Language;
pub use model::{BundledModel, FrequencyModel, FrequencyTable, ZIPF_FLOOR};
pub use scoring::{LanguageScores, ScoreError, Scorer, DEFAULT_MAX_CHARS};
pub use statistics::RunningMean;

/// Common type definitions
pub type ZipfScore = f64;
