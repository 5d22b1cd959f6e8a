// fixibake-freq/src/scoring/mod.rs
use core::fmt;

use crate::language::Language;
use crate::model::FrequencyModel;
use crate::statistics::RunningMean;

/// Default upper bound on the number of characters a single score may cover.
pub const DEFAULT_MAX_CHARS: usize = 10_000;

/// Errors raised by the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The input exceeds the configured character cap. Callers truncate first.
    TooManyChars { len: usize, max: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::TooManyChars { len, max } => write!(
                f,
                "refusing to score {} characters (limit is {})",
                len, max
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScoreError {}

/// Mean zipf frequency of a character run under each language model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LanguageScores {
    pub zh: f64,
    pub ja: f64,
    pub ko: f64,
}

impl LanguageScores {
    pub fn get(&self, lang: Language) -> f64 {
        match lang {
            Language::Chinese => self.zh,
            Language::Japanese => self.ja,
            Language::Korean => self.ko,
        }
    }

    /// The language with the highest mean, and that mean.
    ///
    /// Ties resolve to the earliest language in [`Language::ALL`].
    pub fn best(&self) -> (Language, f64) {
        let mut best = (Language::Chinese, self.zh);
        for lang in [Language::Japanese, Language::Korean] {
            let value = self.get(lang);
            if value > best.1 {
                best = (lang, value);
            }
        }
        best
    }
}

/// Turns a run of CJK characters into a single naturalness score.
///
/// The score is the highest of the per-language mean zipf frequencies: the
/// scorer does not decide *which* language the text is in, only whether it
/// reads like ordinary text in any of them.
#[derive(Debug, Clone)]
pub struct Scorer<M> {
    model: M,
    max_chars: usize,
}

impl<M: FrequencyModel> Scorer<M> {
    pub fn new(model: M, max_chars: usize) -> Self {
        Self { model, max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Per-language means for `chars`. An empty run scores `0.0` everywhere.
    pub fn language_scores(&self, chars: &[char]) -> Result<LanguageScores, ScoreError> {
        if chars.len() > self.max_chars {
            return Err(ScoreError::TooManyChars {
                len: chars.len(),
                max: self.max_chars,
            });
        }

        let mut zh = RunningMean::new();
        let mut ja = RunningMean::new();
        let mut ko = RunningMean::new();
        for &ch in chars {
            zh.push(self.model.zipf_frequency(ch, Language::Chinese));
            ja.push(self.model.zipf_frequency(ch, Language::Japanese));
            ko.push(self.model.zipf_frequency(ch, Language::Korean));
        }

        Ok(LanguageScores {
            zh: zh.mean(),
            ja: ja.mean(),
            ko: ko.mean(),
        })
    }

    /// The naturalness score of `chars`.
    pub fn score(&self, chars: &[char]) -> Result<f64, ScoreError> {
        Ok(self.language_scores(chars)?.best().1)
    }
}
