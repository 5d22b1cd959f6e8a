// fixibake-core/src/ranker.rs
//! Ranks candidate encodings by how natural the text they produce looks.
//!
//! For every configured candidate, in order, the ranker asks the source for its
//! text under that encoding, extracts the CJK characters, and scores them. A
//! candidate that cannot decode the source is kept in the ranking with the
//! sentinel score so the caller can see it was tried.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use serde::Serialize;

use fixibake_freq::{BundledModel, FrequencyModel, Scorer};

use crate::config::ResolvedConfig;
use crate::decoder::{extract_cjk, DecodeOutcome};
use crate::errors::FixibakeError;
use crate::sources::TextSource;

/// Score given to a candidate that failed to decode. Lower than any real score.
pub const FAILED_SCORE: f64 = -1.0;

/// Preview shown for a candidate that failed to decode.
pub const DECODE_ERROR_PREVIEW: &str = "DecodeError";

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// The candidate's label as configured.
    pub encoding: String,
    /// Naturalness score, `0.0` when nothing was scoreable, [`FAILED_SCORE`] on failure.
    pub score: f64,
    /// The extracted CJK characters, or [`DECODE_ERROR_PREVIEW`].
    pub preview: String,
}

impl ScoredCandidate {
    pub fn failed(encoding: impl Into<String>) -> Self {
        Self {
            encoding: encoding.into(),
            score: FAILED_SCORE,
            preview: DECODE_ERROR_PREVIEW.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.score == FAILED_SCORE && self.preview == DECODE_ERROR_PREVIEW
    }

    /// The preview cut to at most `width` characters. Display only.
    pub fn display_preview(&self, width: usize) -> String {
        self.preview.chars().take(width).collect()
    }
}

/// Candidates ordered by descending score.
///
/// The sort is stable: candidates with equal scores keep the order in which
/// they were configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<ScoredCandidate>,
}

impl Ranking {
    /// Sorts `entries` into a ranking.
    pub fn from_unsorted(mut entries: Vec<ScoredCandidate>) -> Self {
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { entries }
    }

    /// The highest-ranked candidate, if any candidate was configured.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[ScoredCandidate] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<ScoredCandidate> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a ScoredCandidate;
    type IntoIter = std::slice::Iter<'a, ScoredCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Runs every configured candidate against a source and ranks the results.
#[derive(Debug, Clone)]
pub struct EncodingRanker<M> {
    scorer: Scorer<M>,
    config: ResolvedConfig,
}

impl EncodingRanker<BundledModel> {
    /// A ranker backed by the frequency corpus shipped with `fixibake-freq`.
    pub fn with_bundled_model(config: ResolvedConfig) -> Self {
        Self::new(BundledModel::new(), config)
    }
}

impl<M: FrequencyModel> EncodingRanker<M> {
    pub fn new(model: M, config: ResolvedConfig) -> Self {
        Self {
            scorer: Scorer::new(model, config.limits.max_chars),
            config,
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Extracts, caps and scores the CJK characters of `text`.
    ///
    /// Returns the score and the extracted characters as a preview.
    pub fn score_text(&self, text: &str) -> Result<(f64, String), FixibakeError> {
        let chars = extract_cjk(text, self.scorer.max_chars());
        let score = self.scorer.score(&chars)?;
        Ok((score, chars.into_iter().collect()))
    }

    /// Ranks every configured candidate against `source`.
    ///
    /// A candidate that fails to decode, or whose read fails, is recorded with
    /// [`FAILED_SCORE`]; it never aborts the ranking.
    pub fn rank(&self, source: &dyn TextSource) -> Result<Ranking, FixibakeError> {
        info!(
            "Ranking {} candidate encodings for {}",
            self.config.candidates.len(),
            source.describe()
        );

        let mut entries = Vec::with_capacity(self.config.candidates.len());
        for candidate in &self.config.candidates {
            let outcome = source.read_under(candidate).unwrap_or_else(|e| {
                warn!("Reading {} as {} failed: {}", source.describe(), candidate, e);
                DecodeOutcome::Failed
            });

            let entry = match outcome {
                DecodeOutcome::Decoded { text } => {
                    let (score, preview) = self.score_text(&text)?;
                    ScoredCandidate {
                        encoding: candidate.label().to_string(),
                        score,
                        preview,
                    }
                }
                DecodeOutcome::Failed => ScoredCandidate::failed(candidate.label()),
            };

            debug!(
                "Candidate {} scored {:.3} ({} CJK chars)",
                candidate,
                entry.score,
                if entry.is_failed() { 0 } else { entry.preview.chars().count() }
            );
            entries.push(entry);
        }

        let ranking = Ranking::from_unsorted(entries);
        if let Some(best) = ranking.best() {
            info!("Best candidate: {} (score {:.3})", best.encoding, best.score);
        }
        Ok(ranking)
    }
}

/// Ranks `source` with the bundled frequency corpus.
pub fn rank(source: &dyn TextSource, config: &ResolvedConfig) -> Result<Ranking, FixibakeError> {
    EncodingRanker::with_bundled_model(config.clone()).rank(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::EncodingCandidate;
    use crate::config::{DetectionConfig, Limits};
    use crate::sources::{ByteSource, SourceKind};
    use fixibake_freq::Language;

    fn config_for(labels: &[&str]) -> ResolvedConfig {
        DetectionConfig::default()
            .with_encodings(labels.iter().copied())
            .resolve()
            .unwrap()
    }

    /// A source whose outcome is scripted per label.
    struct ScriptedSource;

    impl TextSource for ScriptedSource {
        fn kind(&self) -> SourceKind {
            SourceKind::Bytes
        }

        fn describe(&self) -> String {
            "scripted".to_string()
        }

        fn read_under(&self, candidate: &EncodingCandidate) -> Result<DecodeOutcome, FixibakeError> {
            match candidate.label() {
                "utf-8" => Ok(DecodeOutcome::decoded("ascii only")),
                "gbk" => Ok(DecodeOutcome::Failed),
                "big5" => Err(FixibakeError::IoError(std::io::Error::other("disk gone"))),
                _ => Ok(DecodeOutcome::decoded("我们的")),
            }
        }
    }

    #[test]
    fn test_ranking_has_one_entry_per_candidate() {
        let config = config_for(&["utf-8", "gbk", "big5", "shift_jis", "euc-jp", "euc-kr"]);
        let ranking = rank(&ScriptedSource, &config).unwrap();
        assert_eq!(ranking.len(), 6);
    }

    #[test]
    fn test_failures_and_read_errors_get_sentinel() {
        let config = config_for(&["utf-8", "gbk", "big5"]);
        let ranking = rank(&ScriptedSource, &config).unwrap();
        let entries = ranking.entries();
        assert_eq!(entries[0].encoding, "utf-8");
        assert_eq!(entries[0].score, 0.0);
        assert_eq!(entries[0].preview, "");
        for entry in &entries[1..] {
            assert_eq!(entry.score, FAILED_SCORE);
            assert_eq!(entry.preview, DECODE_ERROR_PREVIEW);
            assert!(entry.is_failed());
        }
        // Ties keep configuration order.
        assert_eq!(entries[1].encoding, "gbk");
        assert_eq!(entries[2].encoding, "big5");
    }

    #[test]
    fn test_stable_sort_for_equal_scores() {
        let config = config_for(&["euc-kr", "gbk", "shift_jis", "euc-jp"]);
        let ranking = rank(&ScriptedSource, &config).unwrap();
        let labels: Vec<&str> = ranking.iter().map(|e| e.encoding.as_str()).collect();
        assert_eq!(labels, ["euc-kr", "shift_jis", "euc-jp", "gbk"]);
        assert!(ranking.entries()[0].score > 0.0);
        assert_eq!(ranking.entries()[0].preview, "我们的");
    }

    #[test]
    fn test_empty_candidate_set_gives_empty_ranking() {
        let config = ResolvedConfig {
            candidates: Vec::new(),
            limits: Limits::default(),
        };
        let ranking = rank(&ByteSource::new(b"anything"), &config).unwrap();
        assert!(ranking.is_empty());
        assert!(ranking.best().is_none());
    }

    #[test]
    fn test_score_text_caps_characters() {
        let mut config = ResolvedConfig::default();
        config.limits.max_chars = 2;
        let ranker = EncodingRanker::with_bundled_model(config);
        let (score, preview) = ranker.score_text("的的的的的").unwrap();
        assert_eq!(preview, "的的");
        assert_eq!(score, BundledModel::new().zipf_frequency('的', Language::Chinese));
    }

    #[test]
    fn test_display_preview_truncates_without_touching_score() {
        let entry = ScoredCandidate {
            encoding: "utf-8".to_string(),
            score: 5.5,
            preview: "一二三四五".to_string(),
        };
        assert_eq!(entry.display_preview(3), "一二三");
        assert_eq!(entry.preview, "一二三四五");
    }
}
