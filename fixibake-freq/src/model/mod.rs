// fixibake-freq/src/model/mod.rs
//! Per-language character frequency models.
//!
//! Frequencies are expressed on the zipf scale: `log10` of the number of
//! occurrences per billion tokens. Everyday characters land between 5 and 7.5,
//! rare ones near 2, and characters a model has never seen get [`ZIPF_FLOOR`].

extern crate alloc;
use alloc::collections::BTreeMap;
use libm::{log10, round};

use crate::language::Language;

/// The value returned for a character that a model does not know.
pub const ZIPF_FLOOR: f64 = 0.0;

const ZH_COUNTS: &str = include_str!("../../data/zh.txt");
const JA_COUNTS: &str = include_str!("../../data/ja.txt");
const KO_COUNTS: &str = include_str!("../../data/ko.txt");

/// A read-only source of per-character frequencies.
///
/// Lookups never fail: a miss yields [`ZIPF_FLOOR`].
pub trait FrequencyModel {
    /// Returns the zipf frequency of `ch` in `lang`.
    fn zipf_frequency(&self, ch: char, lang: Language) -> f64;
}

impl<M: FrequencyModel + ?Sized> FrequencyModel for &M {
    fn zipf_frequency(&self, ch: char, lang: Language) -> f64 {
        (**self).zipf_frequency(ch, lang)
    }
}

/// Per-character zipf values for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    zipf: BTreeMap<char, f64>,
}

impl FrequencyTable {
    /// Parses `<character> <occurrences per billion>` lines.
    ///
    /// Lines starting with `#` are comments. Malformed lines and frequencies
    /// below one per billion are skipped, and a repeated character keeps its
    /// first value.
    pub fn from_frequency_text(text: &str) -> Self {
        let mut zipf = BTreeMap::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(ch), Some(per_billion), None) = (fields.next(), fields.next(), fields.next()) else {
                continue;
            };
            let mut chars = ch.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                continue;
            };
            let Ok(per_billion) = per_billion.parse::<u64>() else {
                continue;
            };
            if per_billion == 0 {
                continue;
            }
            zipf.entry(ch).or_insert_with(|| zipf_for_frequency(per_billion));
        }

        Self { zipf }
    }

    /// The zipf value of `ch`, or [`ZIPF_FLOOR`] when it is not listed.
    pub fn get(&self, ch: char) -> f64 {
        self.zipf.get(&ch).copied().unwrap_or(ZIPF_FLOOR)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.zipf.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.zipf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zipf.is_empty()
    }
}

/// `log10` of a per-billion frequency, rounded to centi-zipf.
fn zipf_for_frequency(per_billion: u64) -> f64 {
    let value = log10(per_billion as f64);
    round(value * 100.0) / 100.0
}

/// The frequency corpus shipped with the crate.
///
/// The Chinese table covers both Simplified and Traditional characters; a
/// Traditional form is at least as frequent as its Simplified counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct BundledModel {
    zh: FrequencyTable,
    ja: FrequencyTable,
    ko: FrequencyTable,
}

impl BundledModel {
    /// Parses the embedded frequency lists.
    pub fn new() -> Self {
        Self {
            zh: FrequencyTable::from_frequency_text(ZH_COUNTS),
            ja: FrequencyTable::from_frequency_text(JA_COUNTS),
            ko: FrequencyTable::from_frequency_text(KO_COUNTS),
        }
    }

    pub fn table(&self, lang: Language) -> &FrequencyTable {
        match lang {
            Language::Chinese => &self.zh,
            Language::Japanese => &self.ja,
            Language::Korean => &self.ko,
        }
    }
}

impl Default for BundledModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyModel for BundledModel {
    fn zipf_frequency(&self, ch: char, lang: Language) -> f64 {
        self.table(lang).get(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table_parses_per_billion_counts() {
        let table = FrequencyTable::from_frequency_text("# comment 的\n甲 10000000\n乙 5000000\n\n丙 1000\n甲 1\n");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get('甲'), 7.0);
        assert_eq!(table.get('乙'), 6.7);
        assert_eq!(table.get('丙'), 3.0);
        assert!(!table.contains('的'));
    }

    #[test]
    fn test_frequency_table_skips_malformed_lines() {
        let table = FrequencyTable::from_frequency_text("甲\n乙 many\n丙丁 100\n戊 0\n己 100 extra\n庚 100\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('庚'), 2.0);
        assert_eq!(table.get('戊'), ZIPF_FLOOR);
    }

    #[test]
    fn test_bundled_model_common_characters() {
        let model = BundledModel::new();
        assert!(model.zipf_frequency('的', Language::Chinese) > 7.0);
        assert!(model.zipf_frequency('の', Language::Japanese) > 7.0);
        assert!(model.zipf_frequency('이', Language::Korean) > 7.0);
        assert!(model.zipf_frequency('测', Language::Chinese) > 4.5);
        assert!(model.zipf_frequency('テ', Language::Japanese) > 5.0);
    }

    #[test]
    fn test_bundled_model_has_everyday_greeting_characters() {
        let model = BundledModel::new();
        for ch in "欢迎光临".chars() {
            assert!(model.zipf_frequency(ch, Language::Chinese) > 4.5, "{}", ch);
        }
    }

    #[test]
    fn test_traditional_forms_are_as_frequent_as_simplified() {
        let model = BundledModel::new();
        for (traditional, simplified) in [('經', '经'), ('濟', '济'), ('報', '报'), ('導', '导'), ('測', '测'), ('試', '试'), ('資', '资')] {
            let t = model.zipf_frequency(traditional, Language::Chinese);
            let s = model.zipf_frequency(simplified, Language::Chinese);
            assert!(t >= s, "{} {} < {} {}", traditional, t, simplified, s);
            assert!(t > 4.5, "{}", traditional);
        }
    }

    #[test]
    fn test_bundled_tables_cover_thousands_of_characters() {
        let model = BundledModel::new();
        assert!(model.table(Language::Chinese).len() > 10_000);
        assert!(model.table(Language::Japanese).len() > 2_000);
        assert!(model.table(Language::Korean).len() > 1_000);
    }

    #[test]
    fn test_bundled_model_miss_is_floor() {
        let model = BundledModel::new();
        assert_eq!(model.zipf_frequency('A', Language::Chinese), ZIPF_FLOOR);
        assert_eq!(model.zipf_frequency('한', Language::Japanese), ZIPF_FLOOR);
        assert_eq!(model.zipf_frequency('の', Language::Korean), ZIPF_FLOOR);
    }
}
