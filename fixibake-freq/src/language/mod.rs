// fixibake-freq/src/language/mod.rs
use core::fmt;

/// The languages a frequency model can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Chinese,
    Japanese,
    Korean,
}

impl Language {
    /// Every supported language, in the order scores are reported.
    pub const ALL: [Language; 3] = [Language::Chinese, Language::Japanese, Language::Korean];

    /// The short language tag (`zh`, `ja`, `ko`).
    pub fn tag(self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
