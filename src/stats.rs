use serde::Serialize;
use std::collections::BTreeMap;

/// A candidate phrase and how often it occurs in the stem stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedKeyword {
    pub phrase: String,
    pub count: usize,
}

/// Everything derived from one page. All fields are empty when the page
/// could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Keyword phrases, most frequent first
    pub ranked_keywords: Vec<RankedKeyword>,
    /// Stems occurring more than once, first-seen order
    pub repeated_words: Vec<String>,
    pub bigrams: Vec<String>,
    /// `h1`-`h6` texts
    pub titles: Vec<String>,
    /// Phrase -> count, keyed in phrase order so serialized output is stable
    pub keyword_counts: BTreeMap<String, usize>,
    /// `href`s inside `<header>` regions
    pub header_links: Vec<String>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// The first `n` ranked keywords.
    pub fn top_keywords(&self, n: usize) -> &[RankedKeyword] {
        &self.ranked_keywords[..n.min(self.ranked_keywords.len())]
    }
}
