use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;
use std::sync::OnceLock;

use crate::stopwords::StopwordFilter;

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").unwrap())
}

/// Lowercase and split text into word tokens, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Turns sanitized text into the stemmed, stopword-free token stream.
pub struct Normalizer {
    stopwords: StopwordFilter,
    stemmer: Stemmer,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl Normalizer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.is_stopword(token)
    }

    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }

    /// Lowercase, tokenize, drop stopwords, stem. Output order follows the text.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|token| !self.is_stopword(token))
            .map(|token| self.stem(&token))
            .collect()
    }
}

/// [`Normalizer::normalize`] with the fixed English stopword set.
pub fn normalize(text: &str) -> Vec<String> {
    Normalizer::default().normalize(text)
}
