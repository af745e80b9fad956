//! TextRank keyword extraction
//!
//! Words of the text become graph nodes by their stem, adjacent words are
//! linked, PageRank scores the stems and the best fifth of them are kept.
//! Every surface word that stems to a kept node is a keyword, and runs of
//! keywords that sit next to each other in the text are merged into phrases.

pub mod graph;
pub mod pagerank;

use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use tracing::debug;

use crate::normalize::{tokenize, Normalizer};
use crate::stopwords::StopwordFilter;
use graph::WordGraph;
use pagerank::PageRank;

/// Extractive phrase ranking: text in, candidate phrases out.
///
/// Implementations must return an empty list rather than fail on short or
/// empty input.
pub trait PhraseRanker {
    fn rank(&self, text: &str) -> Vec<String>;
}

#[derive(Debug)]
pub struct TextRank {
    normalizer: Normalizer,
    pagerank: PageRank,
    /// Fraction of graph nodes kept as keywords
    ratio: f64,
}

impl Default for TextRank {
    fn default() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl TextRank {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            normalizer: Normalizer::new(stopwords),
            pagerank: PageRank::default(),
            ratio: 0.2,
        }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_pagerank(mut self, pagerank: PageRank) -> Self {
        self.pagerank = pagerank;
        self
    }

    /// Keyword words with the score of their stem.
    fn keyword_scores(&self, words: &[String]) -> FxHashMap<String, f64> {
        let lemmas: Vec<Option<String>> = words
            .iter()
            .map(|w| (!self.normalizer.is_stopword(w)).then(|| self.normalizer.stem(w)))
            .collect();

        let graph = WordGraph::from_adjacent(&lemmas);
        let result = self.pagerank.run(&graph);
        debug!(
            action = "rank",
            component = "textrank",
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            iterations = result.iterations,
            converged = result.converged,
            "PageRank finished"
        );

        let mut ranked: Vec<(u32, f64)> = result
            .scores
            .iter()
            .enumerate()
            .map(|(id, &score)| (id as u32, score))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate((graph.node_count() as f64 * self.ratio) as usize);

        let kept: FxHashMap<&str, f64> = ranked
            .iter()
            .filter_map(|&(id, score)| graph.lemma(id).map(|lemma| (lemma, score)))
            .collect();

        words
            .iter()
            .zip(lemmas.iter())
            .filter_map(|(word, lemma)| {
                let score = kept.get(lemma.as_deref()?)?;
                Some((word.clone(), *score))
            })
            .collect()
    }
}

/// Merge runs of adjacent keywords. A word is used by at most one phrase and
/// never repeats inside a phrase.
fn combine_keywords(words: &[String], scores: &FxHashMap<String, f64>) -> Vec<String> {
    let mut available: FxHashSet<&str> = scores.keys().map(String::as_str).collect();
    let mut phrases = Vec::new();
    let mut i = 0;

    while i < words.len() {
        if !available.contains(words[i].as_str()) {
            i += 1;
            continue;
        }

        let mut run: Vec<&str> = vec![words[i].as_str()];
        let mut j = i + 1;
        while let Some(next) = words.get(j).map(String::as_str) {
            if !available.contains(next) || run.contains(&next) {
                break;
            }
            run.push(next);
            j += 1;
        }

        for word in &run {
            available.remove(word);
        }
        phrases.push(run.join(" "));
        i = j;
    }

    phrases
}

fn mean_score(phrase: &str, scores: &FxHashMap<String, f64>) -> f64 {
    let words: Vec<&str> = phrase.split(' ').collect();
    let total: f64 = words.iter().filter_map(|w| scores.get(*w)).sum();
    total / words.len() as f64
}

impl PhraseRanker for TextRank {
    fn rank(&self, text: &str) -> Vec<String> {
        let words = tokenize(text);
        let scores = self.keyword_scores(&words);
        if scores.is_empty() {
            return Vec::new();
        }

        let mut phrases = combine_keywords(&words, &scores);
        phrases.sort_by(|a, b| {
            mean_score(b, &scores)
                .partial_cmp(&mean_score(a, &scores))
                .unwrap_or(Ordering::Equal)
        });
        phrases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Compatibility of systems of linear constraints over the set of natural numbers. \
        Criteria of compatibility of a system of linear Diophantine equations, strict inequations, \
        and nonstrict inequations are considered. Upper bounds for components of a minimal set of \
        solutions and algorithms of construction of minimal generating sets of solutions for all \
        types of systems are given. These criteria and the corresponding algorithms for \
        constructing a minimal supporting set of solutions can be used in solving all the \
        considered types of systems and systems of mixed types.";

    #[test]
    fn test_empty_and_short_text() {
        let ranker = TextRank::default();

        assert!(ranker.rank("").is_empty());
        assert!(ranker.rank("   ").is_empty());
        assert!(ranker.rank("word").is_empty());
        assert!(ranker.rank("the and of").is_empty());
    }

    #[test]
    fn test_extracts_lowercase_phrases() {
        let phrases = TextRank::default().rank(SAMPLE);

        assert!(!phrases.is_empty());
        for phrase in &phrases {
            assert_eq!(phrase, &phrase.to_lowercase());
            assert!(!phrase.is_empty());
        }
    }

    #[test]
    fn test_adjacent_keywords_form_phrases() {
        let phrases = TextRank::default().with_ratio(1.0).rank(SAMPLE);

        assert!(phrases.contains(&"linear constraints".to_string()));
        // stopwords separate phrases
        assert!(phrases.iter().all(|p| !p.split(' ').any(|w| w == "of")));
    }

    #[test]
    fn test_phrases_are_unique_and_deterministic() {
        let ranker = TextRank::default();
        let first = ranker.rank(SAMPLE);
        let second = ranker.rank(SAMPLE);

        assert_eq!(first, second);
        let unique: FxHashSet<&String> = first.iter().collect();
        assert_eq!(unique.len(), first.len());
    }

    #[test]
    fn test_combine_keywords_merges_adjacent_runs() {
        let words: Vec<String> = "linear diophantine equations and linear systems"
            .split(' ')
            .map(str::to_string)
            .collect();
        let mut scores = FxHashMap::default();
        scores.insert("linear".to_string(), 0.3);
        scores.insert("diophantine".to_string(), 0.2);
        scores.insert("systems".to_string(), 0.1);

        assert_eq!(
            combine_keywords(&words, &scores),
            vec!["linear diophantine".to_string(), "systems".to_string()]
        );
    }

    #[test]
    fn test_custom_pagerank() {
        let pagerank = PageRank::new().with_damping(0.5).with_max_iterations(5);
        let ranker = TextRank::default().with_pagerank(pagerank);
        let phrases = ranker.rank(SAMPLE);

        assert!(!phrases.is_empty());
        assert_eq!(phrases, ranker.rank(SAMPLE));
    }

    #[test]
    fn test_ratio_controls_keyword_count() {
        let few = TextRank::default().with_ratio(0.05).rank(SAMPLE);
        let many = TextRank::default().with_ratio(1.0).rank(SAMPLE);

        let words = |phrases: &[String]| phrases.iter().map(|p| p.split(' ').count()).sum::<usize>();
        assert!(words(&many) > words(&few));
    }
}
