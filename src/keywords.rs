use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

use crate::stats::RankedKeyword;
use crate::textrank::PhraseRanker;

/// Rank candidate phrases from `text` and count them against `tokens`.
///
/// A phrase's count is the number of tokens literally equal to it. Phrases
/// come from the unstemmed text while `tokens` holds stems, so multi-word
/// phrases and words the stemmer changes count as 0.
pub fn extract_keywords<R: PhraseRanker + ?Sized>(
    text: &str,
    tokens: &[String],
    ranker: &R,
) -> (Vec<RankedKeyword>, BTreeMap<String, usize>) {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let candidates: Vec<String> = ranker
        .rank(text)
        .into_iter()
        .filter(|phrase| !phrase.is_empty() && seen.insert(phrase.clone()))
        .collect();

    let mut ranked: Vec<RankedKeyword> = candidates
        .into_iter()
        .map(|phrase| {
            let count = tokens.iter().filter(|token| **token == phrase).count();
            RankedKeyword { phrase, count }
        })
        .collect();
    // stable: ties keep ranker order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let counts = ranked
        .iter()
        .map(|k| (k.phrase.clone(), k.count))
        .collect();

    (ranked, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRanker(Vec<&'static str>);

    impl PhraseRanker for FixedRanker {
        fn rank(&self, _text: &str) -> Vec<String> {
            self.0.iter().map(|p| p.to_string()).collect()
        }
    }

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_sorted_by_count_with_stable_ties() {
        let ranker = FixedRanker(vec!["foo", "test", "bar", "baz"]);
        let tokens = toks(&["test", "bar", "test", "baz", "bar", "test"]);

        let (ranked, counts) = extract_keywords("", &tokens, &ranker);
        let order: Vec<(&str, usize)> = ranked.iter().map(|k| (k.phrase.as_str(), k.count)).collect();

        assert_eq!(order, vec![("test", 3), ("bar", 2), ("baz", 1), ("foo", 0)]);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts["foo"], 0);
    }

    #[test]
    fn test_duplicate_candidates_collapse() {
        let ranker = FixedRanker(vec!["test", "test", "", "foo"]);
        let (ranked, counts) = extract_keywords("", &toks(&["test"]), &ranker);

        assert_eq!(ranked.len(), 2);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_unstemmed_phrase_counts_zero() {
        // the stream holds "run"/"shoe", the ranker reports surface words
        let ranker = FixedRanker(vec!["running shoes", "running", "run"]);
        let tokens = toks(&["run", "shoe", "run"]);

        let (ranked, counts) = extract_keywords("running shoes running", &tokens, &ranker);

        assert_eq!(counts["running shoes"], 0);
        assert_eq!(counts["running"], 0);
        assert_eq!(counts["run"], 2);
        assert_eq!(ranked[0].phrase, "run");
    }

    #[test]
    fn test_no_candidates() {
        let (ranked, counts) = extract_keywords("", &[], &FixedRanker(Vec::new()));
        assert!(ranked.is_empty());
        assert!(counts.is_empty());
    }
}
