use rustc_hash::FxHashMap;

/// Occurrence counts in first-seen order.
pub fn count_in_order(tokens: &[String]) -> Vec<(&str, usize)> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()).copied() {
            Some(i) => counts[i].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    counts
}

/// Distinct tokens seen at least twice, in first-seen order.
pub fn repeated_words(tokens: &[String]) -> Vec<String> {
    count_in_order(tokens)
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(token, _)| token.to_string())
        .collect()
}

/// Adjacent pairs joined by a single space. No deduplication.
pub fn bigrams(tokens: &[String]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

/// Repeated stems and bigrams of a token stream.
pub fn aggregate(tokens: &[String]) -> (Vec<String>, Vec<String>) {
    (repeated_words(tokens), bigrams(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_repeated_first_seen_order() {
        let tokens = toks(&["b", "a", "c", "a", "b", "a"]);
        assert_eq!(repeated_words(&tokens), vec!["b", "a"]);
        assert_eq!(count_in_order(&tokens), vec![("b", 2), ("a", 3), ("c", 1)]);
    }

    #[test]
    fn test_bigrams() {
        let tokens = toks(&["test", "test", "foo"]);
        assert_eq!(bigrams(&tokens), vec!["test test", "test foo"]);
    }

    #[test]
    fn test_short_streams() {
        assert!(bigrams(&[]).is_empty());
        assert!(bigrams(&toks(&["solo"])).is_empty());
        assert_eq!(aggregate(&[]), (Vec::new(), Vec::new()));
    }
}
