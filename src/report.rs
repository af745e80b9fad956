use crate::history::History;
use crate::stats::{AnalysisResult, RankedKeyword};
use crate::utils::format_number;

/// Items printed per list section before eliding the rest.
const SECTION_LIMIT: usize = 25;

fn print_list(title: &str, items: &[String]) {
    println!("\n{} ({}):", title, format_number(items.len()));
    for item in items.iter().take(SECTION_LIMIT) {
        println!("- {}", item);
    }
    if items.len() > SECTION_LIMIT {
        println!("  ... and {} more", format_number(items.len() - SECTION_LIMIT));
    }
}

/// `phrase: count` lines, ranked order.
pub fn keyword_lines(keywords: &[RankedKeyword]) -> Vec<String> {
    keywords
        .iter()
        .map(|keyword| format!("{}: {}", keyword.phrase, format_number(keyword.count)))
        .collect()
}

pub fn print_analysis_results(url: &str, result: &AnalysisResult, top: usize, history: Option<&History>) {
    println!("\n--- Page Analysis: {} ---", url);

    if result.is_empty() {
        println!("No content could be analyzed for this URL.");
    } else {
        let top_keywords = result.top_keywords(top);
        println!("\nTop {} keywords:", top_keywords.len());
        for line in keyword_lines(top_keywords) {
            println!("- {}", line);
        }

        print_list("All keywords", &keyword_lines(&result.ranked_keywords));
        print_list("Titles", &result.titles);
        print_list("Header links", &result.header_links);
        print_list("Repeatable words", &result.repeated_words);
        print_list("Bi-grams", &result.bigrams);
    }

    if let Some(history) = history.filter(|h| !h.is_empty()) {
        println!("\nRecent URLs:");
        for url in history.urls().iter().rev() {
            println!("- {}", url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lines_keep_rank_order() {
        let keywords = vec![
            RankedKeyword { phrase: "trail".into(), count: 1200 },
            RankedKeyword { phrase: "trail shoes".into(), count: 0 },
        ];

        assert_eq!(keyword_lines(&keywords), vec!["trail: 1,200", "trail shoes: 0"]);
        assert!(keyword_lines(&[]).is_empty());
    }
}
