use std::time::Instant;
use tracing::{info, warn};

use crate::aggregate::aggregate;
use crate::fetch::{resolve_link, Fetch, FetchConfig, HttpFetcher};
use crate::keywords::extract_keywords;
use crate::normalize::Normalizer;
use crate::sanitize::sanitize;
use crate::stats::AnalysisResult;
use crate::stopwords::StopwordFilter;
use crate::structure::extract_structure;
use crate::textrank::{PhraseRanker, TextRank};

/// Fetch → sanitize → normalize → aggregate → rank, plus structure from the
/// raw markup. Holds no mutable state; one instance may serve any number of
/// calls.
#[derive(Debug)]
pub struct Analyzer<F, R = TextRank> {
    fetcher: F,
    normalizer: Normalizer,
    ranker: R,
}

impl<F: Fetch> Analyzer<F, TextRank> {
    /// Fixed English stopwords, TextRank ranking.
    pub fn new(fetcher: F) -> Self {
        Self::with_stopwords(fetcher, StopwordFilter::english())
    }

    pub fn with_stopwords(fetcher: F, stopwords: StopwordFilter) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(stopwords.clone()),
            ranker: TextRank::new(stopwords),
        }
    }
}

impl<F: Fetch, R: PhraseRanker> Analyzer<F, R> {
    pub fn with_ranker(fetcher: F, normalizer: Normalizer, ranker: R) -> Self {
        Self {
            fetcher,
            normalizer,
            ranker,
        }
    }

    /// All-empty result when the page cannot be fetched.
    pub fn analyze(&self, url: &str) -> AnalysisResult {
        let Some(page) = self.fetcher.fetch(url) else {
            info!(action = "skip", component = "pipeline", url = url, "No page, returning empty analysis");
            return AnalysisResult::default();
        };
        self.analyze_markup(&page.markup)
    }

    /// Analyze a link taken from `page_url`, typically one of its
    /// `header_links`. Relative hrefs resolve against the page URL; a link
    /// that cannot be resolved gives the empty result.
    pub fn analyze_subpage(&self, page_url: &str, href: &str) -> AnalysisResult {
        match resolve_link(page_url, href) {
            Ok(url) => self.analyze(url.as_str()),
            Err(e) => {
                warn!(action = "resolve", component = "pipeline", href = href, error = %e, "Cannot resolve link");
                AnalysisResult::default()
            }
        }
    }

    /// The post-fetch stages over markup already in hand.
    pub fn analyze_markup(&self, markup: &str) -> AnalysisResult {
        let start_time = Instant::now();

        let text = sanitize(markup);
        let tokens = self.normalizer.normalize(&text);
        let (repeated_words, bigrams) = aggregate(&tokens);
        let (ranked_keywords, keyword_counts) = extract_keywords(&text, &tokens, &self.ranker);
        let structure = extract_structure(markup);

        info!(
            action = "complete",
            component = "pipeline",
            tokens = tokens.len(),
            keywords = ranked_keywords.len(),
            titles = structure.titles.len(),
            header_links = structure.header_links.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Analysis completed"
        );

        AnalysisResult {
            ranked_keywords,
            repeated_words,
            bigrams,
            titles: structure.titles,
            keyword_counts,
            header_links: structure.header_links,
        }
    }
}

/// Analyze `url` over HTTP with default settings.
pub fn analyze(url: &str) -> AnalysisResult {
    match HttpFetcher::new(&FetchConfig::default()) {
        Ok(fetcher) => Analyzer::new(fetcher).analyze(url),
        Err(e) => {
            warn!(action = "configure", component = "fetch", error = %e, "Could not build HTTP client");
            AnalysisResult::default()
        }
    }
}
