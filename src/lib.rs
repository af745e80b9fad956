pub mod aggregate;
pub mod args;
pub mod export;
pub mod fetch;
pub mod history;
pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod sanitize;
pub mod stats;
pub mod stopwords;
pub mod structure;
pub mod textrank;
pub mod utils;

pub use args::Args;
pub use fetch::{Fetch, FetchConfig, HttpFetcher, RawPage};
pub use history::History;
pub use pipeline::{analyze, Analyzer};
pub use stats::{AnalysisResult, RankedKeyword};
pub use textrank::{PhraseRanker, TextRank};
