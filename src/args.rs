use clap::Parser;
use std::path::PathBuf;

use crate::fetch::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

#[derive(Parser, Debug)]
#[command(
    name = "pagelex",
    about = "Fetch a web page and report its keywords, repeated words, bi-grams, headings and header links",
    version,
    long_about = None
)]
pub struct Args {
    /// URL of the page to analyze
    pub url: String,

    /// Analyze this link from the page instead, e.g. one of its header links.
    /// Relative links resolve against URL
    #[arg(short, long, value_name = "HREF")]
    pub link: Option<String>,

    /// Number of top keywords to display and export
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,

    /// Write the analysis to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Print the analysis as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// File holding recently analyzed URLs, updated after each run
    #[arg(long, value_name = "FILE", env = "PAGELEX_HISTORY")]
    pub history: Option<PathBuf>,

    /// Extra stopwords, one per line
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, env = "PAGELEX_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User-Agent header sent with the request
    #[arg(long, env = "PAGELEX_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
