use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub const HISTORY_LIMIT: usize = 10;

/// Recently analyzed URLs, oldest first. The caller owns it and decides where
/// it lives between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    urls: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the last [`HISTORY_LIMIT`] entries, dropping blanks and repeats.
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        urls.into_iter()
            .fold(Self::new(), |history, url| history.record(url.as_ref()))
    }

    /// Append `url` unless it is already present, then trim to the limit.
    /// A repeated URL keeps its old position.
    pub fn record(mut self, url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() || self.contains(url) {
            return self;
        }
        self.urls.push(url.to_string());
        if self.urls.len() > HISTORY_LIMIT {
            let excess = self.urls.len() - HISTORY_LIMIT;
            self.urls.drain(..excess);
        }
        self
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// One URL per line.
    pub fn parse(content: &str) -> Self {
        Self::from_urls(content.lines())
    }

    pub fn to_text(&self) -> String {
        let mut out = self.urls.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// A missing file is an empty history.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(action = "load", component = "history", file_path = ?path, "No history file yet");
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read history file {:?}", path))?;
        let history = Self::parse(&content);
        info!(action = "loaded", component = "history", file_path = ?path, entries = history.len(), "Loaded history");
        Ok(history)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_text())
            .with_context(|| format!("Failed to write history file {:?}", path))?;
        info!(action = "saved", component = "history", file_path = ?path, entries = self.len(), "Saved history");
        Ok(())
    }
}
