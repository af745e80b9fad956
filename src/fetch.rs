use std::time::{Duration, Instant};
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("pagelex/", env!("CARGO_PKG_VERSION"));

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("http status {0}")]
    Status(u16),
}

/// Raw markup of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub url: String,
    pub markup: String,
}

/// A source of page markup. Failures are reported as `None`; the reason is
/// the implementation's business.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Option<RawPage>;
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Parse and check that the URL is something we can GET.
pub fn validate_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(FetchError::UnsupportedScheme(other.to_string())),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(format!("{}: missing host", raw)));
    }
    Ok(url)
}

/// Resolve a link found on `base` (relative or absolute) to a fetchable URL.
pub fn resolve_link(base: &str, href: &str) -> Result<Url, FetchError> {
    let base = validate_url(base)?;
    let joined = base
        .join(href.trim())
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", href, e)))?;
    validate_url(joined.as_str())
}

/// Single blocking GET per page, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    pub fn try_fetch(&self, raw_url: &str) -> Result<RawPage, FetchError> {
        let url = validate_url(raw_url)?;
        let response = self.client.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let markup = response.text()?;
        Ok(RawPage {
            url: url.to_string(),
            markup,
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Option<RawPage> {
        let start_time = Instant::now();
        info!(action = "start", component = "fetch", url = url, "Fetching page");

        match self.try_fetch(url) {
            Ok(page) => {
                info!(
                    action = "complete",
                    component = "fetch",
                    url = url,
                    bytes = page.markup.len(),
                    duration_ms = start_time.elapsed().as_millis(),
                    "Page fetched"
                );
                Some(page)
            }
            Err(e) => {
                warn!(
                    action = "complete",
                    component = "fetch",
                    url = url,
                    error = %e,
                    duration_ms = start_time.elapsed().as_millis(),
                    "Fetch failed"
                );
                None
            }
        }
    }
}
