//! Website fetching for enrichment.
//!
//! This module retrieves the raw HTML of a company site. It performs a single
//! GET with a browser user agent and a fixed timeout; there is no retry and no
//! partial-content fallback.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{Result, ScoutError};

/// Desktop browser user agent sent to target sites to avoid naive bot blocks.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client configuration for fetching company websites.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 15, user_agent: BROWSER_USER_AGENT.to_string() }
    }
}

/// Fetches HTML content from a URL.
///
/// Returns the response body as text. Non-success statuses are errors: the
/// body of a 404 page is never treated as company content.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| ScoutError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(ScoutError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http or https",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ScoutError::HttpError)?;

    debug!(%url, timeout = config.timeout, "fetching website");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| timeout_or_http(e, config.timeout))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScoutError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content = response.text().await.map_err(|e| timeout_or_http(e, config.timeout))?;
    debug!(%url, bytes = content.len(), "fetched website");

    Ok(content)
}

fn timeout_or_http(err: reqwest::Error, timeout: u64) -> ScoutError {
    if err.is_timeout() { ScoutError::Timeout { timeout } } else { ScoutError::HttpError(err) }
}
