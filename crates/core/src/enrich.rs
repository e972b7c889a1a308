//! The enrichment pipeline.
//!
//! One linear pass per request: fetch the site, extract text, build the
//! prompt, call the provider, normalize. The two network calls run strictly
//! in sequence and nothing is retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use scout_core::{Enricher, GeminiClient, LlmConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> scout_core::Result<()> {
//! let enricher = Enricher::new(GeminiClient::new(LlmConfig::from_env()?));
//! let data = enricher.enrich("https://example.com").await?;
//! println!("{}", data.summary);
//! # Ok(())
//! # }
//! ```

use tracing::{info, warn};

use crate::Result;
use crate::extract::{ExtractConfig, extract_text};
use crate::fetch::{FetchConfig, fetch_url};
use crate::llm::LlmProvider;
use crate::model::EnrichmentData;
use crate::normalize::{Normalized, normalize_response};
use crate::prompt::build_prompt;

/// Runs the enrichment workflow against one [`LlmProvider`].
#[derive(Debug, Clone)]
pub struct Enricher<P> {
    provider: P,
    fetch: FetchConfig,
    extract: ExtractConfig,
}

impl<P: LlmProvider> Enricher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, fetch: FetchConfig::default(), extract: ExtractConfig::default() }
    }

    pub fn with_fetch_config(mut self, config: FetchConfig) -> Self {
        self.fetch = config;
        self
    }

    pub fn with_extract_config(mut self, config: ExtractConfig) -> Self {
        self.extract = config;
        self
    }

    pub fn fetch_config(&self) -> &FetchConfig {
        &self.fetch
    }

    /// Fetches `url` and enriches its content.
    pub async fn enrich(&self, url: &str) -> Result<EnrichmentData> {
        let html = fetch_url(url, &self.fetch).await?;
        Ok(self.enrich_html(url, &html).await?.data)
    }

    /// Enriches already-fetched HTML attributed to `url`.
    pub async fn enrich_html(&self, url: &str, html: &str) -> Result<Normalized> {
        let text = extract_text(html, &self.extract);
        info!(%url, chars = text.chars().count(), "extracted website text");

        let prompt = build_prompt(url, &text);
        let raw = self.provider.generate(&prompt).await?;
        let normalized = normalize_response(&raw, url)?;

        if !normalized.is_complete() {
            let fields: Vec<&str> = normalized.defaulted.iter().map(|f| f.key()).collect();
            warn!(%url, ?fields, "LLM response missing fields, defaults applied");
        }

        Ok(normalized)
    }
}
