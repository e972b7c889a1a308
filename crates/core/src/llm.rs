//! Generative-language provider client.
//!
//! [`LlmProvider`] is the seam the enrichment pipeline calls; [`GeminiClient`]
//! implements it against the `generateContent` REST endpoint and asks for a
//! JSON-typed answer.

use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{Result, ScoutError};

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default REST base for the provider.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Anything that turns a prompt into model text.
pub trait LlmProvider {
    /// Sends `prompt` and returns the raw text of the first candidate.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Provider endpoint configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// REST base URL, without trailing slash.
    pub base_url: String,
    /// Model name.
    pub model: String,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: DEFAULT_BASE_URL.to_string(), model: DEFAULT_MODEL.to_string() }
    }

    /// Reads the API key from [`API_KEY_ENV`].
    ///
    /// An unset or blank variable is a configuration error.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ScoutError::MissingApiKey { var: API_KEY_ENV.to_string() }),
        }
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = value.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.model = value.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates.into_iter().next()?.content?.parts.into_iter().next()?.text
    }
}

/// REST client for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: LlmConfig,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self { client: Client::new(), config }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

impl LlmProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt }] }],
            generation_config: GenerationConfig { response_mime_type: "application/json" },
        };

        debug!(model = %self.config.model, prompt_chars = prompt.len(), "calling LLM provider");

        let response = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "LLM provider error");
            return Err(ScoutError::LlmStatus { status: status.as_u16(), body });
        }

        let envelope: GenerateResponse = response.json().await?;
        envelope.first_text().ok_or(ScoutError::EmptyCompletion)
    }
}
