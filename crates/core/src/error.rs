//! Error types for Scout operations.
//!
//! This module defines the main error type [`ScoutError`] which represents
//! every failure the enrichment pipeline, the local store and the export
//! formats can produce.
//!
//! # Example
//!
//! ```rust
//! use scout_core::{ScoutError, Result};
//!
//! fn require_url(url: &str) -> Result<&str> {
//!     if url.trim().is_empty() {
//!         return Err(ScoutError::Validation("URL is required".to_string()));
//!     }
//!     Ok(url)
//! }
//! ```

use thiserror::Error;

/// Main error type for enrichment, storage and export operations.
///
/// The HTTP endpoint collapses these into three user-facing messages; the
/// variants stay fine-grained so logs and the CLI can say what went wrong.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures and connection issues for both the
    /// target site and the LLM provider.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The target site answered with a non-success status.
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    /// The LLM provider API key is not configured.
    #[error("{var} is not configured on the server")]
    MissingApiKey { var: String },

    /// The LLM provider answered with a non-success status.
    #[error("Failed to call LLM API (status {status})")]
    LlmStatus { status: u16, body: String },

    /// The provider envelope did not carry any candidate text.
    #[error("LLM response is missing candidate text")]
    EmptyCompletion,

    /// The model text could not be parsed as JSON.
    #[error("LLM returned malformed JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The enrichment endpoint reported an error in its `{error}` body.
    #[error("Enrichment failed: {message}")]
    Endpoint { status: u16, message: String },

    /// User input rejected before any work was done.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist in the store.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// A stored blob exists but is not valid JSON for its key.
    #[error("Corrupt store entry '{key}': {source}")]
    CorruptEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of a value failed.
    #[error("Failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Data directory could not be determined.
    #[error("Could not determine a data directory; pass one explicitly")]
    NoDataDir,

    /// File read/write errors.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),

    /// CSV writer errors.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for ScoutError.
pub type Result<T> = std::result::Result<T, ScoutError>;
