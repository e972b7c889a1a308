//! HTTP enrichment endpoint.
//!
//! `POST /api/enrich` takes `{url}`, fetches the site, asks the LLM for a
//! structured summary and answers with the normalized enrichment. Every
//! failure is reported as `{error}` with one of a few fixed messages.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

pub use config::{ApiKeySource, ServerConfig};
pub use error::ApiError;
pub use router::build_router;
