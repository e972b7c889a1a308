use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use scout_core::{EnrichmentData, Enricher, GeminiClient, fetch_url};
use serde_json::{Value, json};

use crate::config::ServerConfig;
use crate::error::ApiError;

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/enrich`
///
/// The body is parsed as JSON whatever its `Content-Type`. Fetch happens
/// before the API key is checked, so an unreachable site is reported as a
/// fetch failure even on a server without a key.
pub async fn enrich(State(config): State<Arc<ServerConfig>>, body: Bytes) -> Result<Json<EnrichmentData>, ApiError> {
    let url = requested_url(&body).ok_or(ApiError::MissingUrl)?;
    tracing::info!(%url, "enrich request");

    let html = fetch_url(&url, &config.fetch)
        .await
        .map_err(|source| ApiError::Fetch { url: url.clone(), source })?;

    let llm = config.llm_config()?;
    let normalized = Enricher::new(GeminiClient::new(llm)).enrich_html(&url, &html).await?;

    Ok(Json(normalized.data))
}

/// A non-empty string `url` from a JSON object body.
fn requested_url(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}
