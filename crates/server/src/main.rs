//! scout-server: enrichment endpoint for the Scout research tools.
//!
//! Reads config from env vars:
//!   GEMINI_API_KEY     - LLM API key (checked per request)
//!   SCOUT_BIND_ADDR    - listen address (default: 127.0.0.1:3000)
//!   SCOUT_LLM_BASE_URL - override the LLM REST base URL
//!   SCOUT_LLM_MODEL    - override the LLM model

use std::sync::Arc;

use scout_server::{ServerConfig, build_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scout_server=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    if config.llm_config().is_err() {
        tracing::warn!("GEMINI_API_KEY is not set; enrich requests will fail until it is");
    }
    tracing::info!(model = %config.llm_model, base_url = %config.llm_base_url, "LLM provider configured");

    let app = build_router(Arc::new(config));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {bind_addr}: {e}"));
    tracing::info!("scout-server listening on {bind_addr}");

    axum::serve(listener, app).await.expect("server error");
}
