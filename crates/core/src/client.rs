//! Client for a running enrichment endpoint (`POST /api/enrich`).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::EnrichmentData;
use crate::{Result, ScoutError};

/// Request body of `POST /api/enrich`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnrichRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Error body returned by the endpoint on any failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Calls the enrichment endpoint hosted at `base`.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    client: Client,
    endpoint: Url,
}

impl EndpointClient {
    /// `base` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| ScoutError::InvalidUrl(e.to_string()))?;
        let endpoint = base.join("/api/enrich").map_err(|e| ScoutError::InvalidUrl(e.to_string()))?;
        Ok(Self { client: Client::new(), endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Requests enrichment of `url`.
    ///
    /// A non-success answer becomes [`ScoutError::Endpoint`] carrying the
    /// server's `error` message, or a generic one if the body has none.
    pub async fn enrich(&self, url: &str) -> Result<EnrichmentData> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&EnrichRequest { url: Some(url.to_string()) })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Enrichment failed".to_string());
            return Err(ScoutError::Endpoint { status: status.as_u16(), message });
        }

        Ok(response.json().await?)
    }
}
