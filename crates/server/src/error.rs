use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scout_core::ScoutError;
use scout_core::client::ErrorBody;

/// Endpoint failure, rendered as `{error}`.
///
/// Clients only ever see the fixed messages below; the underlying cause is
/// logged.
#[derive(Debug)]
pub enum ApiError {
    /// The body had no usable `url`.
    MissingUrl,
    /// The target site could not be fetched.
    Fetch { url: String, source: ScoutError },
    /// The server has no LLM API key.
    Config(ScoutError),
    /// Anything after the fetch: provider call, parsing, normalization.
    Internal(ScoutError),
}

impl From<ScoutError> for ApiError {
    fn from(err: ScoutError) -> Self {
        match err {
            ScoutError::MissingApiKey { .. } => ApiError::Config(err),
            _ => ApiError::Internal(err),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::MissingUrl => "URL is required".to_string(),
            ApiError::Fetch { url, .. } => format!("Failed to extract website content from {}", url),
            ApiError::Config(err) => err.to_string(),
            ApiError::Internal(_) => "Internal server error during enrichment".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MissingUrl => tracing::debug!("rejected enrich request without url"),
            ApiError::Fetch { url, source } => tracing::warn!(%url, error = %source, "website fetch failed"),
            ApiError::Config(err) => tracing::error!(error = %err, "LLM API key missing"),
            ApiError::Internal(err) => tracing::error!(error = ?err, "enrichment failed"),
        }
        (self.status(), Json(ErrorBody { error: self.message() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_maps_to_config() {
        let err = ApiError::from(ScoutError::MissingApiKey { var: "GEMINI_API_KEY".into() });
        assert!(matches!(err, ApiError::Config(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "GEMINI_API_KEY is not configured on the server");
    }

    #[test]
    fn test_internal_hides_cause() {
        let err = ApiError::from(ScoutError::EmptyCompletion);
        assert_eq!(err.message(), "Internal server error during enrichment");
    }

    #[test]
    fn test_missing_url_is_bad_request() {
        assert_eq!(ApiError::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingUrl.message(), "URL is required");
    }
}
