use scout_core::llm::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
use scout_core::{FetchConfig, LlmConfig, ScoutError};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Where the LLM API key comes from.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    /// Environment variable, read on every request.
    Env(String),
    /// Key fixed at startup.
    Fixed(String),
}

impl ApiKeySource {
    /// The key, or `None` when unset or blank.
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            ApiKeySource::Env(var) => std::env::var(var).ok(),
            ApiKeySource::Fixed(key) => Some(key.clone()),
        };
        key.filter(|k| !k.trim().is_empty())
    }
}

/// Server configuration.
///
/// Read from the environment:
///   GEMINI_API_KEY     - LLM API key (read at request time)
///   SCOUT_BIND_ADDR    - listen address (default: 127.0.0.1:3000)
///   SCOUT_LLM_BASE_URL - LLM REST base URL
///   SCOUT_LLM_MODEL    - LLM model name
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub api_key: ApiKeySource,
    pub llm_base_url: String,
    pub llm_model: String,
    pub fetch: FetchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            api_key: ApiKeySource::Env(API_KEY_ENV.to_string()),
            llm_base_url: DEFAULT_BASE_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env_or("SCOUT_BIND_ADDR", defaults.bind_addr),
            llm_base_url: env_or("SCOUT_LLM_BASE_URL", defaults.llm_base_url),
            llm_model: env_or("SCOUT_LLM_MODEL", defaults.llm_model),
            ..defaults
        }
    }

    /// LLM settings for one request. Fails if no API key is available.
    pub fn llm_config(&self) -> Result<LlmConfig, ScoutError> {
        let key = self
            .api_key
            .resolve()
            .ok_or_else(|| ScoutError::MissingApiKey { var: API_KEY_ENV.to_string() })?;
        Ok(LlmConfig::new(key).base_url(self.llm_base_url.as_str()).model(self.llm_model.as_str()))
    }
}

fn env_or(var: &str, default: String) -> String {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fixed_key_is_missing() {
        let config = ServerConfig { api_key: ApiKeySource::Fixed("  ".into()), ..Default::default() };
        let err = config.llm_config().unwrap_err();
        assert_eq!(err.to_string(), "GEMINI_API_KEY is not configured on the server");
    }

    #[test]
    fn test_llm_config_uses_overrides() {
        let config = ServerConfig {
            api_key: ApiKeySource::Fixed("k".into()),
            llm_base_url: "http://127.0.0.1:9/v1/".into(),
            llm_model: "tiny".into(),
            ..Default::default()
        };
        let llm = config.llm_config().unwrap();
        assert_eq!(llm.api_key, "k");
        assert_eq!(llm.base_url, "http://127.0.0.1:9/v1");
        assert_eq!(llm.model, "tiny");
    }

    #[test]
    fn test_unset_env_key_is_missing() {
        let source = ApiKeySource::Env("SCOUT_TEST_KEY_THAT_IS_NEVER_SET".into());
        assert_eq!(source.resolve(), None);
    }
}
