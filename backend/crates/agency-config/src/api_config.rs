use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL};

use serde::Deserialize;

/// Where the backend lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every request path is appended to (e.g. "http://localhost:7060")
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Only plain `http://` URLs are accepted; reqwest is built without a TLS backend.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();

        if url.is_empty() {
            return Err(ConfigError::api("api.base_url must not be empty"));
        }

        if url.starts_with("https://") {
            return Err(ConfigError::api(format!(
                "api.base_url uses https://, but the client is built without TLS support (got '{}')",
                self.base_url
            )));
        }

        if !url.starts_with("http://") {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// (got '{}')",
                self.base_url
            )));
        }

        Ok(())
    }
}
