//! HTTP client configuration

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Base URL of the public heroes service.
pub const DEFAULT_BASE_URL: &str = "https://crud-heroes-service.vercel.app/api";

/// Connection settings for [`HttpHeroesApi`](crate::HttpHeroesApi).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL the `/heroes` paths are appended to.
    pub base_url: String,
    /// Whole-request timeout in seconds. `None` keeps reqwest's default (no timeout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL without trailing slashes.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// 创建 HTTP Client
pub fn create_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().map_err(|e| ApiError::InvalidConfig {
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn trailing_slashes_are_ignored() {
        let config = ClientConfig::with_base_url("http://localhost:3000/api//");
        assert_eq!(config.normalized_base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn deserializes_camel_case() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"baseUrl":"http://x","timeoutSecs":5}"#).unwrap_or_default();
        assert_eq!(config.base_url, "http://x");
        assert_eq!(config.timeout_secs, Some(5));
    }
}
