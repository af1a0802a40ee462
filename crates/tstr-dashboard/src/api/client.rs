use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use tstr_core::config::BackendConfig;

use crate::errors::FetchError;

/// Client for the tstr backend's read-only JSON API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::from_reqwest(base_url, e))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, FetchError> {
        Self::new(config.base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// - `Transport` / `Timeout` when no response arrives
    /// - `Status` for any non-2xx status
    /// - `Decode` when the body is not the expected JSON shape
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);

        debug!(event = "dashboard.api.request_started", url = %url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&url, e))?
            .error_for_status()
            .map_err(|e| FetchError::from_reqwest(&url, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(&url, e))?;

        let decoded = serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        debug!(
            event = "dashboard.api.request_completed",
            url = %url,
            bytes = body.len()
        );

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url("/api/bench/results"),
            "http://localhost:8080/api/bench/results"
        );
    }

    #[test]
    fn test_from_config_uses_defaults() {
        let client = ApiClient::from_config(&BackendConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
