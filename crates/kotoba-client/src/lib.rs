//! # kotoba-client
//!
//! Typed HTTP client for the Kotoba API, plus the study-session state the
//! CLI drives.
//!
//! [`ApiClient`] maps one method to each endpoint. [`StudyState`] holds the
//! locally loaded progress document and computes counter changes;
//! [`StudyController`] ties the two together.

pub mod controller;
mod error;
mod http;
pub mod progress;
pub mod state;
pub mod word_sets;
pub mod words;

pub use controller::StudyController;
pub use error::ClientError;
pub use state::StudyState;

use std::time::Duration;

use kotoba_config::ClientConfig;
use kotoba_core::responses::HealthResponse;

use crate::http::check_response;

/// HTTP client bound to one Kotoba server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("kotoba/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server is unreachable or unhealthy.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let resp = check_response(self.http.get(self.url("/healthz")).send().await?).await?;
        Ok(resp.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig {
            base_url: "http://localhost:3000/".into(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/userdata"), "http://localhost:3000/api/userdata");
    }
}
