//! Raw set endpoints.

use kotoba_core::requests::RegisterSetRequest;
use kotoba_core::responses::{MessageResponse, SetStatistics};

use crate::error::ClientError;
use crate::http::check_response;
use crate::ApiClient;

impl ApiClient {
    /// Registered set keys in numeric order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn list_sets(&self) -> Result<Vec<String>, ClientError> {
        let resp = check_response(self.http.get(self.url("/api/wordsets")).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Per-set count of words answered at most `threshold` times.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn set_statistics(&self, threshold: u32) -> Result<SetStatistics, ClientError> {
        let url = self.url(&format!("/api/wordsets?threshold={threshold}"));
        let resp = check_response(self.http.get(url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a blank term.
    pub async fn search_sets(&self, term: &str) -> Result<Vec<String>, ClientError> {
        let url = self.url(&format!(
            "/api/wordsets/search?q={}",
            urlencoding::encode(term)
        ));
        let resp = check_response(self.http.get(url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or blank input.
    pub async fn register_set(
        &self,
        key: &str,
        content: &str,
    ) -> Result<MessageResponse, ClientError> {
        let request = RegisterSetRequest {
            key: key.to_string(),
            content: content.to_string(),
        };
        let resp = self
            .http
            .post(self.url("/api/wordsets"))
            .json(&request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }
}
