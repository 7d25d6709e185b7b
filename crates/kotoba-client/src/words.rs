//! Endpoints that add or remove vocabulary records.

use kotoba_core::requests::{AddWordsRequest, RangeImportRequest};
use kotoba_core::responses::{DeleteWordResponse, ImportResponse, RangeImportResponse};

use crate::error::ClientError;
use crate::http::check_response;
use crate::ApiClient;

impl ApiClient {
    /// Import one whole set.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown set.
    pub async fn import_set(&self, key: &str, dedup: bool) -> Result<ImportResponse, ClientError> {
        let url = self.url(&format!(
            "/api/add-set-to-user/{}?dedup={dedup}",
            urlencoding::encode(key)
        ));
        let resp = self.http.post(url).send().await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 400 when `start > end`.
    pub async fn import_range(
        &self,
        start: Option<i64>,
        end: Option<i64>,
        dedup: bool,
    ) -> Result<RangeImportResponse, ClientError> {
        let request = RangeImportRequest { start, end, dedup };
        let resp = self
            .http
            .post(self.url("/api/add-range-to-user"))
            .json(&request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or blank text.
    pub async fn add_words(&self, text: &str, dedup: bool) -> Result<ImportResponse, ClientError> {
        let request = AddWordsRequest {
            text: text.to_string(),
            dedup,
        };
        let resp = self
            .http
            .post(self.url("/api/words"))
            .json(&request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn delete_word(&self, word_id: &str) -> Result<DeleteWordResponse, ClientError> {
        let url = self.url(&format!("/api/words/{}", urlencoding::encode(word_id)));
        let resp = self.http.delete(url).send().await?;
        Ok(check_response(resp).await?.json().await?)
    }
}
