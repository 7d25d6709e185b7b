//! Progress-document endpoints.

use kotoba_core::entities::{UserProgress, WordRecord};
use kotoba_core::enums::CounterKind;
use kotoba_core::requests::{
    CounterUpdateRequest, RandomSetRequest, SearchAndAddRequest, ShuffleRequest,
};
use kotoba_core::responses::{
    CounterResponse, MessageResponse, RandomSetResponse, SearchAndAddResponse,
};

use crate::error::ClientError;
use crate::http::check_response;
use crate::ApiClient;

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn progress(&self) -> Result<UserProgress, ClientError> {
        let resp = check_response(self.http.get(self.url("/api/userdata")).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 400 for a bad count and 404
    /// when no word matches the filters.
    pub async fn random_set(
        &self,
        request: &RandomSetRequest,
    ) -> Result<RandomSetResponse, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/userdata/random-set"))
            .json(request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a blank term.
    pub async fn search_and_add(&self, term: &str) -> Result<SearchAndAddResponse, ClientError> {
        let request = SearchAndAddRequest {
            search_term: term.to_string(),
        };
        let resp = self
            .http
            .post(self.url("/api/userdata/search-and-add"))
            .json(&request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// Send an absolute counter value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn update_counter(
        &self,
        kind: CounterKind,
        word: &str,
        count: u32,
    ) -> Result<CounterResponse, ClientError> {
        let request = CounterUpdateRequest {
            word: word.to_string(),
            count,
        };
        let resp = self
            .http
            .post(self.url(&format!("/api/{kind}/update")))
            .json(&request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn delete_all_words(&self) -> Result<MessageResponse, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/delete-all-words"))
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn shuffle_words(
        &self,
        vocabulary: Vec<WordRecord>,
    ) -> Result<MessageResponse, ClientError> {
        let request = ShuffleRequest {
            shuffled_vocabulary_data: vocabulary,
        };
        let resp = self
            .http
            .post(self.url("/api/shuffle-words"))
            .json(&request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }
}
