//! `StudyController`: drives a [`StudyState`] against the API.

use kotoba_core::enums::CounterKind;
use kotoba_core::responses::{CounterResponse, DeleteWordResponse, MessageResponse};

use crate::error::ClientError;
use crate::state::StudyState;
use crate::ApiClient;

pub struct StudyController {
    client: ApiClient,
    state: StudyState,
}

impl StudyController {
    /// Fetch the current progress and start a session over it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the progress cannot be loaded.
    pub async fn load(client: ApiClient) -> Result<Self, ClientError> {
        let progress = client.progress().await?;
        tracing::debug!(words = progress.vocabulary.len(), "loaded study state");
        Ok(Self {
            client,
            state: StudyState::new(progress),
        })
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub const fn state(&self) -> &StudyState {
        &self.state
    }

    /// Reload the progress document from the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.state.replace(self.client.progress().await?);
        Ok(())
    }

    /// Record an answer: send the incremented absolute value, then keep it
    /// locally once the server has stored it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownWord`] for an id missing from the
    /// session, or a transport/API error. The local counter is unchanged on
    /// error.
    pub async fn mark(
        &mut self,
        word_id: &str,
        kind: CounterKind,
    ) -> Result<CounterResponse, ClientError> {
        let change = self.state.next_answer(word_id, kind)?;
        tracing::debug!(headword = %change.headword, %kind, count = change.count, "marking word");
        let resp = self
            .client
            .update_counter(change.kind, &change.headword, change.count)
            .await?;
        self.state.apply(&change);
        Ok(resp)
    }

    /// Shuffle locally and persist the new order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn shuffle(&mut self) -> Result<MessageResponse, ClientError> {
        let order = {
            let mut rng = rand::rng();
            self.state.shuffle(&mut rng).to_vec()
        };
        self.client.shuffle_words(order).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn delete(&mut self, word_id: &str) -> Result<DeleteWordResponse, ClientError> {
        let resp = self.client.delete_word(word_id).await?;
        self.state.remove(word_id);
        Ok(resp)
    }

    /// Clear the vocabulary on the server and locally.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn clear(&mut self) -> Result<MessageResponse, ClientError> {
        let resp = self.client.delete_all_words().await?;
        self.state.clear();
        Ok(resp)
    }
}
