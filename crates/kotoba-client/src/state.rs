//! Local study-session state.
//!
//! Holds the last loaded progress document. Answer marks are computed here
//! as absolute counter values, then sent to the server, so two sessions
//! marking the same word concurrently overwrite each other.

use rand::Rng;
use rand::seq::SliceRandom;

use kotoba_core::entities::{UserProgress, WordRecord};
use kotoba_core::enums::CounterKind;

use crate::error::ClientError;

/// A counter value computed locally and ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterChange {
    pub headword: String,
    pub kind: CounterKind,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyState {
    progress: UserProgress,
}

impl StudyState {
    #[must_use]
    pub const fn new(progress: UserProgress) -> Self {
        Self { progress }
    }

    #[must_use]
    pub const fn progress(&self) -> &UserProgress {
        &self.progress
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[WordRecord] {
        &self.progress.vocabulary
    }

    pub fn replace(&mut self, progress: UserProgress) {
        self.progress = progress;
    }

    /// Compute the next counter value for the word with `word_id`.
    ///
    /// The local state is left untouched until [`Self::apply`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownWord`] when the id is not loaded.
    pub fn next_answer(
        &self,
        word_id: &str,
        kind: CounterKind,
    ) -> Result<CounterChange, ClientError> {
        let headword = self
            .progress
            .word(word_id)
            .map(|w| w.headword.clone())
            .ok_or_else(|| ClientError::UnknownWord(word_id.to_string()))?;
        let count = self.progress.count(kind, &headword).saturating_add(1);
        Ok(CounterChange {
            headword,
            kind,
            count,
        })
    }

    /// Store a counter value the server has accepted.
    pub fn apply(&mut self, change: &CounterChange) {
        self.progress
            .set_count(change.kind, &change.headword, change.count);
    }

    /// Shuffle the local vocabulary in place and return the new order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[WordRecord] {
        self.progress.vocabulary.shuffle(rng);
        &self.progress.vocabulary
    }

    pub fn remove(&mut self, word_id: &str) -> bool {
        self.progress.remove_word(word_id)
    }

    /// Mirror a server-side reset: counters stay.
    pub fn clear(&mut self) {
        self.progress.reset();
    }
}
