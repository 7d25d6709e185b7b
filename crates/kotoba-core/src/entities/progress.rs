use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::WordRecord;
use crate::enums::CounterKind;

/// The singleton study document: active vocabulary, imported sets, and
/// per-headword answer counters.
///
/// `Default` is the full empty shape. Every field is `#[serde(default)]`, so a
/// stored document missing a field reads back the same as one holding an
/// empty value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    #[serde(default)]
    pub vocabulary: Vec<WordRecord>,
    #[serde(default)]
    pub imported_sets: BTreeSet<String>,
    #[serde(default)]
    pub correct_counts: BTreeMap<String, u32>,
    #[serde(default)]
    pub incorrect_counts: BTreeMap<String, u32>,
}

impl UserProgress {
    /// Counter value for a headword; missing entries read as zero.
    #[must_use]
    pub fn count(&self, kind: CounterKind, headword: &str) -> u32 {
        self.counts(kind).get(headword).copied().unwrap_or(0)
    }

    /// Set an absolute counter value.
    pub fn set_count(&mut self, kind: CounterKind, headword: &str, count: u32) {
        let counts = match kind {
            CounterKind::Correct => &mut self.correct_counts,
            CounterKind::Incorrect => &mut self.incorrect_counts,
        };
        counts.insert(headword.to_string(), count);
    }

    /// Total recorded answers (correct + incorrect) for a headword.
    #[must_use]
    pub fn attempts(&self, headword: &str) -> u32 {
        self.count(CounterKind::Correct, headword)
            .saturating_add(self.count(CounterKind::Incorrect, headword))
    }

    /// Percentage of correct answers, or `None` when the word was never answered.
    #[must_use]
    pub fn accuracy_percent(&self, headword: &str) -> Option<f64> {
        let attempts = self.attempts(headword);
        if attempts == 0 {
            return None;
        }
        let correct = self.count(CounterKind::Correct, headword);
        Some(f64::from(correct) / f64::from(attempts) * 100.0)
    }

    /// Find a vocabulary record by id.
    #[must_use]
    pub fn word(&self, id: &str) -> Option<&WordRecord> {
        self.vocabulary.iter().find(|w| w.id == id)
    }

    /// Remove a record by id. Returns whether anything was removed.
    pub fn remove_word(&mut self, id: &str) -> bool {
        let before = self.vocabulary.len();
        self.vocabulary.retain(|w| w.id != id);
        self.vocabulary.len() != before
    }

    /// Clear the study list and imported sets. Counters survive a reset.
    pub fn reset(&mut self) {
        self.vocabulary.clear();
        self.imported_sets.clear();
    }

    const fn counts(&self, kind: CounterKind) -> &BTreeMap<String, u32> {
        match kind {
            CounterKind::Correct => &self.correct_counts,
            CounterKind::Incorrect => &self.incorrect_counts,
        }
    }
}
