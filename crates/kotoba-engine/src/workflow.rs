//! `VocabEngine`: the operations behind every API endpoint.
//!
//! Each mutating method loads the progress document, changes it in memory,
//! and saves it back. Concurrent callers race; the last save wins.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kotoba_core::entities::{UserProgress, WordRecord, WordSet};
use kotoba_core::enums::{CounterKind, MergeMode};
use kotoba_core::requests::RandomSetRequest;
use kotoba_core::responses::{
    CounterResponse, DeleteWordResponse, ImportResponse, RandomSetResponse, RangeImportResponse,
    SearchAndAddResponse, SetStatistics,
};
use kotoba_db::service::KotobaService;

use crate::error::EngineError;
use crate::merge::merge;
use crate::parser::SetParser;
use crate::sampling::{SamplePlan, sample};
use crate::saturating_u32;
use crate::search::{SearchTerm, matching_lines, matching_set_keys};
use crate::stats::set_statistics;

pub struct VocabEngine {
    service: KotobaService,
    parser: SetParser,
}

impl VocabEngine {
    #[must_use]
    pub const fn new(service: KotobaService, parser: SetParser) -> Self {
        Self { service, parser }
    }

    /// # Errors
    ///
    /// Returns `EngineError::Database` if the store cannot be read.
    pub async fn progress(&self) -> Result<UserProgress, EngineError> {
        Ok(self.service.get_progress().await?)
    }

    /// Create or replace a raw set.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` when the key or content is blank.
    pub async fn register_set(&self, key: &str, content: &str) -> Result<WordSet, EngineError> {
        let key = key.trim();
        if key.is_empty() || content.trim().is_empty() {
            return Err(EngineError::Validation(
                "key and content are required".into(),
            ));
        }
        let set = self.service.upsert_word_set(key, content).await?;
        tracing::info!(set = %set.key, bytes = content.len(), "registered word set");
        Ok(set)
    }

    /// # Errors
    ///
    /// Returns `EngineError::Database` on store failure.
    pub async fn list_set_keys(&self) -> Result<Vec<String>, EngineError> {
        Ok(self.service.list_word_set_keys().await?)
    }

    /// Per-set count of headwords answered at most `threshold` times.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Database` on store failure.
    pub async fn set_statistics(&self, threshold: u32) -> Result<SetStatistics, EngineError> {
        let sets = self.service.list_word_sets().await?;
        let progress = self.service.get_progress().await?;
        tracing::debug!(sets = sets.len(), threshold, "computing set statistics");
        Ok(set_statistics(&sets, &self.parser, &progress, threshold))
    }

    /// Keys of the sets whose content contains `term`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` for a blank term.
    pub async fn search_sets(&self, term: &str) -> Result<Vec<String>, EngineError> {
        let term = SearchTerm::parse(term)?;
        let sets = self.service.list_word_sets().await?;
        let keys = matching_set_keys(&sets, &term);
        tracing::debug!(term = term.as_str(), hits = keys.len(), "searched word sets");
        Ok(keys)
    }

    /// Append a whole set to the vocabulary and mark it imported.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SetNotFound` for an unknown key.
    pub async fn import_set(&self, key: &str, dedup: bool) -> Result<ImportResponse, EngineError> {
        let set = self
            .service
            .get_word_set(key)
            .await?
            .ok_or_else(|| EngineError::SetNotFound { key: key.into() })?;

        let mode = MergeMode::for_import(dedup);
        let mut progress = self.service.get_progress().await?;
        let outcome = merge(&mut progress.vocabulary, self.parser.parse(&set.content), mode);
        progress.imported_sets.insert(set.key.clone());
        self.service.save_progress(&progress).await?;

        let added = saturating_u32(outcome.accepted.len());
        let skipped = saturating_u32(outcome.rejected);
        tracing::info!(set = %set.key, added, skipped, %mode, "imported word set");
        Ok(ImportResponse {
            set_key: Some(set.key.clone()),
            added,
            skipped,
            message: format!("Added {added} words from set {} ({skipped} skipped)", set.key),
        })
    }

    /// Import every not-yet-imported set with a numeric key in `[start, end]`.
    ///
    /// A missing bound is open-ended. With both bounds missing every
    /// registered set is imported, non-numeric keys included.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` when `start > end`.
    pub async fn import_range(
        &self,
        start: Option<i64>,
        end: Option<i64>,
        dedup: bool,
    ) -> Result<RangeImportResponse, EngineError> {
        if let (Some(lo), Some(hi)) = (start, end)
            && lo > hi
        {
            return Err(EngineError::Validation(format!(
                "start ({lo}) must not exceed end ({hi})"
            )));
        }

        let sets = self.service.list_word_sets_in_range(start, end).await?;
        let mut progress = self.service.get_progress().await?;
        let mode = MergeMode::for_import(dedup);

        let mut imported = Vec::new();
        let (mut added, mut skipped) = (0usize, 0usize);
        for set in sets {
            if progress.imported_sets.contains(&set.key) {
                continue;
            }
            let outcome = merge(&mut progress.vocabulary, self.parser.parse(&set.content), mode);
            added += outcome.accepted.len();
            skipped += outcome.rejected;
            progress.imported_sets.insert(set.key.clone());
            imported.push(set.key);
        }

        if !imported.is_empty() {
            self.service.save_progress(&progress).await?;
        }

        let (added, skipped) = (saturating_u32(added), saturating_u32(skipped));
        tracing::info!(
            ?start,
            ?end,
            sets = imported.len(),
            added,
            skipped,
            %mode,
            "imported set range"
        );
        Ok(RangeImportResponse {
            message: format!(
                "Imported {} sets: {added} words added, {skipped} skipped",
                imported.len()
            ),
            imported,
            added,
            skipped,
        })
    }

    /// Parse free text as a set body and merge it without a set key.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` when the text is blank.
    pub async fn add_words(&self, text: &str, dedup: bool) -> Result<ImportResponse, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::Validation("text is required".into()));
        }

        let mode = MergeMode::for_import(dedup);
        let mut progress = self.service.get_progress().await?;
        let outcome = merge(&mut progress.vocabulary, self.parser.parse(text), mode);
        if !outcome.accepted.is_empty() {
            self.service.save_progress(&progress).await?;
        }

        let added = saturating_u32(outcome.accepted.len());
        let skipped = saturating_u32(outcome.rejected);
        tracing::info!(added, skipped, %mode, "added words");
        Ok(ImportResponse {
            set_key: None,
            added,
            skipped,
            message: format!("Added {added} words ({skipped} skipped)"),
        })
    }

    /// Replace the vocabulary with a random sample drawn from the selected sets.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` for a bad count and
    /// `EngineError::NoMatchingWords` when the filtered pool is empty.
    pub async fn random_set(
        &self,
        request: &RandomSetRequest,
    ) -> Result<RandomSetResponse, EngineError> {
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.random_set_with_rng(request, &mut rng).await
    }

    /// [`Self::random_set`] with a caller-supplied generator.
    ///
    /// # Errors
    ///
    /// Same as [`Self::random_set`].
    pub async fn random_set_with_rng<R: Rng + Send + ?Sized>(
        &self,
        request: &RandomSetRequest,
        rng: &mut R,
    ) -> Result<RandomSetResponse, EngineError> {
        let plan = SamplePlan::from_request(request)?;
        let sets = self
            .service
            .list_word_sets_in_range(plan.start, plan.end)
            .await?;
        let mut progress = self.service.get_progress().await?;

        let pool: Vec<WordRecord> = sets
            .iter()
            .flat_map(|set| self.parser.parse(&set.content))
            .collect();
        let pool = plan.filter.apply(pool, &progress);
        if pool.is_empty() {
            tracing::debug!(sets = sets.len(), "random set pool is empty");
            return Err(EngineError::NoMatchingWords);
        }

        let pool_size = saturating_u32(pool.len());
        progress.vocabulary = sample(pool, plan.count, rng);
        progress.imported_sets.clear();
        self.service.save_progress(&progress).await?;

        let sampled = saturating_u32(progress.vocabulary.len());
        tracing::info!(pool_size, sampled, sets = sets.len(), "sampled random set");
        Ok(RandomSetResponse {
            progress,
            pool_size,
            sampled,
            message: format!("Sampled {sampled} of {pool_size} words"),
        })
    }

    /// Prepend every set line containing `term`, skipping known headwords.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` for a blank term.
    pub async fn search_and_add(&self, term: &str) -> Result<SearchAndAddResponse, EngineError> {
        let term = SearchTerm::parse(term)?;
        let sets = self.service.list_word_sets().await?;
        let candidates = matching_lines(&sets, &term, &self.parser);

        let mut progress = self.service.get_progress().await?;
        let mode = MergeMode::Prepend;
        let outcome = merge(&mut progress.vocabulary, candidates, mode);
        if !outcome.accepted.is_empty() {
            self.service.save_progress(&progress).await?;
        }

        let added = saturating_u32(outcome.accepted.len());
        let skipped = saturating_u32(outcome.rejected);
        tracing::info!(term = term.as_str(), added, skipped, %mode, "search-and-add");
        Ok(SearchAndAddResponse {
            message: if added == 0 {
                format!("No new words matched '{}'", term.as_str())
            } else {
                format!("Added {added} words matching '{}'", term.as_str())
            },
            added_words: outcome.accepted,
            added,
            skipped,
        })
    }

    /// Store an absolute counter value for a headword.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` for a blank word.
    pub async fn set_counter(
        &self,
        kind: CounterKind,
        word: &str,
        count: u32,
    ) -> Result<CounterResponse, EngineError> {
        if word.trim().is_empty() {
            return Err(EngineError::Validation("word is required".into()));
        }
        let progress = self.service.set_counter(kind, word, count).await?;
        tracing::info!(word, %kind, count, "updated counter");
        Ok(CounterResponse {
            word: word.to_string(),
            kind,
            count: progress.count(kind, word),
        })
    }

    /// Clear vocabulary and imported sets. Counters survive.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Database` on store failure.
    pub async fn reset(&self) -> Result<UserProgress, EngineError> {
        let progress = self.service.reset_progress().await?;
        tracing::info!("reset vocabulary");
        Ok(progress)
    }

    /// Persist a caller-computed vocabulary order as-is.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Database` on store failure.
    pub async fn replace_vocabulary(
        &self,
        words: Vec<WordRecord>,
    ) -> Result<UserProgress, EngineError> {
        let count = words.len();
        let progress = self.service.replace_vocabulary(words).await?;
        tracing::info!(words = count, "replaced vocabulary order");
        Ok(progress)
    }

    /// Remove one record by id. Unknown ids are reported, not rejected.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Database` on store failure.
    pub async fn delete_word(&self, word_id: &str) -> Result<DeleteWordResponse, EngineError> {
        let removed = self.service.delete_word(word_id).await?;
        tracing::info!(word_id, removed, "deleted word");
        Ok(DeleteWordResponse {
            removed,
            message: if removed {
                "Word deleted".into()
            } else {
                format!("Word {word_id} not found")
            },
        })
    }
}
