//! User progress repository: the singleton study document.
//!
//! Every mutating method here reads the whole document, changes it in memory,
//! and writes it back. Two concurrent callers can overwrite each other's
//! change (last write wins); there is no transaction or version check.

use chrono::Utc;

use kotoba_core::entities::{UserProgress, WordRecord};
use kotoba_core::enums::CounterKind;
use kotoba_core::ids::USER_PROGRESS_ID;

use crate::error::DatabaseError;
use crate::helpers::parse_document;
use crate::service::KotobaService;

impl KotobaService {
    /// Load the progress document, creating an empty one on first access.
    pub async fn get_progress(&self) -> Result<UserProgress, DatabaseError> {
        if let Some(progress) = self.find_progress().await? {
            return Ok(progress);
        }

        let progress = UserProgress::default();
        let data = serde_json::to_string(&progress)?;
        self.db()
            .conn()
            .execute(
                "INSERT OR IGNORE INTO user_progress (id, data, updated_at) VALUES (?1, ?2, ?3)",
                libsql::params![USER_PROGRESS_ID, data, Utc::now().to_rfc3339()],
            )
            .await?;
        tracing::debug!("initialized empty user progress");
        Ok(progress)
    }

    /// Overwrite the stored progress document.
    pub async fn save_progress(&self, progress: &UserProgress) -> Result<(), DatabaseError> {
        let data = serde_json::to_string(progress)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO user_progress (id, data, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET data = ?2, updated_at = ?3",
                libsql::params![USER_PROGRESS_ID, data, Utc::now().to_rfc3339()],
            )
            .await?;
        Ok(())
    }

    /// Set an absolute counter value for a headword.
    pub async fn set_counter(
        &self,
        kind: CounterKind,
        word: &str,
        count: u32,
    ) -> Result<UserProgress, DatabaseError> {
        let mut progress = self.get_progress().await?;
        progress.set_count(kind, word, count);
        self.save_progress(&progress).await?;
        Ok(progress)
    }

    /// Clear vocabulary and imported sets, keeping the counters.
    pub async fn reset_progress(&self) -> Result<UserProgress, DatabaseError> {
        let mut progress = self.get_progress().await?;
        progress.reset();
        self.save_progress(&progress).await?;
        Ok(progress)
    }

    /// Store a caller-supplied vocabulary order verbatim.
    pub async fn replace_vocabulary(
        &self,
        vocabulary: Vec<WordRecord>,
    ) -> Result<UserProgress, DatabaseError> {
        let mut progress = self.get_progress().await?;
        progress.vocabulary = vocabulary;
        self.save_progress(&progress).await?;
        Ok(progress)
    }

    /// Remove one word by id. Returns whether a record was removed.
    pub async fn delete_word(&self, word_id: &str) -> Result<bool, DatabaseError> {
        let mut progress = self.get_progress().await?;
        let removed = progress.remove_word(word_id);
        if removed {
            self.save_progress(&progress).await?;
        }
        Ok(removed)
    }

    async fn find_progress(&self) -> Result<Option<UserProgress>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT data FROM user_progress WHERE id = ?1",
                [USER_PROGRESS_ID],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(parse_document(&row.get::<String>(0)?)?)),
            None => Ok(None),
        }
    }
}
