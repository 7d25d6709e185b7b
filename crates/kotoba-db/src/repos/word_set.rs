//! Word set repository: upsert, lookup, listing.

use chrono::Utc;

use kotoba_core::entities::{WordSet, compare_keys};

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::KotobaService;

fn row_to_word_set(row: &libsql::Row) -> Result<WordSet, DatabaseError> {
    Ok(WordSet {
        key: row.get::<String>(0)?,
        content: row.get::<String>(1)?,
        updated_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl KotobaService {
    /// Insert or replace the content of a word set.
    pub async fn upsert_word_set(&self, key: &str, content: &str) -> Result<WordSet, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO word_sets (key, content, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET content = ?2, updated_at = ?3",
                libsql::params![key, content, now.to_rfc3339()],
            )
            .await?;

        Ok(WordSet {
            key: key.to_string(),
            content: content.to_string(),
            updated_at: now,
        })
    }

    pub async fn get_word_set(&self, key: &str) -> Result<Option<WordSet>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT key, content, updated_at FROM word_sets WHERE key = ?1",
                [key],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_word_set(&row)?)),
            None => Ok(None),
        }
    }

    /// All word sets, numeric keys first in numeric order.
    pub async fn list_word_sets(&self) -> Result<Vec<WordSet>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT key, content, updated_at FROM word_sets", ())
            .await?;

        let mut sets = Vec::new();
        while let Some(row) = rows.next().await? {
            sets.push(row_to_word_set(&row)?);
        }
        sets.sort_by(|a, b| compare_keys(&a.key, &b.key));
        Ok(sets)
    }

    /// Word sets whose key is an integer within the inclusive bounds.
    ///
    /// A missing bound is open-ended. With both bounds missing every set is
    /// returned, including non-numeric keys.
    pub async fn list_word_sets_in_range(
        &self,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Vec<WordSet>, DatabaseError> {
        let sets = self.list_word_sets().await?;
        if start.is_none() && end.is_none() {
            return Ok(sets);
        }
        Ok(sets
            .into_iter()
            .filter(|set| {
                set.numeric_key().is_some_and(|n| {
                    start.is_none_or(|lo| n >= lo) && end.is_none_or(|hi| n <= hi)
                })
            })
            .collect())
    }

    /// Registered set keys in numeric order.
    pub async fn list_word_set_keys(&self) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT key FROM word_sets", ())
            .await?;

        let mut keys = Vec::new();
        while let Some(row) = rows.next().await? {
            keys.push(row.get::<String>(0)?);
        }
        keys.sort_by(|a, b| compare_keys(a, b));
        Ok(keys)
    }
}
