//! Engine error types.

use kotoba_db::error::DatabaseError;
use thiserror::Error;

/// Errors from ingestion, sampling, and progress operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller input failed validation (missing field, bad count, empty term).
    #[error("{0}")]
    Validation(String),

    /// The referenced word set is not registered.
    #[error("word set '{key}' not found")]
    SetNotFound { key: String },

    /// Sampling filters left nothing to sample from.
    #[error("no matching words")]
    NoMatchingWords,

    /// Store access failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
