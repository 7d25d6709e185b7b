//! Service layer over the raw database handle.
//!
//! `KotobaService` wraps `KotobaDb`. All repo methods are implemented as
//! `impl KotobaService` blocks in `repos/`.

use kotoba_config::DatabaseConfig;

use crate::KotobaDb;
use crate::error::DatabaseError;

/// Store access for word sets and the user progress document.
pub struct KotobaService {
    db: KotobaDb,
}

impl KotobaService {
    /// Create a service over a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = KotobaDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = KotobaDb::open_remote(url, auth_token).await?;
        Ok(Self { db })
    }

    /// Open whichever backend the configuration selects: remote when both
    /// `url` and `auth_token` are set, the local `path` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the selected backend cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            tracing::info!(url = %config.url, "using remote database");
            Self::new_remote(&config.url, &config.auth_token).await
        } else {
            tracing::info!(path = %config.path, "using local database");
            Self::new_local(&config.path).await
        }
    }

    /// Create from an existing `KotobaDb` (for testing).
    #[must_use]
    pub const fn from_db(db: KotobaDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &KotobaDb {
        &self.db
    }
}
