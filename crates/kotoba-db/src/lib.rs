//! # kotoba-db
//!
//! libSQL storage for Kotoba.
//!
//! Holds two logical collections: raw word sets keyed by set identifier, and
//! the singleton user progress document keyed by a fixed sentinel id. The
//! progress document is stored as JSON text; every mutation is a plain
//! read-modify-write with last-write-wins semantics, with no transaction and no
//! version token.
//!
//! Uses the `libsql` crate, which serves both local files and remote
//! Turso databases through the same connection API.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Kotoba state operations.
pub struct KotobaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl KotobaDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Creates missing parent directories and runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != ":memory:"
            && let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let kotoba_db = Self { db, conn };
        kotoba_db.run_migrations().await?;
        tracing::debug!(path, "opened local database");
        Ok(kotoba_db)
    }

    /// Open a remote libSQL database (e.g. Turso).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let kotoba_db = Self { db, conn };
        kotoba_db.run_migrations().await?;
        tracing::debug!(url, "opened remote database");
        Ok(kotoba_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
