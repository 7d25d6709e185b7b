//! Client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// The server's `message`, or the raw body when it had none.
        message: String,
    },

    /// The word id is not in the local study list.
    #[error("word '{0}' is not in the vocabulary")]
    UnknownWord(String),
}

impl ClientError {
    /// HTTP status for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
