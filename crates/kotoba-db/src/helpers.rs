//! Row-to-entity parsing helpers.
//!
//! Timestamps are written with `to_rfc3339()` by the repos but the column
//! defaults use `SQLite`'s `datetime('now')`, so both formats must parse.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Decode a JSON document column into its typed form.
///
/// # Errors
///
/// Returns `DatabaseError::Serialization` if the text is not a valid document.
pub fn parse_document<T: DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    Ok(serde_json::from_str(s)?)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use kotoba_core::entities::UserProgress;

    use super::*;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(dt.day(), 9);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn parses_partial_progress_document() {
        let progress: UserProgress = parse_document(r#"{"importedSets": ["2"]}"#).unwrap();
        assert!(progress.vocabulary.is_empty());
        assert!(progress.imported_sets.contains("2"));
    }

    #[test]
    fn rejects_malformed_document() {
        let result = parse_document::<UserProgress>("{not json");
        assert!(matches!(result, Err(DatabaseError::Serialization(_))));
    }
}
