//! Word-set parser configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Canonical field delimiter.
const fn default_delimiter() -> char {
    ','
}

/// Canonical minimum field count: headword, gloss, reading, pronunciation.
const fn default_min_fields() -> usize {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Character separating fields on a set line.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Lines with fewer fields (headword included) are dropped.
    #[serde(default = "default_min_fields")]
    pub min_fields: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            min_fields: default_min_fields(),
        }
    }
}

impl ParserConfig {
    /// Reject settings the parser cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero `min_fields` or a
    /// newline delimiter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_fields == 0 {
            return Err(ConfigError::InvalidValue {
                field: "parser.min_fields".into(),
                reason: "must be at least 1 (the headword)".into(),
            });
        }
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(ConfigError::InvalidValue {
                field: "parser.delimiter".into(),
                reason: "line breaks separate records, not fields".into(),
            });
        }
        Ok(())
    }
}
