//! Case-insensitive text search over raw set content.

use kotoba_core::entities::{WordRecord, WordSet};

use crate::error::EngineError;
use crate::parser::SetParser;
use crate::saturating_u32;

/// A validated, lowercased search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// # Errors
    ///
    /// Returns `EngineError::Validation` when the term is blank.
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EngineError::Validation("search term is required".into()));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Keys of the sets whose content contains the term, in input order.
#[must_use]
pub fn matching_set_keys(sets: &[WordSet], term: &SearchTerm) -> Vec<String> {
    sets.iter()
        .filter(|set| term.matches(&set.content))
        .map(|set| set.key.clone())
        .collect()
}

/// Parse every matching line, tagged with its set key and 1-based line.
///
/// Matching lines that fail the parser's rules are skipped.
#[must_use]
pub fn matching_lines(sets: &[WordSet], term: &SearchTerm, parser: &SetParser) -> Vec<WordRecord> {
    sets.iter()
        .flat_map(|set| {
            set.content
                .lines()
                .enumerate()
                .filter(move |(_, line)| term.matches(line))
                .filter_map(move |(idx, line)| {
                    parser
                        .parse_line(line)
                        .map(|word| word.with_origin(&set.key, saturating_u32(idx + 1)))
                })
        })
        .collect()
}
