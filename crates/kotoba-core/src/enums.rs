//! Merge modes and counter kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MergeMode
// ---------------------------------------------------------------------------

/// How candidate words are combined with the existing vocabulary.
///
/// ```text
/// append      dedup by headword, accepted words go to the end
/// append_all  no dedup, every candidate goes to the end
/// prepend     dedup by headword, accepted words go to the front (newest first)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MergeMode {
    Append,
    AppendAll,
    Prepend,
}

impl MergeMode {
    /// Whole-set import mode for the caller's dedup choice.
    #[must_use]
    pub const fn for_import(dedup: bool) -> Self {
        if dedup { Self::Append } else { Self::AppendAll }
    }

    /// Whether candidates are checked against existing headwords.
    #[must_use]
    pub const fn dedups(self) -> bool {
        !matches!(self, Self::AppendAll)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::AppendAll => "append_all",
            Self::Prepend => "prepend",
        }
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CounterKind
// ---------------------------------------------------------------------------

/// Which per-headword counter a mark operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CounterKind {
    Correct,
    Incorrect,
}

impl CounterKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
