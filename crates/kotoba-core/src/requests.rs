//! Request bodies accepted by the HTTP API.
//!
//! Required string fields default to empty so a missing field and a blank one
//! fail the same validation instead of surfacing as a decode error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::WordRecord;

const fn default_true() -> bool {
    true
}

/// Body of `POST /api/wordsets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegisterSetRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub content: String,
}

/// Body of `POST /api/userdata/random-set`.
///
/// `count` stays signed and optional so that absent, zero, and negative values
/// all reach the same validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RandomSetRequest {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_accuracy: Option<f64>,
}

/// Body of `POST /api/add-range-to-user`.
///
/// Omitting both bounds imports every registered set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RangeImportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(default = "default_true")]
    pub dedup: bool,
}

/// Body of `POST /api/words`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AddWordsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_true")]
    pub dedup: bool,
}

/// Body of `POST /api/userdata/search-and-add`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchAndAddRequest {
    #[serde(default)]
    pub search_term: String,
}

/// Body of `POST /api/correct/update` and `POST /api/incorrect/update`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CounterUpdateRequest {
    #[serde(default)]
    pub word: String,
    pub count: u32,
}

/// Body of `POST /api/shuffle-words`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleRequest {
    pub shuffled_vocabulary_data: Vec<WordRecord>,
}
