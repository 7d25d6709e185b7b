//! Response types returned as JSON by the HTTP API.
//!
//! The server serializes these and `kotoba-client` deserializes them, so both
//! sides share one definition of each shape.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{UserProgress, WordRecord};
use crate::enums::CounterKind;

/// Plain acknowledgement, also the body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response from `GET /healthz`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Unstudied-word counts per set key, from `GET /api/wordsets?threshold=N`.
pub type SetStatistics = BTreeMap<String, u32>;

/// Response from a whole-set import or a manual word add.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_key: Option<String>,
    pub added: u32,
    pub skipped: u32,
    pub message: String,
}

/// Response from `POST /api/add-range-to-user`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RangeImportResponse {
    pub imported: Vec<String>,
    pub added: u32,
    pub skipped: u32,
    pub message: String,
}

/// Response from `POST /api/userdata/random-set`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RandomSetResponse {
    pub progress: UserProgress,
    pub pool_size: u32,
    pub sampled: u32,
    pub message: String,
}

/// Response from `POST /api/userdata/search-and-add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchAndAddResponse {
    /// Newly added records, in the order they now appear at the front of the list.
    pub added_words: Vec<WordRecord>,
    pub added: u32,
    pub skipped: u32,
    pub message: String,
}

/// Response from the counter update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CounterResponse {
    pub word: String,
    pub kind: CounterKind,
    pub count: u32,
}

/// Response from `DELETE /api/words/{wordId}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteWordResponse {
    pub removed: bool,
    pub message: String,
}
