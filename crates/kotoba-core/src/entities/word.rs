use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One parsed vocabulary entry.
///
/// `fields` keeps whatever follows the headword on the source line, in order
/// (gloss, reading, pronunciation, kanji readings, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: String,
    pub headword: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_set: Option<String>,
    /// 1-based physical line number inside the origin set's content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_line: Option<u32>,
}

impl WordRecord {
    /// Attach the set and line a record was found on.
    #[must_use]
    pub fn with_origin(mut self, set_key: impl Into<String>, line: u32) -> Self {
        self.origin_set = Some(set_key.into());
        self.origin_line = Some(line);
        self
    }
}
