use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered raw word set: newline-delimited records under a numeric key.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordSet {
    pub key: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl WordSet {
    /// The key as a number, if it is one. Range filters skip non-numeric keys.
    #[must_use]
    pub fn numeric_key(&self) -> Option<i64> {
        self.key.trim().parse().ok()
    }
}

/// Order set keys numerically, with non-numeric keys after all numeric ones.
pub fn compare_keys(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
