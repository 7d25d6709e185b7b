//! Entity structs for the Kotoba documents.
//!
//! `WordSet` maps to the `word_sets` table; `UserProgress` is stored as a JSON
//! document in `user_progress`. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema` for JSON roundtrip and schema validation.

mod progress;
mod word;
mod word_set;

pub use progress::UserProgress;
pub use word::WordRecord;
pub use word_set::{WordSet, compare_keys};
