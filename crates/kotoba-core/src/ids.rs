//! ID prefixes and generation helpers.
//!
//! Word ids are opaque to every consumer; the prefix only makes them easy to
//! spot in logs and JSON dumps.

/// Prefix for parsed word records.
pub const PREFIX_WORD: &str = "wrd";

/// Sentinel id of the singleton user progress document.
pub const USER_PROGRESS_ID: &str = "main";

/// Generate a fresh word id, e.g. `"wrd-9f86d081884c7d65"`.
#[must_use]
pub fn new_word_id() -> String {
    format!("{PREFIX_WORD}-{:016x}", rand::random::<u64>())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn word_id_format() {
        let id = new_word_id();
        assert!(id.starts_with("wrd-"), "unexpected id: {id}");
        assert_eq!(id.len(), 20);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn word_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| new_word_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
