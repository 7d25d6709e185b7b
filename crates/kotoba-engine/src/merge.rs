//! Dedup-merge of candidate records into the vocabulary.

use std::collections::HashSet;

use kotoba_core::entities::WordRecord;
use kotoba_core::enums::MergeMode;

/// Result of a merge: the records that made it in and how many were dropped
/// as duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub accepted: Vec<WordRecord>,
    pub rejected: usize,
}

/// Merge `candidates` into `vocabulary` according to `mode`.
///
/// Headwords compare exactly. Within the candidates the first occurrence of
/// a headword wins. `AppendAll` skips both checks.
pub fn merge(
    vocabulary: &mut Vec<WordRecord>,
    candidates: Vec<WordRecord>,
    mode: MergeMode,
) -> MergeOutcome {
    let mut rejected = 0;
    let accepted: Vec<WordRecord> = if mode.dedups() {
        let mut seen: HashSet<String> = vocabulary.iter().map(|w| w.headword.clone()).collect();
        candidates
            .into_iter()
            .filter(|w| {
                let fresh = seen.insert(w.headword.clone());
                if !fresh {
                    rejected += 1;
                }
                fresh
            })
            .collect()
    } else {
        candidates
    };

    match mode {
        MergeMode::Prepend => {
            vocabulary.splice(0..0, accepted.iter().cloned());
        }
        MergeMode::Append | MergeMode::AppendAll => vocabulary.extend(accepted.iter().cloned()),
    }

    MergeOutcome { accepted, rejected }
}
