//! Per-set study statistics.

use kotoba_core::entities::{UserProgress, WordSet};
use kotoba_core::responses::SetStatistics;

use crate::parser::SetParser;
use crate::saturating_u32;

/// Count, per set, the headwords answered at most `threshold` times.
///
/// Missing counters read as zero, so a threshold of 0 counts words that
/// were never studied.
#[must_use]
pub fn set_statistics(
    sets: &[WordSet],
    parser: &SetParser,
    progress: &UserProgress,
    threshold: u32,
) -> SetStatistics {
    sets.iter()
        .map(|set| {
            let unstudied = parser
                .headwords(&set.content)
                .filter(|headword| progress.attempts(headword) <= threshold)
                .count();
            (set.key.clone(), saturating_u32(unstudied))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use kotoba_core::enums::CounterKind;

    use super::*;

    fn set(key: &str, content: &str) -> WordSet {
        WordSet {
            key: key.into(),
            content: content.into(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn counts_words_at_or_below_threshold() {
        let sets = vec![
            set("1", "猫,cat,ねこ,neko\n犬,dog,いぬ,inu\n鳥,bird,とり,tori"),
            set("2", "魚,fish,さかな,sakana\nshort,line"),
        ];
        let mut progress = UserProgress::default();
        progress.set_count(CounterKind::Correct, "猫", 2);
        progress.set_count(CounterKind::Incorrect, "犬", 1);

        let parser = SetParser::default();
        let unstudied = set_statistics(&sets, &parser, &progress, 0);
        assert_eq!(unstudied.get("1"), Some(&1));
        assert_eq!(unstudied.get("2"), Some(&1));

        let within_one = set_statistics(&sets, &parser, &progress, 1);
        assert_eq!(within_one.get("1"), Some(&2));
    }

    #[test]
    fn empty_set_reports_zero() {
        let stats = set_statistics(
            &[set("9", "")],
            &SetParser::default(),
            &UserProgress::default(),
            0,
        );
        assert_eq!(stats.get("9"), Some(&0));
    }
}
