//! Random sampling over a pool of parsed records.
//!
//! The pool is filtered by study history, shuffled with an unbiased
//! Fisher-Yates pass, and truncated to the requested count.

use rand::Rng;
use rand::seq::SliceRandom;

use kotoba_core::entities::{UserProgress, WordRecord};
use kotoba_core::requests::RandomSetRequest;

use crate::error::EngineError;

/// History-based admission rules. Both ceilings are inclusive and
/// AND-combined; an unset ceiling admits everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampleFilter {
    pub max_attempts: Option<u32>,
    pub max_accuracy: Option<f64>,
}

impl SampleFilter {
    /// Whether a headword passes both ceilings.
    ///
    /// Words that were never answered always pass the accuracy ceiling.
    #[must_use]
    pub fn admits(&self, progress: &UserProgress, headword: &str) -> bool {
        let attempts_ok = self
            .max_attempts
            .is_none_or(|max| progress.attempts(headword) <= max);
        let accuracy_ok = self.max_accuracy.is_none_or(|max| {
            progress
                .accuracy_percent(headword)
                .is_none_or(|accuracy| accuracy <= max)
        });
        attempts_ok && accuracy_ok
    }

    /// Drop every record the filter does not admit, keeping pool order.
    #[must_use]
    pub fn apply(&self, pool: Vec<WordRecord>, progress: &UserProgress) -> Vec<WordRecord> {
        pool.into_iter()
            .filter(|w| self.admits(progress, &w.headword))
            .collect()
    }
}

/// A validated random-set request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePlan {
    pub count: usize,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub filter: SampleFilter,
}

impl SamplePlan {
    /// Validate a request. `count` must be present and at least one.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` for a missing or non-positive count.
    pub fn from_request(request: &RandomSetRequest) -> Result<Self, EngineError> {
        let count = request
            .count
            .filter(|c| *c >= 1)
            .and_then(|c| usize::try_from(c).ok())
            .ok_or_else(|| EngineError::Validation("count must be a positive integer".into()))?;

        Ok(Self {
            count,
            start: request.start,
            end: request.end,
            filter: SampleFilter {
                max_attempts: request.max_attempts,
                max_accuracy: request.max_accuracy,
            },
        })
    }
}

/// Shuffle `pool` and keep the first `count` items.
///
/// With `count >= pool.len()` the result is a permutation of the pool.
pub fn sample<T, R: Rng + ?Sized>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use kotoba_core::enums::CounterKind;

    use super::*;

    fn word(headword: &str) -> WordRecord {
        WordRecord {
            id: format!("wrd-{headword}"),
            headword: headword.into(),
            fields: Vec::new(),
            origin_set: None,
            origin_line: None,
        }
    }

    fn progress_with(correct: u32, incorrect: u32) -> UserProgress {
        let mut progress = UserProgress::default();
        progress.set_count(CounterKind::Correct, "猫", correct);
        progress.set_count(CounterKind::Incorrect, "猫", incorrect);
        progress
    }

    #[test]
    fn count_larger_than_pool_returns_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool: Vec<u32> = (0..10).collect();

        let mut drawn = sample(pool.clone(), 50, &mut rng);
        assert_eq!(drawn.len(), 10);
        drawn.sort_unstable();
        assert_eq!(drawn, pool);
    }

    #[test]
    fn count_smaller_than_pool_draws_distinct_members() {
        let mut rng = StdRng::seed_from_u64(11);
        let pool: Vec<u32> = (0..10).collect();

        let mut drawn = sample(pool, 3, &mut rng);
        assert_eq!(drawn.len(), 3);
        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|n| *n < 10));
    }

    #[test]
    fn shuffle_positions_are_roughly_uniform() {
        const TRIALS: usize = 10_000;
        const SIZE: usize = 5;
        let mut rng = StdRng::seed_from_u64(42);
        let mut histogram = [[0usize; SIZE]; SIZE];

        for _ in 0..TRIALS {
            let drawn = sample((0..SIZE).collect::<Vec<_>>(), SIZE, &mut rng);
            for (position, value) in drawn.into_iter().enumerate() {
                histogram[position][value] += 1;
            }
        }

        let expected = TRIALS / SIZE;
        for row in histogram {
            for hits in row {
                assert!(
                    hits.abs_diff(expected) < expected / 10,
                    "position histogram skewed: {hits} vs {expected}"
                );
            }
        }
    }

    #[rstest]
    #[case(0, 0, Some(0), true)]
    #[case(1, 0, Some(0), false)]
    #[case(2, 1, Some(3), true)]
    #[case(2, 2, Some(3), false)]
    #[case(5, 5, None, true)]
    fn attempts_ceiling(
        #[case] correct: u32,
        #[case] incorrect: u32,
        #[case] max_attempts: Option<u32>,
        #[case] admitted: bool,
    ) {
        let filter = SampleFilter {
            max_attempts,
            max_accuracy: None,
        };
        assert_eq!(filter.admits(&progress_with(correct, incorrect), "猫"), admitted);
    }

    #[rstest]
    #[case(0, 0, 0.0, true)]
    #[case(1, 1, 50.0, true)]
    #[case(3, 1, 50.0, false)]
    #[case(0, 4, 0.0, true)]
    fn accuracy_ceiling(
        #[case] correct: u32,
        #[case] incorrect: u32,
        #[case] max_accuracy: f64,
        #[case] admitted: bool,
    ) {
        let filter = SampleFilter {
            max_attempts: None,
            max_accuracy: Some(max_accuracy),
        };
        assert_eq!(filter.admits(&progress_with(correct, incorrect), "猫"), admitted);
    }

    #[test]
    fn filters_are_and_combined() {
        let filter = SampleFilter {
            max_attempts: Some(10),
            max_accuracy: Some(50.0),
        };
        let mut progress = progress_with(4, 0);
        progress.set_count(CounterKind::Incorrect, "犬", 20);

        let kept = filter.apply(vec![word("猫"), word("犬"), word("鳥")], &progress);
        let kept: Vec<&str> = kept.iter().map(|w| w.headword.as_str()).collect();
        assert_eq!(kept, vec!["鳥"]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(0))]
    #[case(Some(-3))]
    fn plan_rejects_missing_or_non_positive_count(#[case] count: Option<i64>) {
        let request = RandomSetRequest {
            count,
            ..RandomSetRequest::default()
        };
        assert!(matches!(
            SamplePlan::from_request(&request),
            Err(EngineError::Validation(_))
        ));
    }

    #[test]
    fn plan_carries_bounds_and_filters() {
        let request = RandomSetRequest {
            count: Some(3),
            start: Some(2),
            end: None,
            max_attempts: Some(1),
            max_accuracy: Some(80.0),
        };
        let plan = SamplePlan::from_request(&request).unwrap();
        assert_eq!(plan.count, 3);
        assert_eq!(plan.start, Some(2));
        assert_eq!(plan.end, None);
        assert_eq!(plan.filter.max_attempts, Some(1));
    }
}
