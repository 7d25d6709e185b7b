//! End-to-end engine behavior against an in-memory store.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use kotoba_core::entities::WordRecord;
use kotoba_core::enums::CounterKind;
use kotoba_core::requests::RandomSetRequest;
use kotoba_db::service::KotobaService;
use kotoba_engine::{EngineError, SetParser, VocabEngine};

async fn engine() -> VocabEngine {
    let service = KotobaService::new_local(":memory:").await.unwrap();
    VocabEngine::new(service, SetParser::default())
}

/// Ten numbered sets `1`..=`10`, one word each (`w1`..`w10`).
async fn engine_with_ten_sets() -> VocabEngine {
    let engine = engine().await;
    for n in 1..=10 {
        engine
            .register_set(&n.to_string(), &format!("w{n},gloss,reading,romaji"))
            .await
            .unwrap();
    }
    engine
}

fn headwords(words: &[WordRecord]) -> Vec<&str> {
    words.iter().map(|w| w.headword.as_str()).collect()
}

#[tokio::test]
async fn import_then_reimport_dedups() {
    let engine = engine().await;
    engine
        .register_set("1", "猫,cat,ねこ,neko\n犬,dog,いぬ,inu")
        .await
        .unwrap();

    let first = engine.import_set("1", true).await.unwrap();
    assert_eq!(first.added, 2);
    assert_eq!(first.set_key.as_deref(), Some("1"));

    let second = engine.import_set("1", true).await.unwrap();
    assert_eq!(second.added, 0);
    assert_eq!(second.skipped, 2);

    let progress = engine.progress().await.unwrap();
    assert_eq!(headwords(&progress.vocabulary), vec!["猫", "犬"]);
    assert!(progress.imported_sets.contains("1"));
}

#[tokio::test]
async fn import_without_dedup_keeps_duplicates() {
    let engine = engine().await;
    engine.register_set("1", "猫,cat,ねこ,neko").await.unwrap();
    engine.register_set("2", "猫,cat,ねこ,neko").await.unwrap();

    engine.import_set("1", true).await.unwrap();
    let outcome = engine.import_set("2", false).await.unwrap();

    assert_eq!(outcome.added, 1);
    assert_eq!(engine.progress().await.unwrap().vocabulary.len(), 2);
}

#[tokio::test]
async fn import_unknown_set_is_not_found() {
    let engine = engine().await;
    let err = engine.import_set("404", true).await.unwrap_err();
    assert!(matches!(err, EngineError::SetNotFound { key } if key == "404"));
}

#[tokio::test]
async fn register_rejects_blank_fields() {
    let engine = engine().await;
    assert!(matches!(
        engine.register_set("", "猫,cat,ねこ,neko").await,
        Err(EngineError::Validation(_))
    ));
    assert!(matches!(
        engine.register_set("1", "  \n").await,
        Err(EngineError::Validation(_))
    ));
}

#[tokio::test]
async fn import_range_skips_already_imported_sets() {
    let engine = engine_with_ten_sets().await;
    engine.import_set("3", true).await.unwrap();

    let outcome = engine.import_range(Some(2), Some(4), true).await.unwrap();

    assert_eq!(outcome.imported, vec!["2", "4"]);
    assert_eq!(outcome.added, 2);
    let progress = engine.progress().await.unwrap();
    assert_eq!(headwords(&progress.vocabulary), vec!["w3", "w2", "w4"]);
    assert_eq!(progress.imported_sets.len(), 3);
}

#[tokio::test]
async fn import_range_rejects_inverted_bounds() {
    let engine = engine().await;
    assert!(matches!(
        engine.import_range(Some(5), Some(1), true).await,
        Err(EngineError::Validation(_))
    ));
}

#[tokio::test]
async fn empty_range_is_not_an_error() {
    let engine = engine_with_ten_sets().await;
    let outcome = engine.import_range(Some(50), Some(60), true).await.unwrap();
    assert!(outcome.imported.is_empty());
    assert_eq!(outcome.added, 0);
}

#[tokio::test]
async fn import_range_without_bounds_takes_every_set() {
    let engine = engine_with_ten_sets().await;
    engine
        .register_set("bonus", "魚,fish,さかな,sakana")
        .await
        .unwrap();
    engine.import_set("1", true).await.unwrap();

    let outcome = engine.import_range(None, None, true).await.unwrap();

    assert_eq!(outcome.imported.len(), 10);
    assert_eq!(outcome.imported.last().map(String::as_str), Some("bonus"));
    assert!(!outcome.imported.contains(&"1".to_string()));
    let progress = engine.progress().await.unwrap();
    assert_eq!(progress.imported_sets.len(), 11);
}

#[tokio::test]
async fn import_range_with_one_bound_is_open_ended() {
    let engine = engine_with_ten_sets().await;
    engine
        .register_set("bonus", "魚,fish,さかな,sakana")
        .await
        .unwrap();

    let outcome = engine.import_range(Some(9), None, true).await.unwrap();
    assert_eq!(outcome.imported, vec!["9", "10"]);
}

#[tokio::test]
async fn add_words_parses_free_text() {
    let engine = engine().await;
    let outcome = engine
        .add_words("猫,cat,ねこ,neko\nbad line\n猫,cat,ねこ,neko", true)
        .await
        .unwrap();

    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.skipped, 1);
    assert!(outcome.set_key.is_none());
    assert!(engine.progress().await.unwrap().imported_sets.is_empty());
}

#[tokio::test]
async fn random_set_samples_requested_count() {
    let engine = engine_with_ten_sets().await;
    engine.import_set("1", true).await.unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let request = RandomSetRequest {
        count: Some(3),
        ..RandomSetRequest::default()
    };
    let response = engine.random_set_with_rng(&request, &mut rng).await.unwrap();

    assert_eq!(response.pool_size, 10);
    assert_eq!(response.sampled, 3);
    assert_eq!(response.progress.vocabulary.len(), 3);
    assert!(response.progress.imported_sets.is_empty());
    assert_eq!(engine.progress().await.unwrap(), response.progress);
}

#[tokio::test]
async fn random_set_respects_range() {
    let engine = engine_with_ten_sets().await;

    let request = RandomSetRequest {
        count: Some(100),
        start: Some(8),
        ..RandomSetRequest::default()
    };
    let response = engine.random_set(&request).await.unwrap();

    let mut words = headwords(&response.progress.vocabulary);
    words.sort_unstable();
    assert_eq!(words, vec!["w10", "w8", "w9"]);
}

#[tokio::test]
async fn random_set_with_everything_attempted_is_no_match() {
    let engine = engine_with_ten_sets().await;
    engine.import_set("1", true).await.unwrap();
    for n in 1..=10 {
        engine
            .set_counter(CounterKind::Correct, &format!("w{n}"), 1)
            .await
            .unwrap();
    }
    let before = engine.progress().await.unwrap();

    let request = RandomSetRequest {
        count: Some(3),
        max_attempts: Some(0),
        ..RandomSetRequest::default()
    };
    let err = engine.random_set(&request).await.unwrap_err();

    assert!(matches!(err, EngineError::NoMatchingWords));
    assert_eq!(engine.progress().await.unwrap(), before);
}

#[tokio::test]
async fn random_set_rejects_bad_count() {
    let engine = engine_with_ten_sets().await;
    let request = RandomSetRequest {
        count: Some(0),
        ..RandomSetRequest::default()
    };
    assert!(matches!(
        engine.random_set(&request).await,
        Err(EngineError::Validation(_))
    ));
}

#[tokio::test]
async fn statistics_track_counters() {
    let engine = engine().await;
    engine
        .register_set("1", "猫,cat,ねこ,neko\n犬,dog,いぬ,inu")
        .await
        .unwrap();
    engine.set_counter(CounterKind::Incorrect, "猫", 2).await.unwrap();

    let stats = engine.set_statistics(0).await.unwrap();
    assert_eq!(stats.get("1"), Some(&1));
    let stats = engine.set_statistics(2).await.unwrap();
    assert_eq!(stats.get("1"), Some(&2));
}

#[tokio::test]
async fn search_and_add_prepends_tagged_lines() {
    let engine = engine().await;
    engine
        .register_set("1", "犬,dog,いぬ,inu\n猫,cat,ねこ,neko")
        .await
        .unwrap();
    engine
        .register_set("2", "子猫,kitten,こねこ,koneko")
        .await
        .unwrap();
    engine.add_words("鳥,bird,とり,tori", true).await.unwrap();

    let response = engine.search_and_add("猫").await.unwrap();

    assert_eq!(response.added, 2);
    assert_eq!(response.added_words[0].origin_set.as_deref(), Some("1"));
    assert_eq!(response.added_words[0].origin_line, Some(2));
    let progress = engine.progress().await.unwrap();
    assert_eq!(headwords(&progress.vocabulary), vec!["猫", "子猫", "鳥"]);
    assert!(progress.imported_sets.is_empty());

    let again = engine.search_and_add("猫").await.unwrap();
    assert_eq!(again.added, 0);
    assert_eq!(again.skipped, 2);
}

#[tokio::test]
async fn search_sets_is_case_insensitive() {
    let engine = engine().await;
    engine.register_set("2", "猫,Cat,ねこ,neko").await.unwrap();
    engine.register_set("1", "犬,dog,いぬ,inu").await.unwrap();

    assert_eq!(engine.search_sets("CAT").await.unwrap(), vec!["2"]);
    assert!(matches!(
        engine.search_sets(" ").await,
        Err(EngineError::Validation(_))
    ));
}

#[tokio::test]
async fn delete_and_reset() {
    let engine = engine().await;
    engine
        .add_words("猫,cat,ねこ,neko\n犬,dog,いぬ,inu", true)
        .await
        .unwrap();
    engine.set_counter(CounterKind::Correct, "猫", 5).await.unwrap();
    let id = engine.progress().await.unwrap().vocabulary[0].id.clone();

    assert!(engine.delete_word(&id).await.unwrap().removed);
    assert!(!engine.delete_word(&id).await.unwrap().removed);

    let progress = engine.reset().await.unwrap();
    assert!(progress.vocabulary.is_empty());
    assert_eq!(progress.count(CounterKind::Correct, "猫"), 5);
}

#[tokio::test]
async fn counter_requires_word() {
    let engine = engine().await;
    assert!(matches!(
        engine.set_counter(CounterKind::Correct, " ", 1).await,
        Err(EngineError::Validation(_))
    ));
}

#[tokio::test]
async fn replace_vocabulary_keeps_given_order() {
    let engine = engine().await;
    engine
        .add_words("猫,cat,ねこ,neko\n犬,dog,いぬ,inu", true)
        .await
        .unwrap();
    let mut words = engine.progress().await.unwrap().vocabulary;
    words.reverse();

    let progress = engine.replace_vocabulary(words.clone()).await.unwrap();
    assert_eq!(progress.vocabulary, words);
}
