//! File-backed persistence: state survives closing and reopening the database.

use kotoba_core::entities::WordRecord;
use kotoba_core::enums::CounterKind;
use kotoba_db::service::KotobaService;

#[tokio::test]
async fn sets_and_progress_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kotoba.db");
    let path = path.to_str().unwrap();

    {
        let svc = KotobaService::new_local(path).await.unwrap();
        svc.upsert_word_set("7", "猫,cat,ねこ,neko").await.unwrap();
        svc.replace_vocabulary(vec![WordRecord {
            id: "wrd-1".into(),
            headword: "猫".into(),
            fields: vec!["cat".into()],
            origin_set: Some("7".into()),
            origin_line: Some(1),
        }])
        .await
        .unwrap();
        svc.set_counter(CounterKind::Correct, "猫", 4).await.unwrap();
    }

    let svc = KotobaService::new_local(path).await.unwrap();
    let set = svc.get_word_set("7").await.unwrap().expect("set persisted");
    assert_eq!(set.content, "猫,cat,ねこ,neko");

    let progress = svc.get_progress().await.unwrap();
    assert_eq!(progress.vocabulary.len(), 1);
    assert_eq!(progress.vocabulary[0].origin_line, Some(1));
    assert_eq!(progress.count(CounterKind::Correct, "猫"), 4);
}
