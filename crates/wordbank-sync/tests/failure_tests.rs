mod common;

use common::{Harness, Tags};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wordbank_fetch::FallbackChain;
use wordbank_store::WordStore;
use wordbank_sync::SyncError;
use wordbank_types::PartOfSpeech;

#[tokio::test]
async fn storage_error_stops_the_pass_and_keeps_staged_words() {
    let tags = Tags::of(&[("run", "VERB"), ("walk", "VERB")]);
    let harness = Harness::new(tags, FallbackChain::empty()).await;
    harness.write_source("first.json", r#"{ "run": { "definition": "to move fast" } }"#);
    harness.engine.run().await.unwrap();

    // Drop the verbs table behind the store's back
    let db_path = harness.dir.path().join("words.db");
    let raw = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(&db_path))
        .await
        .unwrap();
    sqlx::query("DROP TABLE verbs").execute(&raw).await.unwrap();
    raw.close().await;

    harness.write_source("second.json", r#"{ "walk": { "definition": "to move on foot" } }"#);
    harness.engine.tracker().stage("glim", "a faint light").await;

    let err = harness.engine.run().await.unwrap_err();
    assert!(matches!(err, SyncError::Store(_)), "unexpected error: {err:?}");

    // the failed word left nothing behind, earlier words are untouched
    let store = harness.store();
    assert!(!store.exists("walk").await.unwrap());
    let run = store.get("run").await.unwrap().unwrap();
    assert_eq!(run.definition.as_deref(), Some("to move fast"));
    assert_eq!(run.pos, PartOfSpeech::Verb);

    let staged = harness.engine.tracker().staged().await;
    assert_eq!(
        staged.get("glim").and_then(|e| e.definition.as_deref()),
        Some("a faint light")
    );
}

#[tokio::test]
async fn closed_store_fails_backfill_and_keeps_committed_rows() {
    let harness = Harness::new(Tags::of(&[("run", "VERB")]), FallbackChain::empty()).await;
    harness.write_source("words.json", r#"{ "run": { "definition": null } }"#);
    harness.engine.run().await.unwrap();

    harness.store().close().await;

    let err = harness.engine.backfill().await.unwrap_err();
    assert!(matches!(err, SyncError::Store(_)), "unexpected error: {err:?}");

    let reopened = WordStore::open(&harness.dir.path().join("words.db"), 1)
        .await
        .unwrap();
    let run = reopened.get("run").await.unwrap().unwrap();
    assert_eq!(run.pos, PartOfSpeech::Verb);
    assert!(run.definition.is_none());
    reopened.close().await;
}
