mod common;

use common::{Harness, Reply, Scripted, Tags, chain};
use wordbank_fetch::FallbackChain;
use wordbank_store::UpsertOutcome;
use wordbank_types::PartOfSpeech;

#[tokio::test]
async fn learned_word_is_stored_and_staging_cleared() {
    let source = Scripted::new("primary", Reply::Found("should not be used", None));
    let harness = Harness::new(Tags::of(&[("zorp", "VERB")]), chain(vec![source.clone()])).await;

    let outcome = harness.engine.learn("zorp", "to make a strange noise").await.unwrap();

    assert_eq!(outcome, UpsertOutcome::Inserted);
    assert_eq!(source.calls(), 0);

    let record = harness.store().get("zorp").await.unwrap().unwrap();
    assert_eq!(record.definition.as_deref(), Some("to make a strange noise"));
    assert_eq!(record.pos, PartOfSpeech::Verb);
    assert_eq!(record.lemma.as_deref(), Some("zorp"));

    assert!(harness.engine.tracker().staged().await.is_empty());
}

#[tokio::test]
async fn staged_words_are_picked_up_by_the_next_pass() {
    let harness = Harness::new(Tags::of(&[]), FallbackChain::empty()).await;
    harness.write_source("words.json", r#"{ "glim": { "definition": "from a file" } }"#);

    harness
        .engine
        .tracker()
        .stage("glim", "from the user")
        .await;
    assert!(harness.staging_path().exists());

    let report = harness.engine.run().await.unwrap();

    assert_eq!(report.staged_merged, 1);
    let record = harness.store().get("glim").await.unwrap().unwrap();
    assert_eq!(record.definition.as_deref(), Some("from the user"));
    assert!(harness.engine.tracker().staged().await.is_empty());
}

#[tokio::test]
async fn unwritable_staging_still_learns() {
    let blocked = tempfile::tempdir().unwrap();
    let staging = blocked.path().join("staging");
    std::fs::create_dir(&staging).unwrap();

    let harness = Harness::with_staging(Tags::of(&[]), FallbackChain::empty(), Some(staging)).await;

    let outcome = harness.engine.learn("quib", "a small joke").await.unwrap();

    assert_eq!(outcome, UpsertOutcome::Inserted);
    let record = harness.store().get("quib").await.unwrap().unwrap();
    assert_eq!(record.definition.as_deref(), Some("a small joke"));
}

#[tokio::test]
async fn learning_a_known_word_keeps_the_stored_definition() {
    let harness = Harness::new(Tags::of(&[]), FallbackChain::empty()).await;
    harness.write_source("words.json", r#"{ "run": { "definition": "to move fast" } }"#);
    harness.engine.run().await.unwrap();

    let outcome = harness.engine.learn("run", "something else").await.unwrap();

    // only the missing lemma is filled in
    assert_eq!(outcome, UpsertOutcome::Updated);
    let record = harness.store().get("run").await.unwrap().unwrap();
    assert_eq!(record.definition.as_deref(), Some("to move fast"));
    assert_eq!(record.lemma.as_deref(), Some("run"));
}

#[tokio::test]
async fn file_and_learned_spellings_share_one_row() {
    let harness = Harness::new(Tags::of(&[("run", "VERB")]), FallbackChain::empty()).await;
    harness.write_source("words.json", r#"{ "Run": { "definition": null } }"#);
    harness.engine.run().await.unwrap();

    let outcome = harness.engine.learn("RUN ", "to move fast").await.unwrap();

    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(harness.store().count().await.unwrap(), 1);
    let record = harness.store().get("run").await.unwrap().unwrap();
    assert_eq!(record.definition.as_deref(), Some("to move fast"));
    assert_eq!(record.pos, PartOfSpeech::Verb);
}
