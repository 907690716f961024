mod common;

use std::collections::BTreeMap;
use std::time::Duration;

use common::{Harness, Reply, Scripted, Tags, chain};
use wordbank_fetch::FallbackChain;
use wordbank_store::{UpsertOutcome, WordUpsert};
use wordbank_sync::{PendingWord, SourceEntry};
use wordbank_types::PartOfSpeech;

#[tokio::test]
async fn null_definition_is_fetched_and_classified() {
    let primary = Scripted::new("primary", Reply::Found("to move fast", Some("he ran")));
    let secondary = Scripted::new("secondary", Reply::Fail);
    let harness = Harness::new(
        Tags::of(&[("run", "VERB")]),
        chain(vec![primary.clone(), secondary.clone()]),
    )
    .await;
    harness.write_source("words.json", r#"{ "run": { "definition": null } }"#);

    let report = harness.engine.run().await.unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 0);

    let store = harness.store();
    assert_eq!(store.category_of("run").await.unwrap(), Some(PartOfSpeech::Verb));
    let row = store
        .category_row("run", PartOfSpeech::Verb)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.definition.as_deref(), Some("to move fast"));

    let record = store.get("run").await.unwrap().unwrap();
    assert_eq!(record.example.as_deref(), Some("he ran"));
    assert_eq!(record.ipa.as_deref(), Some("run"));
}

#[tokio::test]
async fn falls_back_when_first_source_fails() {
    let primary = Scripted::new("primary", Reply::Fail);
    let secondary = Scripted::new("secondary", Reply::Found("from the second", None));
    let harness = Harness::new(Tags::of(&[]), chain(vec![primary.clone(), secondary.clone()])).await;
    harness.write_source("words.json", r#"{ "zyzzyva": {} }"#);

    harness.engine.run().await.unwrap();

    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 1);
    let record = harness.store().get("zyzzyva").await.unwrap().unwrap();
    assert_eq!(record.definition.as_deref(), Some("from the second"));
    assert_eq!(record.pos, PartOfSpeech::Adjective);
}

#[tokio::test]
async fn nothing_found_leaves_definition_empty_for_backfill() {
    let source = Scripted::new("primary", Reply::Nothing);
    let harness = Harness::new(Tags::of(&[("tree", "NOUN")]), chain(vec![source.clone()])).await;
    harness.write_source("words.json", r#"{ "tree": null }"#);

    let report = harness.engine.run().await.unwrap();
    assert_eq!(report.inserted, 1);

    let store = harness.store();
    assert!(store.get("tree").await.unwrap().unwrap().definition.is_none());
    assert_eq!(store.incomplete().await.unwrap().len(), 1);

    let again = harness.engine.backfill().await.unwrap();
    assert_eq!(again.backfill_words, 1);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn second_pass_is_a_no_op() {
    let source = Scripted::new("primary", Reply::Found("fetched", None));
    let harness = Harness::new(
        Tags::of(&[("run", "VERB"), ("tree", "NOUN")]),
        chain(vec![source.clone()]),
    )
    .await;
    harness.write_source(
        "words.json",
        r#"{ "run": { "definition": "to move fast" }, "tree": {} }"#,
    );

    let first = harness.engine.run().await.unwrap();
    assert_eq!(first.inserted, 2);

    let second = harness.engine.run().await.unwrap();
    assert_eq!(second.words_seen, 2);
    assert_eq!(second.new_words, 0);
    assert_eq!(second.backfill_words, 0);
    assert_eq!(second.inserted + second.updated, 0);
    assert_eq!(source.calls(), 1);
    assert_eq!(harness.store().count().await.unwrap(), 2);
}

#[tokio::test]
async fn stored_definition_survives_source_edits() {
    let harness = Harness::new(Tags::of(&[("run", "VERB")]), FallbackChain::empty()).await;
    harness.write_source("words.json", r#"{ "run": { "definition": "first" } }"#);
    harness.engine.run().await.unwrap();

    harness.write_source("words.json", r#"{ "run": { "definition": "second" } }"#);
    harness.engine.run().await.unwrap();

    let record = harness.store().get("run").await.unwrap().unwrap();
    assert_eq!(record.definition.as_deref(), Some("first"));
}

#[tokio::test]
async fn plan_partitions_against_store() {
    let harness = Harness::new(Tags::of(&[]), FallbackChain::empty()).await;
    let store = harness.store();

    store.upsert(&WordUpsert::new("b", PartOfSpeech::Noun)).await.unwrap();
    let mut complete = WordUpsert::new("d", PartOfSpeech::Noun);
    complete.definition = Some("done".to_string());
    complete.ipa = Some("d".to_string());
    store.upsert(&complete).await.unwrap();

    let entries: BTreeMap<String, SourceEntry> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|word| (word.to_string(), SourceEntry::default()))
        .collect();
    let plan = harness.engine.plan(entries).await.unwrap();

    let new: Vec<_> = plan.new.iter().map(|p| p.word.as_str()).collect();
    let backfill: Vec<_> = plan.backfill.iter().map(|p| p.word.as_str()).collect();
    assert_eq!(new, ["a", "c"]);
    assert_eq!(backfill, ["b"]);
    assert_eq!(plan.complete, 1);
    assert!(plan.new.iter().all(|p| p.pos == Some(PartOfSpeech::Adjective)));
}

#[tokio::test]
async fn category_from_file_beats_analysis() {
    let harness = Harness::new(Tags::of(&[("light", "ADJ")]), FallbackChain::empty()).await;
    harness.write_source(
        "words.json",
        r#"{ "light": { "definition": "visible radiation", "pos": "Noun" } }"#,
    );

    harness.engine.run().await.unwrap();

    let store = harness.store();
    assert_eq!(store.category_of("light").await.unwrap(), Some(PartOfSpeech::Noun));
    assert_eq!(store.category_count(PartOfSpeech::Adjective).await.unwrap(), 0);
}

#[tokio::test]
async fn relations_are_stored() {
    let harness = Harness::new(Tags::of(&[("big", "ADJ")]), FallbackChain::empty()).await;
    harness.write_source(
        "words.json",
        r#"{ "big": {
            "definition": "of great size",
            "synonyms": ["large", "huge"],
            "antonyms": ["small"],
            "origin": "Middle English"
        } }"#,
    );

    harness.engine.run().await.unwrap();

    let store = harness.store();
    assert_eq!(store.synonyms("big").await.unwrap(), ["huge", "large"]);
    assert_eq!(store.antonyms("big").await.unwrap(), ["small"]);
    assert_eq!(store.origins("big").await.unwrap(), ["Middle English"]);
}

#[tokio::test]
async fn malformed_file_is_skipped() {
    let harness = Harness::new(Tags::of(&[]), FallbackChain::empty()).await;
    harness.write_source("a.json", "{ broken");
    harness.write_source("b.json", r#"{ "ok": { "definition": "fine" } }"#);

    let report = harness.engine.run().await.unwrap();

    assert_eq!(report.files_read, 1);
    assert_eq!(report.files_skipped, 1);
    assert_eq!(report.inserted, 1);
    assert!(harness.store().exists("ok").await.unwrap());
}

#[tokio::test]
async fn empty_directory_is_a_no_op() {
    let harness = Harness::new(Tags::of(&[]), FallbackChain::empty()).await;

    let report = harness.engine.run().await.unwrap();

    assert_eq!(report.words_seen, 0);
    assert_eq!(report.inserted, 0);
    assert_eq!(harness.store().count().await.unwrap(), 0);
}

#[tokio::test]
async fn concurrent_upserts_of_one_word_write_once() {
    let source = Scripted::delayed(
        "slow",
        Reply::Found("to move fast", None),
        Duration::from_millis(50),
    );
    let harness = Harness::new(Tags::of(&[("run", "VERB")]), chain(vec![source.clone()])).await;
    let coordinator = harness.engine.coordinator().clone();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..6 {
        let coordinator = coordinator.clone();
        tasks.spawn(async move { coordinator.upsert(PendingWord::new("run")).await });
    }

    let mut outcomes = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined.unwrap().unwrap());
    }

    assert_eq!(
        outcomes.iter().filter(|o| **o == UpsertOutcome::Inserted).count(),
        1
    );
    assert_eq!(source.calls(), 1);

    let store = harness.store();
    assert_eq!(store.count().await.unwrap(), 1);
    assert_eq!(store.category_count(PartOfSpeech::Verb).await.unwrap(), 1);
}

#[tokio::test]
async fn many_words_run_concurrently() {
    let source = Scripted::delayed("slow", Reply::Found("defined", None), Duration::from_millis(20));
    let harness = Harness::new(Tags::of(&[]), chain(vec![source])).await;

    let json = (0..20)
        .map(|i| format!(r#""word{i}": null"#))
        .collect::<Vec<_>>()
        .join(", ");
    harness.write_source("words.json", &format!("{{ {json} }}"));

    let report = harness.engine.run().await.unwrap();

    assert_eq!(report.inserted, 20);
    assert_eq!(harness.store().defined().await.unwrap().len(), 20);
}
