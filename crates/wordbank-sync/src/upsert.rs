use std::sync::Arc;

use wordbank_core::{Analyzer, Transcriber};
use wordbank_fetch::FallbackChain;
use wordbank_store::{StoreError, UpsertOutcome, WordStore, WordUpsert};
use wordbank_types::{PartOfSpeech, WordRecord};

use crate::lock::WordLocks;
use crate::source::SourceEntry;

/// A word waiting to be written, with whatever is already known about it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingWord {
    pub word: String,
    pub lemma: Option<String>,
    pub pos: Option<PartOfSpeech>,
    pub definition: Option<String>,
    pub ipa: Option<String>,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub origin: Option<String>,
}

impl PendingWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    pub fn from_entry(word: impl Into<String>, entry: SourceEntry) -> Self {
        Self {
            word: word.into(),
            lemma: entry.lemma,
            pos: entry.pos.as_deref().and_then(PartOfSpeech::from_tag),
            definition: entry.definition.filter(|d| !d.trim().is_empty()),
            ipa: entry.ipa,
            example: entry.example,
            synonyms: entry.synonyms,
            antonyms: entry.antonyms,
            origin: entry.origin,
        }
    }

    /// Re-enrich a stored record; stored values stay authoritative
    pub fn from_record(record: WordRecord) -> Self {
        Self {
            word: record.word,
            lemma: record.lemma,
            pos: Some(record.pos),
            ..Default::default()
        }
    }
}

/// Insert-or-fill for single words, with at most one upsert in flight per word
pub struct UpsertCoordinator {
    store: Arc<WordStore>,
    analyzer: Arc<dyn Analyzer>,
    transcriber: Arc<dyn Transcriber>,
    fetchers: FallbackChain,
    locks: WordLocks,
}

impl UpsertCoordinator {
    pub fn new(
        store: Arc<WordStore>,
        analyzer: Arc<dyn Analyzer>,
        transcriber: Arc<dyn Transcriber>,
        fetchers: FallbackChain,
    ) -> Self {
        Self {
            store,
            analyzer,
            transcriber,
            fetchers,
            locks: WordLocks::new(),
        }
    }

    pub fn store(&self) -> &Arc<WordStore> {
        &self.store
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    pub fn transcriber(&self) -> &Arc<dyn Transcriber> {
        &self.transcriber
    }

    /// Classify, enrich and write one word.
    ///
    /// An existing definition is never replaced and suppresses fetching.
    /// Transcription is filled independently. Fetch failures leave the
    /// definition NULL for a later backfill; storage errors are returned.
    pub async fn upsert(&self, pending: PendingWord) -> Result<UpsertOutcome, StoreError> {
        let _guard = self.locks.lock(&pending.word).await;
        let word = pending.word.as_str();

        let mut analysis = None;
        let pos = match self.store.category_of(word).await? {
            Some(recorded) => recorded,
            None => match pending.pos {
                Some(pos) => pos,
                None => {
                    analysis = self.analyzer.analyze(word);
                    analysis
                        .as_ref()
                        .and_then(|a| a.pos())
                        .unwrap_or(PartOfSpeech::FALLBACK)
                }
            },
        };

        let existing = self.store.category_row(word, pos).await?;
        let has_definition = existing.as_ref().is_some_and(|r| r.definition.is_some());
        let has_ipa = existing.as_ref().is_some_and(|r| r.ipa.is_some());
        let has_lemma = existing.as_ref().is_some_and(|r| r.lemma.is_some());

        let mut fields = WordUpsert::new(word, pos);
        fields.synonyms = pending.synonyms.clone();
        fields.antonyms = pending.antonyms.clone();
        fields.origin = pending.origin.clone();

        if !has_lemma {
            fields.lemma = pending.lemma.clone().or_else(|| {
                analysis
                    .or_else(|| self.analyzer.analyze(word))
                    .map(|a| a.lemma)
            });
        }

        if has_definition {
            tracing::debug!(word, "Definition already stored, skipping lookup");
        } else if let Some(definition) = pending.definition.clone() {
            fields.definition = Some(definition);
            fields.example = pending.example.clone();
        } else if let Some(found) = self.fetchers.resolve(word).await {
            fields.definition = Some(found.definition);
            fields.example = found.example.or_else(|| pending.example.clone());
        } else {
            tracing::debug!(word, "No definition found, leaving for backfill");
        }

        if !has_ipa {
            fields.ipa = pending.ipa.clone().or_else(|| self.transcriber.transcribe(word));
        }

        match self.store.upsert(&fields).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                tracing::error!(word, "Failed to store word: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use wordbank_fetch::{DefinitionSource, FetchError, FetchedDefinition, SourceMetadata};
    use wordbank_types::Analysis;

    struct TagAs(&'static str);

    impl Analyzer for TagAs {
        fn language_code(&self) -> &str {
            "en"
        }

        fn analyze(&self, word: &str) -> Option<Analysis> {
            Some(Analysis {
                lemma: word.to_string(),
                tag: self.0.to_string(),
                entity_type: None,
            })
        }
    }

    struct Echo;

    impl Transcriber for Echo {
        fn transcribe(&self, word: &str) -> Option<String> {
            Some(format!("/{word}/"))
        }
    }

    struct NoTranscription;

    impl Transcriber for NoTranscription {
        fn transcribe(&self, _word: &str) -> Option<String> {
            None
        }
    }

    struct Counting {
        text: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DefinitionSource for Counting {
        async fn fetch(&self, _word: &str) -> Result<Option<FetchedDefinition>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(FetchedDefinition {
                definition: self.text.to_string(),
                example: None,
                source: "counting".to_string(),
            }))
        }

        fn metadata(&self) -> SourceMetadata {
            SourceMetadata {
                name: "counting".to_string(),
                base_url: String::new(),
            }
        }
    }

    async fn coordinator(
        tag: &'static str,
        transcriber: Arc<dyn Transcriber>,
        source: Arc<Counting>,
    ) -> UpsertCoordinator {
        let store = Arc::new(WordStore::in_memory().await.unwrap());
        let fetchers = FallbackChain::new(Duration::from_secs(1)).with_source(source);
        UpsertCoordinator::new(store, Arc::new(TagAs(tag)), transcriber, fetchers)
    }

    fn counting(text: &'static str) -> Arc<Counting> {
        Arc::new(Counting {
            text,
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn provided_definition_skips_fetch() {
        let source = counting("fetched");
        let coordinator = coordinator("VERB", Arc::new(Echo), source.clone()).await;

        let mut pending = PendingWord::new("run");
        pending.definition = Some("to move fast".to_string());
        let outcome = coordinator.upsert(pending).await.unwrap();

        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);

        let record = coordinator.store().get("run").await.unwrap().unwrap();
        assert_eq!(record.definition.as_deref(), Some("to move fast"));
        assert_eq!(record.pos, PartOfSpeech::Verb);
        assert_eq!(record.ipa.as_deref(), Some("/run/"));
    }

    #[tokio::test]
    async fn stored_definition_suppresses_enrichment() {
        let source = counting("fetched");
        let coordinator = coordinator("NOUN", Arc::new(NoTranscription), source.clone()).await;

        coordinator.upsert(PendingWord::new("tree")).await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        let mut again = PendingWord::new("tree");
        again.definition = Some("changed".to_string());
        coordinator.upsert(again).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        let record = coordinator.store().get("tree").await.unwrap().unwrap();
        assert_eq!(record.definition.as_deref(), Some("fetched"));
    }

    #[tokio::test]
    async fn unknown_tag_lands_in_adjectives() {
        let coordinator = coordinator("???", Arc::new(Echo), counting("x")).await;

        coordinator.upsert(PendingWord::new("blorp")).await.unwrap();

        let store = coordinator.store();
        assert_eq!(
            store.category_of("blorp").await.unwrap(),
            Some(PartOfSpeech::Adjective)
        );
        assert!(
            store
                .category_row("blorp", PartOfSpeech::Adjective)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn recorded_category_beats_new_hint() {
        let coordinator = coordinator("VERB", Arc::new(Echo), counting("x")).await;
        coordinator.upsert(PendingWord::new("run")).await.unwrap();

        let mut hinted = PendingWord::new("run");
        hinted.pos = Some(PartOfSpeech::Noun);
        coordinator.upsert(hinted).await.unwrap();

        let store = coordinator.store();
        assert_eq!(store.category_of("run").await.unwrap(), Some(PartOfSpeech::Verb));
        assert_eq!(store.category_count(PartOfSpeech::Noun).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn transcription_fills_in_later_without_refetch() {
        let source = counting("fetched");
        let store = Arc::new(WordStore::in_memory().await.unwrap());
        let fetchers = FallbackChain::new(Duration::from_secs(1)).with_source(source.clone());

        let first = UpsertCoordinator::new(
            store.clone(),
            Arc::new(TagAs("NOUN")),
            Arc::new(NoTranscription),
            fetchers.clone(),
        );
        first.upsert(PendingWord::new("tree")).await.unwrap();
        assert!(store.get("tree").await.unwrap().unwrap().ipa.is_none());

        let second =
            UpsertCoordinator::new(store.clone(), Arc::new(TagAs("NOUN")), Arc::new(Echo), fetchers);
        let outcome = second.upsert(PendingWord::new("tree")).await.unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        let record = store.get("tree").await.unwrap().unwrap();
        assert_eq!(record.ipa.as_deref(), Some("/tree/"));
        assert_eq!(record.definition.as_deref(), Some("fetched"));
    }
}
