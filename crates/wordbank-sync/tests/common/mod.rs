#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use wordbank_core::{Analyzer, Transcriber};
use wordbank_fetch::{DefinitionSource, FallbackChain, FetchError, FetchedDefinition, SourceMetadata};
use wordbank_store::WordStore;
use wordbank_sync::{ChangeTracker, IngestionEngine, UpsertCoordinator};
use wordbank_types::Analysis;

pub const STAGING_FILE: &str = "new_words.json";

/// Tags known words, knows nothing about the rest
pub struct Tags(HashMap<String, String>);

impl Tags {
    pub fn of(pairs: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self(
            pairs
                .iter()
                .map(|(word, tag)| (word.to_string(), tag.to_string()))
                .collect(),
        ))
    }
}

impl Analyzer for Tags {
    fn language_code(&self) -> &str {
        "en"
    }

    fn analyze(&self, word: &str) -> Option<Analysis> {
        self.0.get(word).map(|tag| Analysis {
            lemma: word.to_string(),
            tag: tag.clone(),
            entity_type: None,
        })
    }
}

pub struct Syllables;

impl Transcriber for Syllables {
    fn transcribe(&self, word: &str) -> Option<String> {
        Some(word.to_string())
    }
}

pub enum Reply {
    Found(&'static str, Option<&'static str>),
    Nothing,
    Fail,
}

/// Definition source with a fixed answer, optional latency and a call counter
pub struct Scripted {
    name: &'static str,
    reply: Reply,
    delay: Duration,
    calls: AtomicUsize,
}

impl Scripted {
    pub fn new(name: &'static str, reply: Reply) -> Arc<Self> {
        Self::delayed(name, reply, Duration::ZERO)
    }

    pub fn delayed(name: &'static str, reply: Reply, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DefinitionSource for Scripted {
    async fn fetch(&self, _word: &str) -> Result<Option<FetchedDefinition>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.reply {
            Reply::Found(definition, example) => Ok(Some(FetchedDefinition {
                definition: definition.to_string(),
                example: example.map(str::to_string),
                source: self.name.to_string(),
            })),
            Reply::Nothing => Ok(None),
            Reply::Fail => Err(FetchError::Http {
                status: 503,
                source_name: self.name.to_string(),
            }),
        }
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: self.name.to_string(),
            base_url: format!("https://{}.test", self.name),
        }
    }
}

pub fn chain(sources: Vec<Arc<Scripted>>) -> FallbackChain {
    sources
        .into_iter()
        .fold(FallbackChain::new(Duration::from_secs(2)), |chain, source| {
            chain.with_source(source)
        })
}

/// Engine over a temporary data directory and database file
pub struct Harness {
    pub dir: TempDir,
    pub engine: IngestionEngine,
}

impl Harness {
    pub async fn new(analyzer: Arc<dyn Analyzer>, fetchers: FallbackChain) -> Self {
        Self::with_staging(analyzer, fetchers, None).await
    }

    /// Like [`Harness::new`] but with the staging file somewhere else
    pub async fn with_staging(
        analyzer: Arc<dyn Analyzer>,
        fetchers: FallbackChain,
        staging: Option<PathBuf>,
    ) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("language");
        std::fs::create_dir_all(&data_dir).unwrap();

        let store = Arc::new(WordStore::open(&dir.path().join("words.db"), 4).await.unwrap());
        let transcriber: Arc<dyn Transcriber> = Arc::new(Syllables);

        let coordinator = Arc::new(UpsertCoordinator::new(
            store,
            analyzer.clone(),
            transcriber.clone(),
            fetchers,
        ));
        let staging = staging.unwrap_or_else(|| data_dir.join(STAGING_FILE));
        let tracker = Arc::new(ChangeTracker::new(staging, analyzer, transcriber));
        let engine = IngestionEngine::new(coordinator, tracker, &data_dir, STAGING_FILE, 4);

        Self { dir, engine }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("language")
    }

    pub fn staging_path(&self) -> PathBuf {
        self.data_dir().join(STAGING_FILE)
    }

    pub fn write_source(&self, name: &str, json: &str) {
        std::fs::write(self.data_dir().join(name), json).unwrap();
    }

    pub fn store(&self) -> &Arc<WordStore> {
        self.engine.store()
    }
}
