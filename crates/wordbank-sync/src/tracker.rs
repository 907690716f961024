use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use wordbank_core::{Analyzer, Transcriber};
use wordbank_store::UpsertOutcome;

use crate::error::{SourceError, SyncError};
use crate::ingest::IngestionEngine;
use crate::source::{self, SourceEntry};
use crate::upsert::PendingWord;

/// Records words a user defined by hand.
///
/// Entries go to a staging file (a `word -> entry` mapping, last write wins)
/// and are merged into the store on the next ingestion pass. When the file
/// cannot be read or written the entry is kept in memory for the session.
pub struct ChangeTracker {
    path: PathBuf,
    analyzer: Arc<dyn Analyzer>,
    transcriber: Arc<dyn Transcriber>,
    memory: Mutex<BTreeMap<String, SourceEntry>>,
}

impl ChangeTracker {
    pub fn new(
        path: impl Into<PathBuf>,
        analyzer: Arc<dyn Analyzer>,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            path: path.into(),
            analyzer,
            transcriber,
            memory: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stage a user definition: compute lemma and transcription, then merge
    /// into the staging file
    pub async fn stage(&self, word: &str, definition: &str) -> SourceEntry {
        let word = source::normalize_word(word);
        let word = word.as_str();
        let analysis = self.analyzer.analyze(word);

        let entry = SourceEntry {
            definition: Some(definition.trim().to_string()),
            lemma: Some(
                analysis
                    .as_ref()
                    .map(|a| a.lemma.clone())
                    .unwrap_or_else(|| word.to_string()),
            ),
            ipa: self.transcriber.transcribe(word),
            pos: analysis.map(|a| a.tag),
            ..Default::default()
        };

        let mut memory = self.memory.lock().await;
        memory.insert(word.to_string(), entry.clone());

        let mut staged = self.read_file().await;
        staged.extend(memory.clone());

        if let Err(e) = self.write_file(&staged).await {
            tracing::warn!(
                "Error saving staging file {}: {}; keeping '{}' in memory",
                self.path.display(),
                e,
                word
            );
        }

        entry
    }

    /// Everything currently staged, on disk and in memory
    pub async fn staged(&self) -> BTreeMap<String, SourceEntry> {
        let memory = self.memory.lock().await;
        let mut staged = self.read_file().await;
        staged.extend(memory.clone());
        staged
    }

    /// Drop entries that have been merged. An entry restaged with different
    /// content since `merged` was taken is kept.
    pub async fn clear(&self, merged: &BTreeMap<String, SourceEntry>) {
        if merged.is_empty() {
            return;
        }

        let mut memory = self.memory.lock().await;
        memory.retain(|word, entry| merged.get(word) != Some(entry));

        let mut staged = self.read_file().await;
        let before = staged.len();
        staged.retain(|word, entry| merged.get(word) != Some(entry));
        if staged.len() == before {
            return;
        }

        if let Err(e) = self.write_file(&staged).await {
            tracing::warn!("Error clearing staging file {}: {}", self.path.display(), e);
        }
    }

    /// Stage `word`, store it immediately so the next lookup finds it, then
    /// run an ingestion pass to reconcile
    pub async fn learn(
        &self,
        engine: &IngestionEngine,
        word: &str,
        definition: &str,
    ) -> Result<UpsertOutcome, SyncError> {
        let word = source::normalize_word(word);
        let entry = self.stage(&word, definition).await;

        let outcome = engine
            .coordinator()
            .upsert(PendingWord::from_entry(word.as_str(), entry))
            .await?;

        engine.run().await?;

        tracing::info!(word = %word, ?outcome, "Stored user definition");
        Ok(outcome)
    }

    async fn read_file(&self) -> BTreeMap<String, SourceEntry> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) if json.trim().is_empty() => BTreeMap::new(),
            Ok(json) => source::parse_entries(&json).unwrap_or_else(|e| {
                tracing::warn!("Error loading staging file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Error loading staging file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }

    async fn write_file(&self, staged: &BTreeMap<String, SourceEntry>) -> Result<(), SourceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(staged)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
