use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use futures_util::StreamExt;
use futures_util::stream;
use wordbank_store::{UpsertOutcome, WordStore};
use wordbank_types::PartOfSpeech;

use crate::error::SyncError;
use crate::source::{self, SourceEntry};
use crate::tracker::ChangeTracker;
use crate::upsert::{PendingWord, UpsertCoordinator};

/// Source words split against the store
#[derive(Debug, Default)]
pub struct IngestPlan {
    /// Not stored yet
    pub new: Vec<PendingWord>,
    /// Stored but missing a definition or transcription
    pub backfill: Vec<PendingWord>,
    /// Stored and complete, nothing to do
    pub complete: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub files_read: usize,
    pub files_skipped: usize,
    pub words_seen: usize,
    pub new_words: usize,
    pub backfill_words: usize,
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub staged_merged: usize,
}

impl IngestReport {
    fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Inserted => self.inserted += 1,
            UpsertOutcome::Updated => self.updated += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

/// Diffs word-source files against the store and drives the upserts
pub struct IngestionEngine {
    coordinator: Arc<UpsertCoordinator>,
    tracker: Arc<ChangeTracker>,
    data_dir: PathBuf,
    staging_file: String,
    concurrency: usize,
}

impl IngestionEngine {
    pub fn new(
        coordinator: Arc<UpsertCoordinator>,
        tracker: Arc<ChangeTracker>,
        data_dir: impl Into<PathBuf>,
        staging_file: impl Into<String>,
        concurrency: usize,
    ) -> Self {
        Self {
            coordinator,
            tracker,
            data_dir: data_dir.into(),
            staging_file: staging_file.into(),
            concurrency: concurrency.max(1),
        }
    }

    pub fn coordinator(&self) -> &Arc<UpsertCoordinator> {
        &self.coordinator
    }

    pub fn tracker(&self) -> &Arc<ChangeTracker> {
        &self.tracker
    }

    pub fn store(&self) -> &Arc<WordStore> {
        self.coordinator.store()
    }

    /// One full pass: scan files, merge staged words, analyze, partition, upsert.
    ///
    /// Stops at the first storage error. Words already committed stay
    /// committed; staged entries are only cleared after a clean pass.
    pub async fn run(&self) -> Result<IngestReport, SyncError> {
        let started = Instant::now();

        let dir = self.data_dir.clone();
        let reserved = self.staging_file.clone();
        let scan = tokio::task::spawn_blocking(move || source::scan_dir(&dir, &reserved)).await?;

        let staged = self.tracker.staged().await;
        let mut entries = scan.entries;
        entries.extend(staged.clone());

        tracing::info!(
            words = entries.len(),
            files = scan.files_read,
            skipped = scan.files_skipped,
            staged = staged.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Loaded word sources"
        );

        let mut report = IngestReport {
            files_read: scan.files_read,
            files_skipped: scan.files_skipped,
            words_seen: entries.len(),
            ..Default::default()
        };

        let plan = self.plan(entries).await?;
        report.new_words = plan.new.len();
        report.backfill_words = plan.backfill.len();

        self.apply(plan.new.into_iter().chain(plan.backfill), &mut report)
            .await?;

        self.tracker.clear(&staged).await;
        report.staged_merged = staged.len();

        tracing::info!(
            inserted = report.inserted,
            updated = report.updated,
            unchanged = report.unchanged,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Ingestion pass finished"
        );

        Ok(report)
    }

    /// Record a user definition through the change tracker
    pub async fn learn(&self, word: &str, definition: &str) -> Result<UpsertOutcome, SyncError> {
        self.tracker.learn(self, word, definition).await
    }

    /// Analyze every word once and split it into new / backfill / complete
    pub async fn plan(&self, entries: BTreeMap<String, SourceEntry>) -> Result<IngestPlan, SyncError> {
        let store = self.coordinator.store();
        let stored = store.words().await?;
        let incomplete: HashSet<String> = store
            .incomplete()
            .await?
            .into_iter()
            .map(|record| record.word)
            .collect();

        let words: Vec<&str> = entries.keys().map(String::as_str).collect();
        let analyses = self.coordinator.analyzer().analyze_batch(&words);

        let mut plan = IngestPlan::default();
        for ((word, entry), analysis) in entries.into_iter().zip(analyses) {
            if stored.contains(&word) && !incomplete.contains(&word) {
                plan.complete += 1;
                continue;
            }

            let mut pending = PendingWord::from_entry(word, entry);
            if let Some(analysis) = analysis {
                if pending.pos.is_none() {
                    pending.pos = analysis.pos();
                }
                if pending.lemma.is_none() {
                    pending.lemma = Some(analysis.lemma);
                }
            }
            pending.pos.get_or_insert(PartOfSpeech::FALLBACK);

            if stored.contains(&pending.word) {
                plan.backfill.push(pending);
            } else {
                plan.new.push(pending);
            }
        }

        tracing::debug!(
            new = plan.new.len(),
            backfill = plan.backfill.len(),
            complete = plan.complete,
            "Partitioned source words"
        );

        Ok(plan)
    }

    /// Re-enrich every stored word that is missing a definition or
    /// transcription, without rescanning the source files
    pub async fn backfill(&self) -> Result<IngestReport, SyncError> {
        let started = Instant::now();
        let records = self.coordinator.store().incomplete().await?;

        let mut report = IngestReport {
            backfill_words: records.len(),
            ..Default::default()
        };

        self.apply(records.into_iter().map(PendingWord::from_record), &mut report)
            .await?;

        tracing::info!(
            candidates = report.backfill_words,
            updated = report.updated,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Backfill finished"
        );

        Ok(report)
    }

    async fn apply(
        &self,
        words: impl Iterator<Item = PendingWord>,
        report: &mut IngestReport,
    ) -> Result<(), SyncError> {
        let mut results = stream::iter(words)
            .map(|pending| self.coordinator.upsert(pending))
            .buffer_unordered(self.concurrency);

        while let Some(result) = results.next().await {
            // Dropping `results` on error cancels the rest; open transactions roll back
            report.record(result?);
        }

        Ok(())
    }
}
