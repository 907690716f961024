use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use wordbank_config::Config;
use wordbank_config::fetch::FetchConfig;
use wordbank_core::{Analyzer, Transcriber};
use wordbank_fetch::FallbackChain;
use wordbank_lang_english::{EnglishAnalyzer, OedSource, SyllableTranscriber, UrbanDictionarySource};
use wordbank_store::WordStore;
use wordbank_sync::{ChangeTracker, IngestionEngine, UpsertCoordinator};

pub struct AppState {
    pub config: Config,
    pub engine: Arc<IngestionEngine>,
}

impl AppState {
    /// Open the store and wire the English capabilities into the pipeline
    pub async fn init(config: Config) -> anyhow::Result<Self> {
        let store = WordStore::open(Path::new(&config.store.db_path), config.store.max_connections)
            .await?;

        let analyzer: Arc<dyn Analyzer> = Arc::new(EnglishAnalyzer::new());
        let transcriber: Arc<dyn Transcriber> = Arc::new(SyllableTranscriber::new());

        let engine = build_engine(
            &config,
            Arc::new(store),
            analyzer,
            transcriber,
            build_fetchers(&config.fetch),
        );

        Ok(Self { config, engine })
    }

    pub fn store(&self) -> &Arc<WordStore> {
        self.engine.store()
    }
}

pub fn build_engine(
    config: &Config,
    store: Arc<WordStore>,
    analyzer: Arc<dyn Analyzer>,
    transcriber: Arc<dyn Transcriber>,
    fetchers: FallbackChain,
) -> Arc<IngestionEngine> {
    let coordinator = Arc::new(UpsertCoordinator::new(
        store,
        analyzer.clone(),
        transcriber.clone(),
        fetchers,
    ));
    let tracker = Arc::new(ChangeTracker::new(
        config.sources.staging_path(),
        analyzer,
        transcriber,
    ));

    Arc::new(IngestionEngine::new(
        coordinator,
        tracker,
        &config.sources.data_dir,
        config.sources.staging_file.clone(),
        config.sync.concurrency,
    ))
}

/// Primary source first, secondary as fallback
fn build_fetchers(config: &FetchConfig) -> FallbackChain {
    if !config.enabled {
        tracing::info!("Remote definition lookups disabled");
        return FallbackChain::empty();
    }

    let timeout = Duration::from_millis(config.timeout_ms);
    let mut chain = FallbackChain::new(timeout);

    match UrbanDictionarySource::new(&config.primary_url, timeout, &config.user_agent) {
        Ok(source) => chain = chain.with_source(Arc::new(source)),
        Err(e) => tracing::warn!("Primary definition source unavailable: {}", e),
    }

    match OedSource::new(&config.secondary_url, timeout, &config.user_agent) {
        Ok(source) => chain = chain.with_source(Arc::new(source)),
        Err(e) => tracing::warn!("Secondary definition source unavailable: {}", e),
    }

    chain
}
