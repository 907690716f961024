use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod profile;
mod prompter;
mod state;
mod ui;


use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the conversation
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = profile::load_config();
    let state = Arc::new(AppState::init(config).await?);

    if let Err(e) = sync_on_start(&state).await {
        tracing::error!("Startup sync failed: {}", e);
        state.store().close().await;
        return Err(e);
    }

    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks()?;

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("Session task finished"),
                Ok(Err(e)) => tracing::error!("Session task failed: {e}"),
                Err(e) => tracing::error!("Session task panicked: {e}"),
            }
        }
    }

    controller.shutdown();

    // Give the console a moment to flush what is left
    let drain = async { while tasks.join_next().await.is_some() {} };
    if tokio::time::timeout(Duration::from_millis(500), drain).await.is_err() {
        tasks.abort_all();
    }

    state.store().close().await;
    Ok(())
}

/// Merge word sources into the store before the first prompt
async fn sync_on_start(state: &AppState) -> anyhow::Result<()> {
    let report = state.engine.run().await?;
    tracing::info!(
        files = report.files_read,
        words = report.words_seen,
        inserted = report.inserted,
        updated = report.updated,
        "Word sources merged"
    );

    if state.config.sync.backfill_on_start {
        let backfill = state.engine.backfill().await?;
        tracing::info!(
            candidates = backfill.backfill_words,
            updated = backfill.updated,
            "Backfill pass done"
        );
    }

    Ok(())
}
