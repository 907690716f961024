use std::env;

use serde::{Deserialize, Serialize};

fn default_concurrency() -> usize {
    8
}

fn default_backfill_on_start() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SyncConfig {
    /// Upper bound on words enriched at the same time
    pub concurrency: usize,
    /// Retry enrichment of every incomplete stored word after the startup pass
    pub backfill_on_start: bool,
}

impl SyncConfig {
    pub fn new() -> Self {
        let concurrency = env::var("WORDBANK_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or_else(default_concurrency);

        let backfill_on_start = env::var("WORDBANK_BACKFILL_ON_START")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_backfill_on_start);

        Self {
            concurrency,
            backfill_on_start,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}
