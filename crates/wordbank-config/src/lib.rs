use serde::{Deserialize, Serialize};

use self::fetch::FetchConfig;
use self::lookup::LookupConfig;
use self::sources::SourcesConfig;
use self::store::StoreConfig;
use self::sync::SyncConfig;

pub mod fetch;
pub mod lookup;
pub mod sources;
pub mod store;
pub mod sync;

/// Anything a config file leaves out, whole sections or single fields,
/// comes from [`Config::new`], so `WORDBANK_*` variables still apply
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub sources: SourcesConfig,
    pub fetch: FetchConfig,
    pub sync: SyncConfig,
    pub lookup: LookupConfig,
}

impl Config {
    /// Defaults overridden by `WORDBANK_*` environment variables
    pub fn new() -> Self {
        Config {
            store: StoreConfig::new(),
            sources: SourcesConfig::new(),
            fetch: FetchConfig::new(),
            sync: SyncConfig::new(),
            lookup: LookupConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
