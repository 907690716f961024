use std::env;

use serde::{Deserialize, Serialize};

fn default_db_path() -> String {
    "language_data.db".to_string()
}

fn default_max_connections() -> u32 {
    4
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file, created on first run
    pub db_path: String,
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn new() -> Self {
        let db_path = env::var("WORDBANK_DB_PATH").unwrap_or_else(|_| default_db_path());

        let max_connections = env::var("WORDBANK_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_connections);

        Self {
            db_path,
            max_connections,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
