use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_user_agent() -> String {
    "wordbank/0.1".to_string()
}

fn default_primary_url() -> String {
    "https://www.urbandictionary.com".to_string()
}

fn default_secondary_url() -> String {
    "https://www.oed.com".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FetchConfig {
    /// Remote definition lookups; when false only file/user definitions are used
    pub enabled: bool,
    /// Bound on a single fetch attempt, per source
    pub timeout_ms: u64,
    pub user_agent: String,
    /// Tried first
    pub primary_url: String,
    /// Tried when the primary source has nothing
    pub secondary_url: String,
}

impl FetchConfig {
    pub fn new() -> Self {
        let enabled = env::var("WORDBANK_FETCH_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        let timeout_ms = env::var("WORDBANK_FETCH_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_ms);

        let primary_url =
            env::var("WORDBANK_PRIMARY_URL").unwrap_or_else(|_| default_primary_url());
        let secondary_url =
            env::var("WORDBANK_SECONDARY_URL").unwrap_or_else(|_| default_secondary_url());

        Self {
            enabled,
            timeout_ms,
            user_agent: default_user_agent(),
            primary_url,
            secondary_url,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}
