use std::env;

use serde::{Deserialize, Serialize};

fn default_min_similarity() -> f64 {
    0.85
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LookupConfig {
    /// Jaro-Winkler score a fuzzy match needs to be accepted (0.0-1.0)
    pub min_similarity: f64,
}

impl LookupConfig {
    pub fn new() -> Self {
        let min_similarity = env::var("WORDBANK_MIN_SIMILARITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_min_similarity);

        Self { min_similarity }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}
