use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    "data/language".to_string()
}

fn default_staging_file() -> String {
    "new_words.json".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SourcesConfig {
    /// Directory scanned for `*.json` word lists
    pub data_dir: String,
    /// Reserved filename inside `data_dir` holding user-defined words
    pub staging_file: String,
}

impl SourcesConfig {
    pub fn new() -> Self {
        let data_dir = env::var("WORDBANK_DATA_DIR").unwrap_or_else(|_| default_data_dir());
        let staging_file =
            env::var("WORDBANK_STAGING_FILE").unwrap_or_else(|_| default_staging_file());

        Self {
            data_dir,
            staging_file,
        }
    }

    pub fn staging_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.staging_file)
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self::new()
    }
}
