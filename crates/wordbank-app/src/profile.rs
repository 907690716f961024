use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use wordbank_config::Config;

const DEFAULT_CONFIG_FILE: &str = "wordbank.json";

/// Load a config file in the same shape as [`Config`]
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Config from `WORDBANK_CONFIG` (default `wordbank.json`), falling back to
/// environment defaults when the file is missing or invalid
pub fn load_config() -> Config {
    let path = env::var("WORDBANK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    match load_config_file(Path::new(&path)) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Config {} not loaded ({}), using environment defaults", path, e);
            Config::new()
        }
    }
}
