//! Word-source files.
//!
//! A source file is either a mapping `word -> entry` or a list of such
//! mappings. Files are merged key by key, later files overriding earlier
//! ones. Keys are lowercased so `Run` and `run` are the same word.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Metadata for one word as written in a source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceEntry {
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    /// Raw category label, e.g. "Verb" or "NOUN"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceDocument {
    Map(BTreeMap<String, Option<SourceEntry>>),
    List(Vec<BTreeMap<String, Option<SourceEntry>>>),
}

impl SourceDocument {
    fn into_entries(self) -> BTreeMap<String, SourceEntry> {
        let maps = match self {
            SourceDocument::Map(map) => vec![map],
            SourceDocument::List(maps) => maps,
        };

        let mut entries = BTreeMap::new();
        for map in maps {
            for (word, entry) in map {
                let word = normalize_word(&word);
                if word.is_empty() {
                    continue;
                }
                entries.insert(word, entry.unwrap_or_default());
            }
        }
        entries
    }
}

/// Stored form of a word: trimmed and lowercased, the same shape the REPL
/// looks words up in
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Result of scanning a source directory
#[derive(Debug, Default)]
pub struct SourceScan {
    pub entries: BTreeMap<String, SourceEntry>,
    pub files_read: usize,
    pub files_skipped: usize,
}

/// Parse word-source JSON text
pub fn parse_entries(json: &str) -> Result<BTreeMap<String, SourceEntry>, SourceError> {
    let document: SourceDocument = serde_json::from_str(json)?;
    Ok(document.into_entries())
}

/// Load a single word-source file
pub fn read_file(path: &Path) -> Result<BTreeMap<String, SourceEntry>, SourceError> {
    let json = std::fs::read_to_string(path)?;
    parse_entries(&json)
}

/// Read every `*.json` file in `dir` except the `reserved` one.
///
/// Unreadable or malformed files are skipped with a warning. A missing
/// directory is treated as empty.
pub fn scan_dir(dir: &Path, reserved: &str) -> SourceScan {
    let mut scan = SourceScan::default();

    let read_dir = match std::fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::warn!("Cannot read source directory {}: {}", dir.display(), e);
            return scan;
        }
    };

    let mut paths: Vec<_> = read_dir
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter(|path| path.file_name().is_none_or(|name| name != reserved))
        .collect();
    paths.sort();

    for path in paths {
        match read_file(&path) {
            Ok(entries) => {
                tracing::debug!("Read {} words from {}", entries.len(), path.display());
                scan.entries.extend(entries);
                scan.files_read += 1;
            }
            Err(e) => {
                tracing::warn!("Skipping source file {}: {}", path.display(), e);
                scan.files_skipped += 1;
            }
        }
    }

    scan
}
