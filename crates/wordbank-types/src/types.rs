use serde::{Deserialize, Serialize};

use crate::pos::PartOfSpeech;

/// A stored word with every field the store knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub lemma: Option<String>,
    pub ipa: Option<String>,
    pub pos: PartOfSpeech,
    pub definition: Option<String>,
    pub example: Option<String>,
}

impl WordRecord {
    /// A record is complete once both definition and transcription are known
    pub fn is_complete(&self) -> bool {
        self.definition.is_some() && self.ipa.is_some()
    }
}

/// Output of a linguistic analysis of a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub lemma: String,
    /// Raw tagger label, e.g. "VERB" or "NNS"
    pub tag: String,
    pub entity_type: Option<String>,
}

impl Analysis {
    pub fn pos(&self) -> Option<PartOfSpeech> {
        PartOfSpeech::from_tag(&self.tag)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A line typed by the user
    TextInput(String),
    ShowResult(DisplayResult),
    /// Question shown without a trailing newline
    Prompt(String),
    /// Informational line
    Notice(String),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub term: String,
    pub definition: String,
    pub example: Option<String>,
}
