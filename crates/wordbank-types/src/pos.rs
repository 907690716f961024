use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of word categories, each backed by its own storage table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 8] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Interjection,
    ];

    /// Category used whenever a word's tag is missing or unrecognized
    pub const FALLBACK: PartOfSpeech = PartOfSpeech::Adjective;

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Preposition => "Preposition",
            PartOfSpeech::Conjunction => "Conjunction",
            PartOfSpeech::Interjection => "Interjection",
        }
    }

    /// Map a tagger label to a category.
    ///
    /// Accepts category names, Universal POS tags and Penn Treebank tags,
    /// case-insensitively. Returns `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_uppercase();
        if tag.is_empty() {
            return None;
        }

        let pos = match tag.as_str() {
            "NOUN" | "PROPN" | "NN" | "NNS" | "NNP" | "NNPS" => PartOfSpeech::Noun,
            "PRONOUN" | "PRON" | "PRP" | "PRP$" | "WP" | "WP$" => PartOfSpeech::Pronoun,
            "VERB" | "AUX" | "MD" => PartOfSpeech::Verb,
            "ADJECTIVE" | "ADJ" | "DET" | "JJ" | "JJR" | "JJS" => PartOfSpeech::Adjective,
            "ADVERB" | "ADV" | "RB" | "RBR" | "RBS" | "WRB" => PartOfSpeech::Adverb,
            "PREPOSITION" | "ADP" | "IN" => PartOfSpeech::Preposition,
            "CONJUNCTION" | "CONJ" | "CCONJ" | "SCONJ" | "CC" => PartOfSpeech::Conjunction,
            "INTERJECTION" | "INTJ" | "UH" => PartOfSpeech::Interjection,
            // VB, VBD, VBG, VBN, VBP, VBZ
            other if other.starts_with("VB") => PartOfSpeech::Verb,
            _ => return None,
        };

        Some(pos)
    }

    /// Like [`PartOfSpeech::from_tag`], but unknown or missing tags land on
    /// [`PartOfSpeech::FALLBACK`].
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.and_then(Self::from_tag).unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
