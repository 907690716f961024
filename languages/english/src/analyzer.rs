use wordbank_core::Analyzer;
use wordbank_types::Analysis;

use crate::lemmatizer::EnglishLemmatizer;
use crate::lexicon::Lexicon;

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "ist", "hood", "dom",
];
const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "less", "able", "ible", "ive", "ical", "ish", "ic", "al", "ary",
];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate"];

/// English analyzer: embedded lexicon, rule-based lemmatizer and suffix heuristics
pub struct EnglishAnalyzer {
    lexicon: Lexicon,
    lemmatizer: EnglishLemmatizer,
}

impl EnglishAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::with_defaults(),
            lemmatizer: EnglishLemmatizer::new(),
        }
    }

    fn known(&self, lemma: &str, tag: &str) -> Analysis {
        Analysis {
            lemma: lemma.to_string(),
            tag: tag.to_string(),
            entity_type: None,
        }
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for EnglishAnalyzer {
    fn language_code(&self) -> &str {
        "en"
    }

    fn analyze(&self, word: &str) -> Option<Analysis> {
        let word = word.trim();
        if !word.chars().any(char::is_alphabetic) {
            return None;
        }
        let lower = word.to_lowercase();

        if let Some(tag) = self.lexicon.tag(&lower) {
            return Some(self.known(&lower, tag));
        }

        let candidates = self.lemmatizer.lemmatize(&lower);
        for candidate in &candidates {
            if let Some(tag) = self.lexicon.tag(&candidate.base_form) {
                let tag = candidate.tag_hint.unwrap_or(tag);
                return Some(self.known(&candidate.base_form, tag));
            }
        }

        if word.chars().next().is_some_and(char::is_uppercase) {
            return Some(Analysis {
                lemma: word.to_string(),
                tag: "PROPN".to_string(),
                entity_type: Some("NAME".to_string()),
            });
        }

        if let Some(tag) = suffix_tag(&lower) {
            return Some(self.known(&lower, tag));
        }

        let best = candidates.first()?;
        let tag = suffix_tag(&best.base_form).or(best.tag_hint)?;
        Some(self.known(&best.base_form, tag))
    }
}

fn suffix_tag(word: &str) -> Option<&'static str> {
    if word.len() < 5 {
        return None;
    }

    if word.ends_with("ly") {
        Some("ADV")
    } else if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        Some("NOUN")
    } else if ADJ_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        Some("ADJ")
    } else if VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        Some("VERB")
    } else {
        None
    }
}
