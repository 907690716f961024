pub mod analyzer;
mod http;
pub mod lemmatizer;
pub mod lexicon;
pub mod oed;
pub mod syllables;
pub mod urban;

pub use analyzer::EnglishAnalyzer;
pub use lemmatizer::{EnglishLemmatizer, LemmaCandidate};
pub use lexicon::Lexicon;
pub use oed::OedSource;
pub use syllables::SyllableTranscriber;
pub use urban::UrbanDictionarySource;
