use wordbank_types::Analysis;

/// Lemma / part-of-speech / entity analysis for a language
pub trait Analyzer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", "de", ...)
    fn language_code(&self) -> &str;

    /// Analyze a single word, `None` when the word cannot be tagged at all
    fn analyze(&self, word: &str) -> Option<Analysis>;

    /// Analyze many words at once. Implementations backed by a model should
    /// override this to run a single batch.
    fn analyze_batch(&self, words: &[&str]) -> Vec<Option<Analysis>> {
        words.iter().map(|word| self.analyze(word)).collect()
    }
}

/// Phonetic or syllabic transcription of a word
pub trait Transcriber: Send + Sync {
    /// `None` when no transcription can be produced
    fn transcribe(&self, word: &str) -> Option<String>;
}
