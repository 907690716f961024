pub mod chain;

pub use chain::FallbackChain;

/// Remote definition provider interface
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up a definition for `word`.
    ///
    /// `Ok(None)` means the source answered but had nothing for the word.
    async fn fetch(&self, word: &str) -> Result<Option<FetchedDefinition>, FetchError>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub source: String,
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {status} from {source_name}")]
    Http { status: u16, source_name: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Timed out after {0} ms")]
    Timeout(u64),

    #[error("Parse error: {0}")]
    ParseError(String),
}
