/// Asks a human for a line of input
#[async_trait::async_trait]
pub trait Prompter: Send + Sync {
    /// Show `message` and wait for a non-empty answer
    async fn prompt(&self, message: &str) -> Result<String, PromptError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Input closed")]
    Closed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
