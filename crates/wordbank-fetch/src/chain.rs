use std::sync::Arc;
use std::time::Duration;

use crate::{DefinitionSource, FetchError, FetchedDefinition};

/// Ordered list of definition sources tried one after another.
///
/// Every attempt is bounded by `timeout`. Errors and timeouts are logged and
/// fall through to the next source; they never reach the caller.
#[derive(Clone)]
pub struct FallbackChain {
    sources: Vec<Arc<dyn DefinitionSource>>,
    timeout: Duration,
}

impl FallbackChain {
    pub fn new(timeout: Duration) -> Self {
        Self {
            sources: Vec::new(),
            timeout,
        }
    }

    /// A chain that never finds anything
    pub fn empty() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Append a source; earlier sources take precedence
    pub fn with_source(mut self, source: Arc<dyn DefinitionSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// First definition any source returns, in order
    pub async fn resolve(&self, word: &str) -> Option<FetchedDefinition> {
        for source in &self.sources {
            let name = source.metadata().name;

            match self.attempt(source.as_ref(), word).await {
                Ok(Some(found)) => {
                    tracing::debug!(word, source = %name, "Definition found");
                    return Some(found);
                }
                Ok(None) => {
                    tracing::debug!(word, source = %name, "No definition");
                }
                Err(e) => {
                    tracing::warn!(word, source = %name, "Definition fetch failed: {}", e);
                }
            }
        }

        None
    }

    async fn attempt(
        &self,
        source: &dyn DefinitionSource,
        word: &str,
    ) -> Result<Option<FetchedDefinition>, FetchError> {
        match tokio::time::timeout(self.timeout, source.fetch(word)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout.as_millis() as u64)),
        }
    }
}
