pub mod language;
pub mod lookup;
pub mod preprocess;
pub mod prompt;

pub use language::{Analyzer, Transcriber};
pub use prompt::{PromptError, Prompter};
