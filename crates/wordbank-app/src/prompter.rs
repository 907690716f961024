use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use wordbank_core::{PromptError, Prompter};
use wordbank_types::AppEvent;

const EMPTY_ANSWER: &str = "Please enter a valid response.";

/// Asks through the output channel and takes the answer from the same input
/// channel the event loop reads, so the next typed line is the answer
pub struct ChannelPrompter {
    input: AsyncReceiver<AppEvent>,
    output: AsyncSender<AppEvent>,
}

impl ChannelPrompter {
    pub fn new(input: AsyncReceiver<AppEvent>, output: AsyncSender<AppEvent>) -> Self {
        Self { input, output }
    }

    async fn show(&self, event: AppEvent) -> Result<(), PromptError> {
        self.output.send(event).await.map_err(|_| PromptError::Closed)
    }
}

#[async_trait]
impl Prompter for ChannelPrompter {
    async fn prompt(&self, message: &str) -> Result<String, PromptError> {
        loop {
            self.show(AppEvent::Prompt(message.to_string())).await?;

            match self.input.recv().await {
                Ok(AppEvent::TextInput(line)) => {
                    let answer = line.trim();
                    if !answer.is_empty() {
                        return Ok(answer.to_string());
                    }
                    self.show(AppEvent::Notice(EMPTY_ANSWER.to_string())).await?;
                }
                Ok(AppEvent::Exit) | Err(_) => return Err(PromptError::Closed),
                Ok(_) => {}
            }
        }
    }
}
