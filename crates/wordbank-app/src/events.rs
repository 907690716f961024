use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordbank_types::AppEvent;

use crate::prompter::ChannelPrompter;
use crate::state::AppState;

pub mod text_input;

use text_input::{Flow, handle_text_input};

pub const USER_PROMPT: &str = "You: ";

/// App's main loop: one line at a time until `exit`, end of input or cancellation
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let prompter = ChannelPrompter::new(ui_to_app_rx.clone(), app_to_ui_tx.clone());

    loop {
        app_to_ui_tx
            .send(AppEvent::Prompt(USER_PROMPT.to_string()))
            .await?;

        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        match event {
            AppEvent::TextInput(text) => {
                match handle_text_input(&state, &prompter, &app_to_ui_tx, &text).await {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(e) => tracing::error!("Failed to handle input '{}': {}", text, e),
                }
            }
            AppEvent::Exit => break,
            other => tracing::debug!("Ignoring event: {:?}", other),
        }
    }

    tracing::info!("Session ended");
    let _ = app_to_ui_tx.send(AppEvent::Exit).await;
    Ok(())
}
