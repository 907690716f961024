use kanal::AsyncSender;
use wordbank_core::lookup::find_best;
use wordbank_core::preprocess::{DefaultPreprocessor, Preprocessor};
use wordbank_core::{PromptError, Prompter};
use wordbank_types::{AppEvent, DisplayResult};

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Answer one line: show the best stored match, or ask for a definition and
/// learn the word
pub async fn handle_text_input(
    state: &AppState,
    prompter: &dyn Prompter,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: &str,
) -> anyhow::Result<Flow> {
    let query = DefaultPreprocessor.process(text);
    tracing::debug!("Normalized: '{}'", query);

    if query.is_empty() {
        return Ok(Flow::Continue);
    }
    if query == "exit" {
        return Ok(Flow::Exit);
    }

    let records = state.store().defined().await?;
    if let Some(found) = find_best(&query, &records, state.config.lookup.min_similarity) {
        tracing::debug!(
            query = %query,
            word = %found.record.word,
            kind = ?found.kind,
            score = found.score,
            "Lookup hit"
        );

        let result = DisplayResult {
            term: found.record.word.clone(),
            definition: found.record.definition.clone().unwrap_or_default(),
            example: found.record.example.clone(),
        };
        app_to_ui_tx.send(AppEvent::ShowResult(result)).await?;
        return Ok(Flow::Continue);
    }

    let question =
        format!("I'm not familiar with the word '{query}'. Could you please define it for me? ");
    let definition = match prompter.prompt(&question).await {
        Ok(definition) => definition,
        Err(PromptError::Closed) => return Ok(Flow::Exit),
        Err(e) => return Err(e.into()),
    };

    let outcome = state.engine.learn(&query, &definition).await?;
    tracing::debug!(word = %query, ?outcome, "Learned word");

    app_to_ui_tx
        .send(AppEvent::Notice(format!("'{query}' added to the database.")))
        .await?;

    Ok(Flow::Continue)
}
