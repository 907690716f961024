use std::io::Write;

use kanal::AsyncReceiver;
use wordbank_types::AppEvent;

/// Console text for an event, `None` for events with nothing to show
pub fn render(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowResult(result) => Some(match &result.example {
            Some(example) => format!("Bot: {}: {} ({})\n", result.term, result.definition, example),
            None => format!("Bot: {}: {}\n", result.term, result.definition),
        }),
        AppEvent::Prompt(message) => Some(message.clone()),
        AppEvent::Notice(message) => Some(format!("{message}\n")),
        AppEvent::TextInput(_) | AppEvent::Exit => None,
    }
}

/// Print events in arrival order until `Exit` or the channel closes
pub async fn ui_loop<W: Write + Send>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    mut out: W,
) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        if event == AppEvent::Exit {
            break;
        }

        if let Some(text) = render(&event) {
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
