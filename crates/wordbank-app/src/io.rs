use std::io::BufRead;
use std::thread::JoinHandle;

use kanal::{AsyncSender, Sender};
use wordbank_types::AppEvent;

/// Send each line as `TextInput`, then `Exit` once the input ends
pub fn forward_lines<R: BufRead>(reader: R, tx: &Sender<AppEvent>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if tx.send(AppEvent::TextInput(line)).is_err() {
                    // event loop is gone
                    return;
                }
            }
            Err(e) => {
                tracing::warn!("Error reading input: {}", e);
                break;
            }
        }
    }

    let _ = tx.send(AppEvent::Exit);
}

/// Read stdin on a dedicated thread so a pending read never holds up shutdown
pub fn spawn_stdin_reader(tx: AsyncSender<AppEvent>) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let tx = tx.to_sync();
            forward_lines(std::io::stdin().lock(), &tx);
            tracing::debug!("Input closed");
        })
}
