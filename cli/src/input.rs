//! Keyboard input source
//!
//! Blocking crossterm event loop on a dedicated thread, feeding the
//! controller's input channel. Pad keys become presses, anything else
//! becomes the generic any-input event the game-over screen listens for.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::debug;

use simon_core::{InputEvent, signal_for_key};

/// Read terminal events until Esc, Ctrl-C, or the game goes away.
///
/// Returning drops the sender, which is how the controller learns the
/// session is over.
pub fn read_events(tx: mpsc::Sender<InputEvent>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                debug!(%err, "input read failed");
                return;
            }
        };

        let Event::Key(key) = event else { continue };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        let input = match key.code {
            KeyCode::Esc => return,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return,
            KeyCode::Char(c) => match signal_for_key(c.to_ascii_lowercase()) {
                Some(signal) => InputEvent::Press(signal),
                None => InputEvent::Any,
            },
            _ => InputEvent::Any,
        };

        if tx.blocking_send(input).is_err() {
            return;
        }
    }
}
