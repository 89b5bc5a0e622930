//! Crossterm event translation.
//!
//! Raw terminal events become `TuiEvent` values here, so the rest of the TUI
//! never touches crossterm types directly.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Editing events (routed to the focused field)
    InputChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Focus / lifecycle events (handled by the event loop)
    NextField,
    PrevField,
    Quit,
    /// Ctrl+C — always quits regardless of focus.
    ForceQuit,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let translated = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Tab) | (_, KeyCode::Enter) | (_, KeyCode::Down) => {
                    Some(TuiEvent::NextField)
                }
                (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(TuiEvent::PrevField),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(translated)
}
