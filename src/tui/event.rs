use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::warn;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Leave the game
    Quit,
    ForceQuit, // Ctrl+C

    // Navigation within the focused component
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Activate,     // Enter / Space
    ToggleFocus,  // Tab
    Digit(u8),    // 1-9 plays that cell directly
    StepBack,     // [
    StepForward,  // ]

    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, waiting up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(raw) => translate(raw),
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

/// Map a crossterm event onto a `TuiEvent`.
pub fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement reports releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(c @ '1'..='9')) => Some(TuiEvent::Digit(c as u8 - b'0')),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Char('h')) | (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Char('l')) | (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Char(' ')) | (_, KeyCode::Enter) => Some(TuiEvent::Activate),
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => Some(TuiEvent::ToggleFocus),
        (_, KeyCode::Char('[')) => Some(TuiEvent::StepBack),
        (_, KeyCode::Char(']')) => Some(TuiEvent::StepForward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseEvent, MouseEventKind};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(translate(key(KeyCode::Char('1'))), Some(TuiEvent::Digit(1)));
        assert_eq!(translate(key(KeyCode::Char('9'))), Some(TuiEvent::Digit(9)));
        assert_eq!(translate(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(event), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate(key(KeyCode::Up)), Some(TuiEvent::CursorUp));
        assert_eq!(translate(key(KeyCode::Char('l'))), Some(TuiEvent::CursorRight));
        assert_eq!(translate(key(KeyCode::Enter)), Some(TuiEvent::Activate));
        assert_eq!(translate(key(KeyCode::Char(' '))), Some(TuiEvent::Activate));
        assert_eq!(translate(key(KeyCode::Tab)), Some(TuiEvent::ToggleFocus));
        assert_eq!(translate(key(KeyCode::Esc)), Some(TuiEvent::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click_only() {
        let click = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 4,
                row: 7,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            translate(click(MouseEventKind::Down(MouseButton::Left))),
            Some(TuiEvent::MouseClick(4, 7))
        );
        assert_eq!(translate(click(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(translate(click(MouseEventKind::Moved)), None);
    }
}
