//! Input collaborator: non-blocking single-key polling.
//!
//! The rest of the crate only ever sees logical [`Action`]s; key bindings
//! live entirely in this module.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Logical game actions produced by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    /// Launch the idle ball; doubles as "continue" inside dialogs
    Launch,
    TogglePause,
    Quit,
}

/// Poll for at most one pending action without blocking.
///
/// Returns `Ok(None)` when no key is pending or the key maps to nothing;
/// absence of input is normal, not an error.
pub fn poll_action() -> io::Result<Option<Action>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => Ok(map_key(code)),
        _ => Ok(None),
    }
}

fn map_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(',') | KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Char('.') | KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Char(' ') => Some(Action::Launch),
        KeyCode::Char('p') => Some(Action::TogglePause),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_bindings() {
        assert_eq!(map_key(KeyCode::Char(',')), Some(Action::MoveLeft));
        assert_eq!(map_key(KeyCode::Left), Some(Action::MoveLeft));
        assert_eq!(map_key(KeyCode::Char('.')), Some(Action::MoveRight));
        assert_eq!(map_key(KeyCode::Right), Some(Action::MoveRight));
    }

    #[test]
    fn test_control_bindings() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(Action::Launch));
        assert_eq!(map_key(KeyCode::Char('p')), Some(Action::TogglePause));
        assert_eq!(map_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
        assert_eq!(map_key(KeyCode::F(1)), None);
    }
}
