//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command.
///
/// Returns `None` for keys that are not commands at all (whitespace, Enter,
/// bare modifiers); those are skipped rather than reported as unknown.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Arrows mirror W/A/S/D.
        KeyCode::Up => Some(Command::Up),
        KeyCode::Down => Some(Command::Down),
        KeyCode::Left => Some(Command::Left),
        KeyCode::Right => Some(Command::Right),

        KeyCode::Char(c) if c.is_whitespace() => None,
        KeyCode::Char(c) => Some(Command::from_char(c)),

        KeyCode::Enter | KeyCode::Tab | KeyCode::Null => None,
        KeyCode::Modifier(_) | KeyCode::CapsLock | KeyCode::NumLock | KeyCode::ScrollLock => None,

        _ => Some(Command::Unknown),
    }
}

/// Check if the key closes the input stream (Ctrl-C / Ctrl-D).
pub fn is_end_of_input(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d') | KeyCode::Char('D')
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(Command::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(Command::Down)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(Command::Right)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Command::Down)
        );
    }

    #[test]
    fn test_quit_and_unknown_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(Command::Quit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(Command::Unknown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(Command::Unknown)
        );
    }

    #[test]
    fn test_skipped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_end_of_input_keys() {
        assert!(is_end_of_input(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(is_end_of_input(KeyEvent::new(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_end_of_input(KeyEvent::from(KeyCode::Char('d'))));
        assert!(!is_end_of_input(KeyEvent::from(KeyCode::Char('q'))));
    }
}
