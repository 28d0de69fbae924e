//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Cyrillic entries are the characters produced by the P/A/D/S keys on
/// Russian and Ukrainian layouts.
pub fn map_key(key: KeyEvent) -> Option<GameCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('p' | 'P' | 'з' | 'З') => Some(GameCommand::Start),

        // Movement
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H' | 'ф' | 'Ф') => {
            Some(GameCommand::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L' | 'в' | 'В') => {
            Some(GameCommand::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J' | 'ы' | 'Ы' | 'і' | 'І') => {
            Some(GameCommand::SoftDrop)
        }

        // Rotation
        KeyCode::Up | KeyCode::Char(' ' | 'w' | 'W' | 'k' | 'K') => Some(GameCommand::Rotate),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key asks for a new session.
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('к'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameCommand> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Left), Some(GameCommand::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(GameCommand::MoveRight));
        assert_eq!(key(KeyCode::Down), Some(GameCommand::SoftDrop));

        assert_eq!(key(KeyCode::Char('a')), Some(GameCommand::MoveLeft));
        assert_eq!(key(KeyCode::Char('d')), Some(GameCommand::MoveRight));
        assert_eq!(key(KeyCode::Char('s')), Some(GameCommand::SoftDrop));
    }

    #[test]
    fn test_cyrillic_layout_keys() {
        assert_eq!(key(KeyCode::Char('з')), Some(GameCommand::Start));
        assert_eq!(key(KeyCode::Char('ф')), Some(GameCommand::MoveLeft));
        assert_eq!(key(KeyCode::Char('в')), Some(GameCommand::MoveRight));
        assert_eq!(key(KeyCode::Char('ы')), Some(GameCommand::SoftDrop));
        assert_eq!(key(KeyCode::Char('і')), Some(GameCommand::SoftDrop));
    }

    #[test]
    fn test_start_and_rotate_keys() {
        assert_eq!(key(KeyCode::Char('p')), Some(GameCommand::Start));
        assert_eq!(key(KeyCode::Enter), Some(GameCommand::Start));
        assert_eq!(key(KeyCode::Char(' ')), Some(GameCommand::Rotate));
        assert_eq!(key(KeyCode::Up), Some(GameCommand::Rotate));
        assert_eq!(key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_control_chords_are_not_commands() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_restart_key() {
        assert!(is_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(!is_restart(KeyEvent::from(KeyCode::Char('p'))));
    }
}
