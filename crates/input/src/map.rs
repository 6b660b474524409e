//! Key mapping from terminal events to game controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A physical game control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Down,
    Rotate,
}

/// Map keyboard input to a control.
pub fn map_key(key: KeyEvent) -> Option<Control> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Control::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Control::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Control::Down),

        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Control::Rotate),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Control::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Control::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Control::Down));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), Some(Control::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('l'))), Some(Control::Right));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('s'))), Some(Control::Down));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Control::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Control::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('W'))), Some(Control::Rotate));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
