//! Key bindings: raw key events to driver commands
//!
//! Holds no state. Keys without a binding map to `None` and are ignored.

use crate::buffer::Order;
use crate::driver::Command;
use crate::sorting::Algorithm;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::TogglePlay),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::SetOrder(Order::Ascending)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::SetOrder(Order::Descending)),
        KeyCode::Right => Some(Command::Grow),
        KeyCode::Left => Some(Command::Shrink),
        KeyCode::Up => Some(Command::Faster),
        KeyCode::Down => Some(Command::Slower),
        KeyCode::Char(c) => Algorithm::from_key(c).map(Command::Select),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_algorithm_keys() {
        assert_eq!(command_for(press(KeyCode::Char('q'))), Some(Command::Select(Algorithm::Quick)));
        assert_eq!(command_for(press(KeyCode::Char('m'))), Some(Command::Select(Algorithm::Merge)));
        assert_eq!(
            command_for(press(KeyCode::Char('S'))),
            Some(Command::Select(Algorithm::Selection))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        // plain 'c' is crazy sort
        assert_eq!(command_for(press(KeyCode::Char('c'))), Some(Command::Select(Algorithm::Crazy)));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(command_for(press(KeyCode::Char('z'))), None);
        assert_eq!(command_for(press(KeyCode::Tab)), None);
        assert_eq!(command_for(press(KeyCode::Enter)), None);
    }
}
