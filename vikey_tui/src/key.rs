use crossterm::event::{KeyCode, KeyEvent};
use vikey::key::Key;

/// Converts a crossterm key event into `vikey`'s host-agnostic [`Key`].
/// Events `vikey` has no use for (function keys, modified chords, ...)
/// are dropped by returning `None`.
pub fn from_crossterm(event: KeyEvent) -> Option<Key> {
    match event.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn converts_plain_char() {
        assert_eq!(from_crossterm(event(KeyCode::Char('x'))), Some(Key::Char('x')));
    }

    #[test]
    fn converts_escape() {
        assert_eq!(from_crossterm(event(KeyCode::Esc)), Some(Key::Escape));
    }

    #[test]
    fn drops_function_keys() {
        assert_eq!(from_crossterm(event(KeyCode::F(5))), None);
    }
}
