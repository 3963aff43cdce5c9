use std::fmt;

/// A host-agnostic key event. `vikey` never depends on a terminal or GUI
/// crate; hosts translate their native key events into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Backspace,
    Tab,
    Left,
    Right,
    Up,
    Down,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => write!(f, "<Space>"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Escape => write!(f, "<Esc>"),
            Key::Enter => write!(f, "<CR>"),
            Key::Backspace => write!(f, "<BS>"),
            Key::Tab => write!(f, "<Tab>"),
            Key::Left => write!(f, "<Left>"),
            Key::Right => write!(f, "<Right>"),
            Key::Up => write!(f, "<Up>"),
            Key::Down => write!(f, "<Down>"),
        }
    }
}

/// Parses a string of vim-notation keys (`<esc>`, `<cr>`, `<bs>`, plain
/// characters) into a sequence of [`Key`]s, for feeding test harnesses.
pub fn parse_keys(input: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '<' {
            let mut notation = String::new();
            let mut closed = false;
            for nc in chars.by_ref() {
                if nc == '>' {
                    closed = true;
                    break;
                }
                notation.push(nc);
            }
            if closed {
                keys.push(key_from_notation(&notation));
            } else {
                keys.push(Key::Char('<'));
                for nc in notation.chars() {
                    keys.push(Key::Char(nc));
                }
            }
        } else {
            keys.push(Key::Char(c));
        }
    }

    keys
}

fn key_from_notation(notation: &str) -> Key {
    match notation.to_ascii_lowercase().as_str() {
        "esc" | "escape" => Key::Escape,
        "cr" | "enter" | "return" => Key::Enter,
        "bs" | "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "space" => Key::Char(' '),
        "lt" => Key::Char('<'),
        _ => Key::Char('?'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_text() {
        assert_eq!(
            parse_keys("dw"),
            vec![Key::Char('d'), Key::Char('w')]
        );
    }

    #[test]
    fn parses_escape_and_enter() {
        assert_eq!(
            parse_keys(":wq<cr>"),
            vec![
                Key::Char(':'),
                Key::Char('w'),
                Key::Char('q'),
                Key::Enter,
            ]
        );
        assert_eq!(parse_keys("<esc>"), vec![Key::Escape]);
    }

    #[test]
    fn parses_space_notation() {
        assert_eq!(parse_keys("<space>"), vec![Key::Char(' ')]);
    }
}
