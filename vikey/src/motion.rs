use crate::host::Host;
use crate::types::{Direction, Span};

/// Character classification used by the small-word motions:
/// word characters, whitespace, and everything else (punctuation) are
/// three distinct classes, so a punctuation run is its own "word".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Word,
    Punctuation,
}

pub fn classify(c: char) -> CharClass {
    if is_whitespace(c) {
        CharClass::Whitespace
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punctuation
    }
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// BIG-word classification: only whitespace vs. non-whitespace.
fn classify_big(c: char) -> bool {
    is_whitespace(c)
}

/// Forward word/BIG-word (`w`/`W`): skip the run sharing the class at
/// `cursor`, then skip whitespace, landing on the first non-whitespace.
pub fn forward_word(host: &dyn Host, cursor: usize, big: bool) -> usize {
    let len = host.len();
    if cursor >= len {
        return cursor;
    }
    let mut i = cursor;
    if big {
        let starts_ws = host.char_at(i).map(classify_big).unwrap_or(true);
        while i < len && host.char_at(i).map(classify_big) == Some(starts_ws) {
            i += 1;
        }
        while i < len && host.char_at(i).map(classify_big) == Some(true) {
            i += 1;
        }
    } else {
        let start_class = host.char_at(i).map(classify);
        while i < len && host.char_at(i).map(classify) == start_class {
            i += 1;
        }
        while i < len && host.char_at(i).map(classify) == Some(CharClass::Whitespace) {
            i += 1;
        }
    }
    i.min(len)
}

/// Backward word/BIG-word (`b`/`B`).
pub fn backward_word(host: &dyn Host, cursor: usize, big: bool) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut j = cursor - 1;
    if big {
        while j > 0 && host.char_at(j).map(classify_big) == Some(true) {
            j -= 1;
        }
        let landing_ws = host.char_at(j).map(classify_big).unwrap_or(true);
        while j > 0 && host.char_at(j - 1).map(classify_big) == Some(landing_ws) {
            j -= 1;
        }
    } else {
        while j > 0 && host.char_at(j).map(classify) == Some(CharClass::Whitespace) {
            j -= 1;
        }
        let landing_class = host.char_at(j).map(classify);
        while j > 0 && host.char_at(j - 1).map(classify) == landing_class {
            j -= 1;
        }
    }
    j
}

/// End of word/BIG-word (`e`/`E`). Steps forward, skips whitespace, then
/// advances while the next code unit shares the class; returns the last
/// index inside the word. A no-op if the cursor is already on the final
/// code unit of the buffer and it is itself a word character (decided
/// open question, see DESIGN.md).
pub fn end_of_word(host: &dyn Host, cursor: usize, big: bool) -> usize {
    let len = host.len();
    if len == 0 {
        return cursor;
    }
    let last = len - 1;
    if cursor >= last {
        let at_word_char = host
            .char_at(last)
            .map(|c| if big { !classify_big(c) } else { classify(c) != CharClass::Whitespace })
            .unwrap_or(false);
        if cursor == last && at_word_char {
            return cursor;
        }
    }

    let mut i = (cursor + 1).min(len);
    while i < len && is_ws_at(host, i) {
        i += 1;
    }
    if i >= len {
        return last;
    }
    let target_class = if big {
        None
    } else {
        host.char_at(i).map(classify)
    };
    loop {
        let next = i + 1;
        if next >= len {
            break;
        }
        let continues = if big {
            !is_ws_at(host, next)
        } else {
            host.char_at(next).map(classify) == target_class
        };
        if !continues {
            break;
        }
        i = next;
    }
    i
}

fn is_ws_at(host: &dyn Host, i: usize) -> bool {
    host.char_at(i).map(is_whitespace).unwrap_or(false)
}

/// First code unit of the line containing `cursor` (`0`).
pub fn line_start(host: &dyn Host, cursor: usize) -> usize {
    host.line_range(cursor).start.0
}

/// First non-whitespace code unit of the line containing `cursor` (`^`).
pub fn first_non_blank(host: &dyn Host, cursor: usize) -> usize {
    let line = host.line_range(cursor);
    let mut i = line.start.0;
    while i < line.end.0 {
        match host.char_at(i) {
            Some(c) if c != '\n' && c != '\r' && is_whitespace(c) => i += 1,
            _ => break,
        }
    }
    i.min(line.end.0.saturating_sub(1)).max(line.start.0)
}

/// Last content code unit of the line containing `cursor`, excluding the
/// trailing terminator (`$`). Returns the line's start index for an empty
/// line (boundary behaviour).
pub fn line_end_content(host: &dyn Host, cursor: usize) -> usize {
    let line = host.line_range(cursor);
    let mut end = line.end.0;
    while end > line.start.0 {
        match host.char_at(end - 1) {
            Some('\n') | Some('\r') => end -= 1,
            _ => break,
        }
    }
    if end == line.start.0 {
        line.start.0
    } else {
        end - 1
    }
}

/// Exclusive end of the line's content (`line_end_content` plus one),
/// except on an empty line, where there is no content to include and
/// this returns the line's start unchanged — giving callers an empty
/// `[cursor, cursor)` range instead of swallowing the line terminator.
pub fn line_end_exclusive(host: &dyn Host, cursor: usize) -> usize {
    let end = line_end_content(host, cursor);
    if end == host.line_range(cursor).start.0 {
        end
    } else {
        end + 1
    }
}

/// Character search on the current line (`f`/`F`): scans from
/// `cursor ± 1` for `target`, stopping at the line terminator.
pub fn char_search(host: &dyn Host, cursor: usize, target: char, dir: Direction) -> Option<usize> {
    let line = host.line_range(cursor);
    match dir {
        Direction::Forward => {
            let mut i = cursor + 1;
            while i < line.end.0 {
                match host.char_at(i) {
                    Some('\n') | Some('\r') => break,
                    Some(c) if c == target => return Some(i),
                    _ => i += 1,
                }
            }
            None
        }
        Direction::Backward => {
            if cursor == 0 {
                return None;
            }
            let mut i = cursor;
            while i > line.start.0 {
                i -= 1;
                match host.char_at(i) {
                    Some(c) if c == target => return Some(i),
                    _ => continue,
                }
            }
            None
        }
    }
}

/// Resolves `J`: returns `(range_to_replace, replacement, new_cursor)`,
/// or `None` if there is no next line to join.
pub fn join_lines(host: &dyn Host, cursor: usize) -> Option<(Span, String, usize)> {
    let line = host.line_range(cursor);
    let original_end = line.end.0;
    let mut e = original_end;
    while e > line.start.0 {
        match host.char_at(e - 1) {
            Some('\n') | Some('\r') => e -= 1,
            _ => break,
        }
    }
    if e == original_end || original_end >= host.len() {
        // The current line has no terminator, so there is no next line.
        return None;
    }
    // `line_range` already guarantees the next line begins exactly where
    // this one's terminator run ends.
    let next_line = host.line_range(original_end);
    let mut s = next_line.start.0;
    let mut next_end = next_line.end.0;
    while next_end > s {
        match host.char_at(next_end - 1) {
            Some('\n') | Some('\r') => next_end -= 1,
            _ => break,
        }
    }
    while s < next_end {
        match host.char_at(s) {
            Some(c) if is_whitespace(c) => s += 1,
            _ => break,
        }
    }
    if s >= next_end {
        s = next_end;
    }
    Some((Span::new(e, s), " ".to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeHost {
        text: Vec<char>,
    }

    impl FakeHost {
        fn new(s: &str) -> FakeHost {
            FakeHost { text: s.chars().collect() }
        }
    }

    impl Host for FakeHost {
        fn len(&self) -> usize {
            self.text.len()
        }
        fn substring(&self, range: Span) -> String {
            self.text[range.start.0..range.end.0].iter().collect()
        }
        fn char_at(&self, index: usize) -> Option<char> {
            self.text.get(index).copied()
        }
        fn line_range(&self, index: usize) -> Span {
            let mut start = index.min(self.text.len());
            while start > 0 && self.text[start - 1] != '\n' {
                start -= 1;
            }
            let mut end = index.min(self.text.len());
            while end < self.text.len() && self.text[end] != '\n' {
                end += 1;
            }
            if end < self.text.len() {
                end += 1;
            }
            Span::new(start, end)
        }
        fn selection(&self) -> Span {
            Span::caret(0)
        }
        fn set_selection(&mut self, _range: Span) {}
        fn should_change(&mut self, _range: Span, _replacement: &str) -> bool {
            true
        }
        fn replace(&mut self, _range: Span, _replacement: &str) {}
        fn did_change(&mut self, _range: Span, _replacement: &str) {}
        fn move_line_up(&mut self, cursor: usize, _count: usize) -> usize {
            cursor
        }
        fn move_line_down(&mut self, cursor: usize, _count: usize) -> usize {
            cursor
        }
        fn move_left(&mut self, cursor: usize, count: usize) -> usize {
            cursor.saturating_sub(count)
        }
        fn move_right(&mut self, cursor: usize, count: usize) -> usize {
            (cursor + count).min(self.text.len())
        }
        fn undo(&mut self) {}
        fn save(&mut self) {}
        fn close_window(&mut self) {}
        fn clipboard_get(&mut self) -> Option<String> {
            None
        }
        fn clipboard_set(&mut self, _text: String) {}
        fn set_caret_width(&mut self, _width: f64) {}
        fn request_redraw(&mut self) {}
        fn typing_font_glyph_width(&self, _glyph: char) -> f64 {
            8.0
        }
        fn beep(&mut self) {}
        fn set_status_line(&mut self, _text: String) {}
    }

    #[test]
    fn forward_word_skips_to_next_word() {
        let h = FakeHost::new("hello world");
        assert_eq!(forward_word(&h, 0, false), 6);
    }

    #[test]
    fn forward_word_at_end_of_buffer_stays() {
        let h = FakeHost::new("hi");
        assert_eq!(forward_word(&h, 2, false), 2);
    }

    #[test]
    fn backward_word_from_middle() {
        let h = FakeHost::new("hello world");
        assert_eq!(backward_word(&h, 6, false), 0);
    }

    #[test]
    fn char_search_forward_finds_target() {
        let h = FakeHost::new("abcabc\n");
        assert_eq!(char_search(&h, 0, 'c', Direction::Forward), Some(2));
    }

    #[test]
    fn char_search_miss_returns_none() {
        let h = FakeHost::new("abc\n");
        assert_eq!(char_search(&h, 0, 'z', Direction::Forward), None);
    }

    #[test]
    fn line_end_content_on_empty_line_is_line_start() {
        let h = FakeHost::new("abc\n\ndef\n");
        assert_eq!(line_end_content(&h, 4), 4);
    }

    #[test]
    fn line_end_exclusive_on_empty_line_is_empty_range() {
        let h = FakeHost::new("abc\n\ndef\n");
        assert_eq!(line_end_exclusive(&h, 4), 4);
    }

    #[test]
    fn line_end_exclusive_on_nonempty_line_includes_last_char() {
        let h = FakeHost::new("abc\ndef\n");
        assert_eq!(line_end_exclusive(&h, 0), 3);
    }

    #[test]
    fn join_lines_inserts_single_space() {
        let h = FakeHost::new("line1\nline2");
        let (range, text, cursor) = join_lines(&h, 0).unwrap();
        assert_eq!(range, Span::new(5, 6));
        assert_eq!(text, " ");
        assert_eq!(cursor, 5);
    }
}
