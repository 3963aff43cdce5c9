use vikey::types::Span;

/// A single edit recorded for `undo`: the range the edit produced in the
/// post-edit text, what was there before, and the selection to restore.
struct UndoEntry {
    post_range: Span,
    old_text: String,
    selection_before: Span,
}

/// UTF-8-native text storage presenting a UTF-16 code-unit-indexed view,
/// A UTF-8-native implementation must either maintain a parallel
/// UTF-16 view or translate at every delegate boundary; it must never
/// leak UTF-8 byte offsets to the host.
///
/// `vikey::Host`'s offsets are always UTF-16 code units; every method
/// here converts to/from UTF-8 byte indices at the boundary and never
/// exposes a byte offset to a caller.
pub struct TuiBuffer {
    text: String,
    selection: Span,
    undo_stack: Vec<UndoEntry>,
    modified: bool,
}

impl TuiBuffer {
    pub fn new(text: String) -> TuiBuffer {
        TuiBuffer {
            text,
            selection: Span::caret(0),
            undo_stack: Vec::new(),
            modified: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn selection(&self) -> Span {
        self.selection
    }

    pub fn set_selection(&mut self, range: Span) {
        self.selection = range;
    }

    /// Total length in UTF-16 code units.
    pub fn utf16_len(&self) -> usize {
        self.text.chars().map(char::len_utf16).sum()
    }

    /// Byte index of the `u16_offset`-th UTF-16 code unit, or
    /// `self.text.len()` if `u16_offset` is at or past the end.
    fn byte_of(&self, u16_offset: usize) -> usize {
        let mut seen = 0usize;
        for (byte_idx, ch) in self.text.char_indices() {
            if seen >= u16_offset {
                return byte_idx;
            }
            seen += ch.len_utf16();
        }
        self.text.len()
    }

    pub fn char_at(&self, u16_offset: usize) -> Option<char> {
        let mut seen = 0usize;
        for ch in self.text.chars() {
            if seen == u16_offset {
                return Some(ch);
            }
            seen += ch.len_utf16();
        }
        None
    }

    pub fn substring(&self, range: Span) -> String {
        let start = self.byte_of(range.start.0);
        let end = self.byte_of(range.end.0);
        self.text[start..end].to_string()
    }

    /// The line containing `u16_offset`, terminator included, as a
    /// UTF-16-offset `Span`.
    pub fn line_range(&self, u16_offset: usize) -> Span {
        let byte = self.byte_of(u16_offset);
        let bytes = self.text.as_bytes();

        let mut start_byte = byte.min(bytes.len());
        while start_byte > 0 && bytes[start_byte - 1] != b'\n' {
            start_byte -= 1;
        }
        let mut end_byte = byte.min(bytes.len());
        while end_byte < bytes.len() && bytes[end_byte] != b'\n' {
            end_byte += 1;
        }
        if end_byte < bytes.len() {
            end_byte += 1;
        }

        Span::new(self.utf16_offset_of_byte(start_byte), self.utf16_offset_of_byte(end_byte))
    }

    fn utf16_offset_of_byte(&self, byte_idx: usize) -> usize {
        self.text[..byte_idx].chars().map(char::len_utf16).sum()
    }

    pub fn replace(&mut self, range: Span, replacement: &str) {
        let before_selection = self.selection;
        let old_text = self.substring(range);
        let start = self.byte_of(range.start.0);
        let end = self.byte_of(range.end.0);
        self.text.replace_range(start..end, replacement);
        self.modified = true;

        let post_range = Span::new(range.start.0, range.start.0 + replacement.chars().map(char::len_utf16).sum::<usize>());
        self.undo_stack.push(UndoEntry {
            post_range,
            old_text,
            selection_before: before_selection,
        });
    }

    /// Reverts the most recent `replace`, restoring text and selection.
    pub fn undo(&mut self) {
        let Some(entry) = self.undo_stack.pop() else {
            return;
        };
        let start = self.byte_of(entry.post_range.start.0);
        let end = self.byte_of(entry.post_range.end.0);
        self.text.replace_range(start..end, &entry.old_text);
        self.selection = entry.selection_before;
    }
}
