use crate::types::Span;

/// The single delegate interface through which the interpreter observes
/// and mutates the host editor. The interpreter holds no owning reference
/// to anything implementing this trait: it is passed in per call, so the
/// interpreter cannot extend the host's lifetime.
///
/// All offsets are UTF-16 code-unit offsets into the host's buffer.
pub trait Host {
    /// Total length of the buffer, in UTF-16 code units.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The buffer content within `range`.
    fn substring(&self, range: Span) -> String;

    /// The code unit at `index`, decoded as a `char`. `None` past the end.
    fn char_at(&self, index: usize) -> Option<char>;

    /// The line range containing `index` (terminator included).
    fn line_range(&self, index: usize) -> Span;

    /// The current selection; length 0 means a plain caret.
    fn selection(&self) -> Span;

    fn set_selection(&mut self, range: Span);

    /// Permission gate: may the interpreter replace `range` with
    /// `replacement`? Must be called, and must return `true`, before
    /// `replace` — every handler gates through this permission check
    /// before mutating the buffer.
    fn should_change(&mut self, range: Span, replacement: &str) -> bool;

    /// Performs the replace. Only ever called after `should_change`
    /// returned `true`.
    fn replace(&mut self, range: Span, replacement: &str);

    /// Notifies the host the replace completed, so its undo stack and
    /// dirty-state tracking stay authoritative.
    fn did_change(&mut self, range: Span, replacement: &str);

    /// Performs a permission-gated replace in one call, returning whether
    /// the edit actually happened.
    fn guarded_replace(&mut self, range: Span, replacement: &str) -> bool {
        if !self.should_change(range, replacement) {
            return false;
        }
        self.replace(range, replacement);
        self.did_change(range, replacement);
        true
    }

    /// Moves `count` visual lines up from `cursor`, honoring the host's
    /// line wrapping, and returns the resulting offset.
    fn move_line_up(&mut self, cursor: usize, count: usize) -> usize;

    /// Moves `count` visual lines down from `cursor`.
    fn move_line_down(&mut self, cursor: usize, count: usize) -> usize;

    fn move_left(&mut self, cursor: usize, count: usize) -> usize;

    fn move_right(&mut self, cursor: usize, count: usize) -> usize;

    fn start_of_document(&self) -> usize {
        0
    }

    fn end_of_document(&self) -> usize {
        self.len()
    }

    fn undo(&mut self);

    fn save(&mut self);

    fn close_window(&mut self);

    /// Reads the system clipboard. `None` if empty or unavailable.
    fn clipboard_get(&mut self) -> Option<String>;

    fn clipboard_set(&mut self, text: String);

    fn set_caret_width(&mut self, width: f64);

    fn request_redraw(&mut self);

    /// Width, in points, of `glyph` in the current typing font — used to
    /// size the block caret.
    fn typing_font_glyph_width(&self, glyph: char) -> f64;

    fn beep(&mut self);

    fn set_status_line(&mut self, text: String);
}
