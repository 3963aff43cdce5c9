use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use vikey::host::Host;
use vikey::types::Span;

use crate::buffer::TuiBuffer;
use crate::clipboard::SystemClipboard;

/// The concrete [`Host`] this terminal session presents to the
/// interpreter: an in-memory buffer, the real system clipboard, and the
/// handful of host actions (`save`, `close_window`, `beep`) a terminal
/// can plausibly perform.
pub struct TuiHost {
    pub buffer: TuiBuffer,
    clipboard: SystemClipboard,
    pub file_path: Option<PathBuf>,
    pub caret_width: f64,
    pub status_line: String,
    pub should_quit: bool,
    pub redraw_requested: bool,
    beep_count: u32,
}

impl TuiHost {
    pub fn new(text: String, file_path: Option<PathBuf>) -> TuiHost {
        TuiHost {
            buffer: TuiBuffer::new(text),
            clipboard: SystemClipboard::new(),
            file_path,
            caret_width: 10.0,
            status_line: String::new(),
            should_quit: false,
            redraw_requested: true,
            beep_count: 0,
        }
    }

    pub fn beep_count(&self) -> u32 {
        self.beep_count
    }
}

impl Host for TuiHost {
    fn len(&self) -> usize {
        self.buffer.utf16_len()
    }

    fn substring(&self, range: Span) -> String {
        self.buffer.substring(range)
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.buffer.char_at(index)
    }

    fn line_range(&self, index: usize) -> Span {
        self.buffer.line_range(index)
    }

    fn selection(&self) -> Span {
        self.buffer.selection()
    }

    fn set_selection(&mut self, range: Span) {
        self.buffer.set_selection(range);
    }

    fn should_change(&mut self, _range: Span, _replacement: &str) -> bool {
        true
    }

    fn replace(&mut self, range: Span, replacement: &str) {
        self.buffer.replace(range, replacement);
    }

    fn did_change(&mut self, _range: Span, _replacement: &str) {
        self.redraw_requested = true;
    }

    fn move_line_up(&mut self, cursor: usize, count: usize) -> usize {
        move_vertically(&self.buffer, cursor, count, Vertical::Up)
    }

    fn move_line_down(&mut self, cursor: usize, count: usize) -> usize {
        move_vertically(&self.buffer, cursor, count, Vertical::Down)
    }

    fn move_left(&mut self, cursor: usize, count: usize) -> usize {
        cursor.saturating_sub(count)
    }

    fn move_right(&mut self, cursor: usize, count: usize) -> usize {
        (cursor + count).min(self.buffer.utf16_len().saturating_sub(1).max(cursor))
    }

    fn undo(&mut self) {
        self.buffer.undo();
    }

    fn save(&mut self) {
        if let Some(path) = &self.file_path {
            if let Err(err) = fs::write(path, self.buffer.text()) {
                self.status_line = format!("error writing {}: {err}", path.display());
                return;
            }
        }
        self.status_line = "written".to_string();
    }

    fn close_window(&mut self) {
        self.should_quit = true;
    }

    fn clipboard_get(&mut self) -> Option<String> {
        self.clipboard.get()
    }

    fn clipboard_set(&mut self, text: String) {
        self.clipboard.set(text);
    }

    fn set_caret_width(&mut self, width: f64) {
        self.caret_width = width;
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn typing_font_glyph_width(&self, _glyph: char) -> f64 {
        // A terminal cell is a fixed width regardless of glyph; this
        // just needs to land inside the caret-width clamp range.
        10.0
    }

    fn beep(&mut self) {
        self.beep_count += 1;
        let _ = write!(io::stdout(), "\u{7}");
        let _ = io::stdout().flush();
    }

    fn set_status_line(&mut self, text: String) {
        self.status_line = text;
    }
}

enum Vertical {
    Up,
    Down,
}

/// Moves `count` lines up/down from `cursor`, preserving the column
/// within the line as well as possible (clamped to the target line's
/// content length) — vertical motion a host, not the interpreter,
/// is expected to own.
fn move_vertically(buffer: &TuiBuffer, cursor: usize, count: usize, dir: Vertical) -> usize {
    let mut pos = cursor;
    for _ in 0..count {
        let line = buffer.line_range(pos);
        let col = pos - line.start.0;
        let next_line = match dir {
            Vertical::Up => {
                if line.start.0 == 0 {
                    break;
                }
                buffer.line_range(line.start.0 - 1)
            }
            Vertical::Down => {
                if line.end.0 >= buffer.utf16_len() {
                    break;
                }
                buffer.line_range(line.end.0)
            }
        };
        let content_len = content_len(buffer, next_line);
        pos = next_line.start.0 + col.min(content_len);
    }
    pos
}

fn content_len(buffer: &TuiBuffer, line: Span) -> usize {
    let mut end = line.end.0;
    while end > line.start.0 {
        match buffer.char_at(end - 1) {
            Some('\n') | Some('\r') => end -= 1,
            _ => break,
        }
    }
    end.saturating_sub(line.start.0).saturating_sub(1)
}
