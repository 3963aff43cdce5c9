use std::time::Instant;

use crate::dispatch::{cmdline, normal, visual};
use crate::host::Host;
use crate::key::Key;
use crate::presentation;
use crate::state::{EditorState, Mode};

/// The modal keystroke interpreter. Owns only [`EditorState`] — never the
/// buffer itself — and is driven one key at a time, each call taking the
/// host by reference so the interpreter can't outlive or own it.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    state: EditorState,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Processes one key event. Returns whether it was consumed — an
    /// unconsumed event (typically any non-Escape key in Insert mode)
    /// falls through to the host's default handling.
    pub fn handle_key(&mut self, host: &mut dyn Host, key: Key, now: Instant) -> bool {
        let consumed = match self.state.mode {
            Mode::Normal => normal::handle(&mut self.state, host, key, now),
            Mode::Insert => self.handle_insert(key),
            Mode::Visual | Mode::VisualLine => visual::handle(&mut self.state, host, key),
            Mode::Command => cmdline::handle(&mut self.state, host, key),
        };

        if consumed {
            self.update_presentation(host);
        }
        consumed
    }

    fn handle_insert(&mut self, key: Key) -> bool {
        if key == Key::Escape {
            self.state.return_to_normal();
            true
        } else {
            // Typing itself is the host's responsibility: unconsumed
            // events fall through to its default handling, enabling
            // Insert-mode typing without interpreter involvement.
            false
        }
    }

    fn update_presentation(&mut self, host: &mut dyn Host) {
        let glyph_width = host.typing_font_glyph_width('W');
        let width = presentation::caret_width(self.state.mode, glyph_width);
        host.set_caret_width(width);
        host.set_status_line(presentation::status_line(&self.state));
        host.request_redraw();
    }
}
