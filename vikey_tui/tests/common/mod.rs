//! Common test utilities for vikey_tui integration tests.

use std::time::Instant;

use vikey::host::Host;
use vikey::interpreter::Interpreter;
use vikey::key::{parse_keys, Key};
use vikey::state::Mode;
use vikey::types::Span;
use vikey_tui::host::TuiHost;

/// Wraps an [`Interpreter`] and a real [`TuiHost`], feeding keys through
/// the same fallthrough path `main.rs` uses for unconsumed Insert-mode
/// typing.
#[allow(dead_code)]
pub struct TestHarness {
    pub interpreter: Interpreter,
    pub host: TuiHost,
}

#[allow(dead_code)]
impl TestHarness {
    pub fn new() -> TestHarness {
        TestHarness {
            interpreter: Interpreter::new(),
            host: TuiHost::new(String::new(), None),
        }
    }

    pub fn with_text(text: &str) -> TestHarness {
        let mut h = TestHarness::new();
        h.host.buffer.replace(Span::caret(0), text);
        h
    }

    pub fn content(&self) -> String {
        self.host.buffer.text().to_string()
    }

    pub fn cursor(&self) -> usize {
        self.host.selection().start.0
    }

    pub fn mode(&self) -> Mode {
        self.interpreter.mode()
    }

    pub fn set_cursor(&mut self, offset: usize) {
        self.host.set_selection(Span::caret(offset));
    }

    pub fn feed(&mut self, keys: &str) {
        for key in parse_keys(keys) {
            self.feed_key(key);
        }
    }

    fn feed_key(&mut self, key: Key) {
        let consumed = self
            .interpreter
            .handle_key(&mut self.host, key, Instant::now());
        if consumed || self.interpreter.mode() != Mode::Insert {
            return;
        }
        self.apply_insert_key(key);
    }

    fn apply_insert_key(&mut self, key: Key) {
        let cursor = self.host.selection().start.0;
        match key {
            Key::Char(c) => {
                let s = c.to_string();
                if self.host.guarded_replace(Span::caret(cursor), &s) {
                    self.host.set_selection(Span::caret(cursor + c.len_utf16()));
                }
            }
            Key::Enter => {
                if self.host.guarded_replace(Span::caret(cursor), "\n") {
                    self.host.set_selection(Span::caret(cursor + 1));
                }
            }
            Key::Backspace if cursor > 0 => {
                let range = Span::new(cursor - 1, cursor);
                if self.host.guarded_replace(range, "") {
                    self.host.set_selection(Span::caret(cursor - 1));
                }
            }
            _ => {}
        }
    }
}

impl Default for TestHarness {
    fn default() -> TestHarness {
        TestHarness::new()
    }
}

#[macro_export]
macro_rules! assert_content {
    ($harness:expr, $expected:expr) => {
        assert_eq!($harness.content(), $expected, "buffer content mismatch");
    };
}

#[macro_export]
macro_rules! assert_cursor {
    ($harness:expr, $expected:expr) => {
        assert_eq!($harness.cursor(), $expected, "cursor position mismatch");
    };
}

#[macro_export]
macro_rules! assert_mode {
    ($harness:expr, $mode:pat) => {
        assert!(
            matches!($harness.mode(), $mode),
            "mode mismatch: got {:?}",
            $harness.mode()
        );
    };
}
