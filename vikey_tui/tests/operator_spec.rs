//! Operator (`d`/`y`/`c`) tests against the real host.

mod common;

use common::TestHarness;

#[test]
fn dd_deletes_the_current_line() {
    let mut h = TestHarness::with_text("abc\ndef\nghi\n");
    h.set_cursor(4);
    h.feed("dd");
    assert_content!(h, "abc\nghi\n");
}

#[test]
fn dd_on_only_line_empties_the_buffer() {
    let mut h = TestHarness::with_text("only\n");
    h.set_cursor(0);
    h.feed("dd");
    assert_content!(h, "");
}

#[test]
fn caret_then_cc_preserves_indent() {
    let mut h = TestHarness::with_text("  x = 1\n  y = 2\n");
    h.set_cursor(2);
    h.feed("^cc");
    assert_content!(h, "  \n  y = 2\n");
    assert_cursor!(h, 2);
    assert_mode!(h, vikey::state::Mode::Insert);
}

#[test]
fn yank_leaves_buffer_and_cursor_unchanged() {
    let mut h = TestHarness::with_text("hello world");
    h.set_cursor(0);
    h.feed("yw");
    assert_content!(h, "hello world");
    assert_cursor!(h, 0);
}

#[test]
fn yyp_duplicates_the_current_line() {
    let mut h = TestHarness::with_text("abc\ndef\n");
    h.set_cursor(0);
    h.feed("yyp");
    assert_content!(h, "abc\nabc\ndef\n");
}

#[test]
fn undo_restores_text_after_dd() {
    let mut h = TestHarness::with_text("abc\ndef\n");
    h.set_cursor(0);
    h.feed("dd");
    assert_content!(h, "def\n");
    h.feed("u");
    assert_content!(h, "abc\ndef\n");
}
