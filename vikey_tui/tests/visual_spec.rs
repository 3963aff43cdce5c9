//! Visual and visual-line mode tests.

mod common;

use common::TestHarness;

#[test]
fn visual_line_join_delete_keeps_first_line_only() {
    let mut h = TestHarness::with_text("abc\ndef\nghi\n");
    h.set_cursor(4);
    h.feed("Vjd");
    assert_content!(h, "abc\nghi\n");
    assert_cursor!(h, 4);
}

#[test]
fn visual_mode_yank_copies_selection_and_returns_to_normal() {
    let mut h = TestHarness::with_text("hello world");
    h.set_cursor(0);
    h.feed("vlly");
    assert_mode!(h, vikey::state::Mode::Normal);
    assert_content!(h, "hello world");
}

#[test]
fn escape_from_visual_returns_to_normal_without_changing_buffer() {
    let mut h = TestHarness::with_text("hello");
    h.set_cursor(0);
    h.feed("v<esc>");
    assert_mode!(h, vikey::state::Mode::Normal);
    assert_content!(h, "hello");
}
