//! Motion tests against the real UTF-8/UTF-16-translating host.

mod common;

use common::TestHarness;

#[test]
fn dw_deletes_first_word() {
    let mut h = TestHarness::with_text("hello world");
    h.set_cursor(0);
    h.feed("dw");
    assert_content!(h, "world");
    assert_cursor!(h, 0);
}

#[test]
fn counted_word_motion_reaches_end() {
    let mut h = TestHarness::with_text("one two three");
    h.set_cursor(0);
    h.feed("3w");
    assert_cursor!(h, 13);
}

#[test]
fn counted_l_motion_moves_n_columns() {
    let mut h = TestHarness::with_text("abcdef");
    h.set_cursor(0);
    h.feed("3l");
    assert_cursor!(h, 3);
}

#[test]
fn h_at_start_of_buffer_is_a_no_op() {
    let mut h = TestHarness::with_text("abc");
    h.set_cursor(0);
    h.feed("h");
    assert_cursor!(h, 0);
}

#[test]
fn join_lines_inserts_a_single_space() {
    let mut h = TestHarness::with_text("line1\nline2");
    h.set_cursor(0);
    h.feed("J");
    assert_content!(h, "line1 line2");
    assert_cursor!(h, 5);
}
