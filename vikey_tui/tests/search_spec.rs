//! Search and word-under-cursor tests.

mod common;

use common::TestHarness;

#[test]
fn star_search_then_wraps_on_miss() {
    let mut h = TestHarness::with_text("aa bb aa cc");
    h.set_cursor(0);
    h.feed("*");
    assert_cursor!(h, 6);
    h.feed("n");
    assert_cursor!(h, 0);
}

#[test]
fn slash_search_finds_literal_pattern() {
    let mut h = TestHarness::with_text("one two three");
    h.set_cursor(0);
    h.feed("/three<cr>");
    assert_cursor!(h, 8);
}

#[test]
fn search_miss_beeps_and_leaves_cursor_unchanged() {
    let mut h = TestHarness::with_text("one two three");
    h.set_cursor(0);
    h.feed("/zzz<cr>");
    assert_cursor!(h, 0);
    assert!(h.host.beep_count() > 0);
}
