//! `j`/`k` repeat acceleration: presses arriving within the fast-repeat
//! window ramp the per-press line count up to 5x.

mod common;

use common::TestHarness;

#[test]
fn rapid_j_presses_ramp_the_multiplier() {
    let mut h = TestHarness::with_text("a\nb\nc\nd\ne\nf\ng\nh\ni\nj\n");
    h.set_cursor(0);
    // Multipliers for five presses arriving back-to-back: 1, 1, 2, 2, 3 -> 9 lines.
    h.feed("jjjjj");
    assert_cursor!(h, 18);
}

#[test]
fn a_lone_j_press_moves_exactly_one_line() {
    let mut h = TestHarness::with_text("a\nb\nc\n");
    h.set_cursor(0);
    h.feed("j");
    assert_cursor!(h, 2);
}

#[test]
fn sideways_motion_resets_acceleration() {
    let mut h = TestHarness::with_text("a\nb\nc\nd\ne\n");
    h.set_cursor(0);
    h.feed("jjl");
    h.feed("j");
    assert_cursor!(h, 7);
}
