use std::time::Duration;

/// The window within which successive `j`/`k` presses count as "fast"
/// repeats.
pub const FAST_REPEAT_WINDOW: Duration = Duration::from_millis(150);

/// Given the elapsed time since the previous `j`/`k` press and the
/// previous repeat count, returns `(multiplier, new_repeat_count)`.
///
/// Pure function of elapsed time so it's unit-testable without a real
/// clock — the interpreter supplies `now` from the caller rather than
/// reading it internally.
pub fn step(elapsed_since_last: Option<Duration>, previous_repeat_count: u32) -> (u32, u32) {
    let fast = matches!(elapsed_since_last, Some(d) if d < FAST_REPEAT_WINDOW);
    let repeat_count = if fast { previous_repeat_count + 1 } else { 0 };
    let multiplier = 1 + (repeat_count / 2).min(4);
    (multiplier, repeat_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_has_no_multiplier() {
        assert_eq!(step(None, 0), (1, 0));
    }

    #[test]
    fn ramps_1_1_2_2_3_3_4_4_5() {
        let fast = Some(Duration::from_millis(50));
        let (mut mult, mut repeat) = step(None, 0);
        let mut got = vec![mult];
        for _ in 0..9 {
            let (m, r) = step(fast, repeat);
            mult = m;
            repeat = r;
            got.push(mult);
        }
        assert_eq!(got, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
    }

    #[test]
    fn slow_repeat_resets() {
        let (mult, repeat) = step(Some(Duration::from_millis(50)), 7);
        assert_eq!((mult, repeat), (5, 8));
        let (mult, repeat) = step(Some(Duration::from_millis(300)), repeat);
        assert_eq!((mult, repeat), (1, 0));
    }
}
