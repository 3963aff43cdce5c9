//! Property-based tests for the interpreter's state-machine invariants.

use proptest::prelude::*;

use crate::accel;
use crate::state::EditorState;
use crate::types::Span;

proptest! {
    /// `clear_pending` always leaves every
    /// `pending_*` flag unarmed, for any prior state.
    #[test]
    fn clear_pending_always_fully_clears(
        count_prefix in 0u32..1000,
        pending_r in any::<bool>(),
        pending_g in any::<bool>(),
    ) {
        let mut s = EditorState::new();
        s.count_prefix = count_prefix;
        s.pending_r = pending_r;
        s.pending_g = pending_g;
        s.clear_pending();
        prop_assert!(!s.has_pending());
        prop_assert_eq!(s.count_prefix, 0);
    }

    /// The acceleration multiplier is always within `[1, 5]`, regardless
    /// of the elapsed time or prior repeat count fed to it.
    #[test]
    fn accel_multiplier_is_always_bounded(
        elapsed_ms in 0u64..2000,
        previous_repeat in 0u32..10_000,
    ) {
        let (multiplier, _) = accel::step(
            Some(std::time::Duration::from_millis(elapsed_ms)),
            previous_repeat,
        );
        prop_assert!((1..=5).contains(&multiplier));
    }

    /// `Span::normalized` always produces `start <= end` regardless of
    /// the order its arguments are given in.
    #[test]
    fn span_normalized_orders_endpoints(a in 0usize..10_000, b in 0usize..10_000) {
        let span = Span::normalized(a, b);
        prop_assert!(span.start.0 <= span.end.0);
        prop_assert_eq!(span.len(), a.max(b) - a.min(b));
    }
}
