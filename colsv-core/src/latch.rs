// The shared failure latch referenced throughout component G: a sticky
// boolean plus a reason code, set with Release and polled with Acquire so
// a worker that observes "failed" also observes the reason that was
// published alongside it (spec §9, "replacing the shared sticky-failure
// flag").

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

/// Reason code published when `set` is first called: `-1` denotes an
/// allocation failure, any other value an OS error number from a failed
/// write (spec §4.G.2, §7).
pub const REASON_ALLOC: i32 = -1;

#[derive(Default)]
pub struct FailureLatch {
    failed: AtomicBool,
    reason: AtomicI32,
}

impl FailureLatch {
    pub fn new() -> Self {
        FailureLatch {
            failed: AtomicBool::new(false),
            reason: AtomicI32::new(0),
        }
    }

    pub fn is_set(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }

    /// Publishes `reason` and sets the latch. Only the first call's reason
    /// sticks — later callers (other workers racing to report their own
    /// failure after the latch is already set) are silently ignored, since
    /// the caller receives exactly one error regardless.
    pub fn set(&self, reason: i32) {
        if !self.failed.swap(true, Ordering::Release) {
            self.reason.store(reason, Ordering::Release);
        }
    }

    pub fn reason(&self) -> i32 {
        self.reason.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn starts_unset() {
        let latch = FailureLatch::new();
        assert!(!latch.is_set());
    }

    #[test]
    fn first_set_reason_sticks() {
        let latch = FailureLatch::new();
        latch.set(5);
        latch.set(REASON_ALLOC);
        assert!(latch.is_set());
        assert_eq!(latch.reason(), 5);
    }
}
