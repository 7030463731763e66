//! Counter that keeps its value between calls

use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence counter: returns 0 on the first call, then 1, 2, ...
#[derive(Debug, Default)]
pub struct CallCounter {
    next: AtomicU64,
}

impl CallCounter {
    /// Create a counter starting at zero
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Return the current value and advance
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Number of calls made so far
    pub fn calls(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

static CALLS: CallCounter = CallCounter::new();

/// Process-wide call counter
pub fn count_calls() -> u64 {
    CALLS.next()
}
