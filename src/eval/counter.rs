//! Evaluation call counter
//!
//! Profiling aid: counts node evaluations. A counter is passed explicitly to
//! the counted evaluation entry points instead of living in global state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Number of node `value` evaluations observed
#[derive(Debug, Default)]
pub struct EvalCounter {
    calls: AtomicU64,
}

impl EvalCounter {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one node evaluation
    #[inline]
    pub fn record(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Evaluations recorded since creation or the last reset
    #[inline]
    pub fn get(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Reset to zero, returning the previous count
    pub fn reset(&self) -> u64 {
        self.calls.swap(0, Ordering::Relaxed)
    }
}
