//! Single-flight debounce timer.
//!
//! Wraps an optional [`Instant`] deadline so that "at most one pending
//! commit" holds by construction: scheduling replaces the previous deadline
//! and a superseded deadline can never fire. The owner polls the timer from
//! the main tick loop (16ms cadence).

use std::time::{Duration, Instant};

/// A cancellable one-shot timer with last-write-wins scheduling.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    /// Delay applied by [`schedule`](Self::schedule).
    delay: Duration,
    /// The single outstanding deadline, if any.
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Create a timer that fires `delay` after each call to `schedule`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm the timer at `now + delay`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel_pending(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is currently armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Check the deadline against `now`.
    ///
    /// Returns `true` exactly once per scheduled deadline, the first time
    /// `now` reaches it; the deadline is cleared on fire.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
