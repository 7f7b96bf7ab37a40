//! Input rate limiting for the board's boundary events.
//!
//! Search-term changes are debounced before a new result set is produced, and
//! scroll-derived tracker updates are throttled. Both are policies applied to
//! inputs feeding the engine; the engine stays correct without them. Callers
//! pass the current instant so tests stay deterministic.

use std::time::{Duration, Instant};

/// Debounce applied to search input.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Throttle applied to scroll-driven active-section updates.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// Lets an event through at most once per interval. The first event passes
/// immediately.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// Whether an event arriving at `now` should be processed.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Holds an event until the input has been quiet for the wait period.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self { wait, deadline: None }
    }

    /// Note an input event at `now`, pushing the deadline out.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Whether the pending event is due at `now`. Consumes the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
