use std::time::{Duration, Instant};

/// Periodic redraw requests.
///
/// The event loop sleeps until `deadline()` and asks for a new frame every time `fire` returns
/// `true`.
#[derive(Debug, Clone)]
pub struct RedrawTimer {
    interval: Duration,
    deadline: Instant,
}

impl RedrawTimer {
    /// Builds a timer whose first deadline is one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> RedrawTimer {
        RedrawTimer {
            interval,
            deadline: now + interval,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns `true` if the deadline has been reached, in which case the next deadline is
    /// scheduled one interval after `now`.
    ///
    /// Missed periods are not made up for.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }

        self.deadline = now + self.interval;
        true
    }
}
