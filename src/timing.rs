//! Reset-on-fire timing gates
//!
//! A gate runs its body at most once per interval. When it fires, the mark
//! moves to `now` rather than `mark + interval`, so missed intervals are
//! dropped instead of replayed in a burst.

use embassy_time::{Duration, Instant};

/// Decide whether a gate fires at `now`.
///
/// Returns whether the body should run and the mark to store for the next
/// call.
pub fn elapsed_since(last_mark: Instant, now: Instant, interval: Duration) -> (bool, Instant) {
    let elapsed = now.as_millis().saturating_sub(last_mark.as_millis());
    if elapsed >= interval.as_millis() {
        (true, now)
    } else {
        (false, last_mark)
    }
}

/// Stored "last fired" mark for one call site.
///
/// Every call site owns its own gate. Sharing one between effects or strips
/// makes them steal each other's ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    mark: Instant,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

impl Gate {
    /// Create a gate whose first interval is measured from time zero
    pub const fn new() -> Self {
        Self {
            mark: Instant::from_millis(0),
        }
    }

    /// Create a gate whose first interval is measured from `now`
    pub const fn starting_at(now: Instant) -> Self {
        Self { mark: now }
    }

    /// Returns `true` and re-arms the gate if `interval` has passed
    pub fn ready(&mut self, now: Instant, interval: Duration) -> bool {
        let (fire, mark) = elapsed_since(self.mark, now, interval);
        self.mark = mark;
        fire
    }

    /// Same as [`Gate::ready`] with the interval in milliseconds
    pub fn ready_ms(&mut self, now: Instant, interval_ms: u64) -> bool {
        self.ready(now, Duration::from_millis(interval_ms))
    }

    /// Restart the interval from `now`
    pub fn reset(&mut self, now: Instant) {
        self.mark = now;
    }

    /// Last time the gate fired
    pub const fn mark(&self) -> Instant {
        self.mark
    }
}
