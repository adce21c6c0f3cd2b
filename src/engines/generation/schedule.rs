use std::time::{Duration, Instant};

/// Handle for the periodic stepping of one run.
///
/// The engine owns at most one. Dropping the handle cancels the schedule; there
/// is no background thread, the owner polls [`TickSchedule::fire`] from its own
/// loop so steps never overlap.
#[derive(Debug)]
pub struct TickSchedule {
    interval: Duration,
    next_due: Instant,
}

impl TickSchedule {
    /// First tick fires one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Consume a due tick and re-arm. Missed ticks are skipped rather than
    /// replayed back to back.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
