//! Auto-play timing
//!
//! Playback advances the cursor on a timer. Rather than a background thread,
//! the event loop owns a [`PlaybackTimer`] holding at most one pending tick
//! and asks it on every pass whether that tick is due. Scheduling replaces the
//! pending tick and cancelling drops it, so a tick that was superseded can
//! never be delivered.

use std::time::{Duration, Instant};
use tracing::trace;

/// Slowest speed setting
pub const MIN_SPEED: u64 = 500;
/// Fastest speed setting
pub const MAX_SPEED: u64 = 3000;
pub const DEFAULT_SPEED: u64 = 1000;
pub const DEFAULT_SPEED_STEP: u64 = 250;

/// Interval = `SPEED_INVERSION - speed` milliseconds
const SPEED_INVERSION: u64 = 3500;

/// Tick interval for a speed setting. Higher speed means a shorter interval;
/// out-of-range settings are clamped first.
pub fn interval_for_speed(speed: u64) -> Duration {
    let speed = clamp_speed(speed);
    Duration::from_millis(SPEED_INVERSION - speed)
}

pub fn clamp_speed(speed: u64) -> u64 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Identifies one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickId(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    id: TickId,
    due: Instant,
}

/// Single-slot cancellable timer
#[derive(Debug, Default)]
pub struct PlaybackTimer {
    pending: Option<PendingTick>,
    next_id: u64,
}

impl PlaybackTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick `interval` after `now`, replacing any pending one
    pub fn schedule(&mut self, now: Instant, interval: Duration) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        if let Some(old) = self.pending.replace(PendingTick {
            id,
            due: now + interval,
        }) {
            trace!(replaced = old.id.0, "pending tick replaced");
        }
        trace!(id = id.0, ?interval, "tick scheduled");
        id
    }

    /// Drop the pending tick, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let had = self.pending.take();
        if let Some(tick) = had {
            trace!(id = tick.id.0, "tick cancelled");
        }
        had.is_some()
    }

    /// Take the pending tick if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<TickId> {
        match self.pending {
            Some(tick) if now >= tick.due => {
                self.pending = None;
                Some(tick.id)
            }
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<TickId> {
        self.pending.map(|t| t.id)
    }

    /// Deadline of the pending tick
    pub fn due(&self) -> Option<Instant> {
        self.pending.map(|t| t.due)
    }

    /// Take the pending tick only if it is `id`, regardless of its deadline
    pub fn claim(&mut self, id: TickId) -> bool {
        if self.pending() == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_inverted() {
        assert_eq!(interval_for_speed(500), Duration::from_millis(3000));
        assert_eq!(interval_for_speed(1000), Duration::from_millis(2500));
        assert_eq!(interval_for_speed(3000), Duration::from_millis(500));
    }

    #[test]
    fn test_interval_clamps_speed() {
        assert_eq!(interval_for_speed(0), Duration::from_millis(3000));
        assert_eq!(interval_for_speed(10_000), Duration::from_millis(500));
    }

    #[test]
    fn test_poll_waits_for_deadline() {
        let start = Instant::now();
        let mut timer = PlaybackTimer::new();
        let id = timer.schedule(start, Duration::from_millis(100));

        assert_eq!(timer.poll(start + Duration::from_millis(99)), None);
        assert_eq!(timer.poll(start + Duration::from_millis(100)), Some(id));
        // consumed
        assert_eq!(timer.poll(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut timer = PlaybackTimer::new();
        timer.schedule(start, Duration::from_millis(10));

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.poll(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_reschedule_replaces() {
        let start = Instant::now();
        let mut timer = PlaybackTimer::new();
        let first = timer.schedule(start, Duration::from_millis(10));
        let second = timer.schedule(start, Duration::from_millis(50));

        assert_ne!(first, second);
        assert!(!timer.claim(first));
        assert_eq!(timer.poll(start + Duration::from_millis(20)), None);
        assert_eq!(timer.poll(start + Duration::from_millis(50)), Some(second));
    }
}
