//! Frame gate: bounds how often the classification pipeline runs.
//!
//! A leaky bucket of one. Landmark inference is the expensive step, so
//! the gate caps it at a fixed rate independent of the camera's frame
//! rate. Skipped frames are still rendered — they are only dropped from
//! classification, permanently: no queueing, no catch-up.

use std::time::{Duration, Instant};

/// Default classification ceiling: once per 100 ms (10 Hz).
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct FrameGate {
    min_interval: Duration,
    last: Instant,
}

impl FrameGate {
    /// `last` starts at the construction instant, so the first frames
    /// are gated until a full interval has elapsed.
    pub fn new(min_interval: Duration) -> Self {
        FrameGate { min_interval, last: Instant::now() }
    }

    /// Gate check against an explicit clock reading.
    ///
    /// Passes iff strictly more than `min_interval` has elapsed since
    /// the last passed frame, claiming `now` as the new reference.
    pub fn try_pass_at(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) > self.min_interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Gate check against the wall clock.
    pub fn try_pass(&mut self) -> bool {
        self.try_pass_at(Instant::now())
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn first_frame_within_interval_is_dropped() {
        // `t0` predates the gate's reference instant, so both checks sit
        // inside the interval no matter how slowly this test runs.
        let t0 = Instant::now();
        let mut gate = FrameGate::new(Duration::from_millis(100));
        assert!(!gate.try_pass_at(t0));
        assert!(!gate.try_pass_at(t0 + 50 * MS));
    }

    #[test]
    fn exact_interval_is_dropped() {
        let t0 = Instant::now();
        let mut gate = FrameGate::new(Duration::from_millis(100));
        // Claim a known reference point well past construction.
        let a = t0 + 1000 * MS;
        assert!(gate.try_pass_at(a));
        // Exactly min_interval later: `>` is strict, so this drops.
        assert!(!gate.try_pass_at(a + 100 * MS));
        assert!(gate.try_pass_at(a + 101 * MS));
    }

    #[test]
    fn processed_frames_are_spaced_beyond_interval() {
        let t0 = Instant::now();
        let mut gate = FrameGate::new(Duration::from_millis(100));

        // Synthetic 30 fps stream: one frame every 33 ms.
        let mut passed = Vec::new();
        for i in 1..=60u32 {
            let ts = t0 + 33 * i * MS;
            if gate.try_pass_at(ts) {
                passed.push(ts);
            }
        }

        assert!(!passed.is_empty());
        for pair in passed.windows(2) {
            assert!(pair[1] - pair[0] > Duration::from_millis(100));
        }
    }

    #[test]
    fn dropped_frames_do_not_move_the_reference() {
        let t0 = Instant::now();
        let mut gate = FrameGate::new(Duration::from_millis(100));
        let a = t0 + 1000 * MS;
        assert!(gate.try_pass_at(a));
        // A burst of dropped frames must not push the window forward.
        for i in 0..10u32 {
            assert!(!gate.try_pass_at(a + (10 + i) * MS));
        }
        assert!(gate.try_pass_at(a + 101 * MS));
    }
}
