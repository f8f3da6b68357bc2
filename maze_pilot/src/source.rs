//! Hand-frame sources — keyboard simulation and (behind the `camera`
//! feature) the webcam landmarker.
//!
//! The pipeline only ever sees [`Capture`] values, so it can't tell a
//! simulated hand from a real one.

use hand_gesture::HandLandmarks;

/// Result of one capture attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Capture {
    /// Transient failure (device hiccup, no data ready). Never fatal:
    /// skip this iteration and try again on the next.
    Dropped,
    /// A frame was read. An empty vec means no hand was detected.
    Frame(Vec<HandLandmarks>),
}

/// Anything that can produce hand landmark sets, polled once per loop
/// iteration after the frame gate passes.
pub trait HandSource {
    fn capture(&mut self) -> Capture;

    /// Feed a digit-key press into the source. Only simulation sources
    /// care; hardware-backed sources ignore it.
    fn inject_count(&mut self, _count: u8) {}
}

// ════════════════════════════════════════════════════════════════════════════
// SimHandSource — keyboard simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Simulation source: the visualizer pushes finger counts from digit-key
/// presses; `capture` synthesizes one hand from the most recent count.
///
/// Counts queued while the gate is closed are discarded on the next
/// capture (only the newest survives), matching the real pipeline where
/// skipped camera frames are gone for good.
#[derive(Debug, Default)]
pub struct SimHandSource {
    pending: Vec<u8>,
}

impl SimHandSource {
    pub fn new() -> Self {
        SimHandSource::default()
    }

    /// Record a digit-key press (0–5 fingers shown).
    pub fn push_count(&mut self, count: u8) {
        self.pending.push(count.min(5));
    }
}

impl HandSource for SimHandSource {
    fn capture(&mut self) -> Capture {
        match self.pending.drain(..).last() {
            Some(count) => {
                Capture::Frame(vec![HandLandmarks::synthetic_count(count as usize)])
            }
            None => Capture::Frame(Vec::new()),
        }
    }

    fn inject_count(&mut self, count: u8) {
        self.push_count(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hand_gesture::fingers_up;

    #[test]
    fn empty_sim_source_sees_no_hands() {
        let mut src = SimHandSource::new();
        assert_eq!(src.capture(), Capture::Frame(Vec::new()));
    }

    #[test]
    fn sim_source_synthesizes_pressed_count() {
        let mut src = SimHandSource::new();
        src.push_count(3);
        match src.capture() {
            Capture::Frame(hands) => {
                assert_eq!(hands.len(), 1);
                assert_eq!(fingers_up(&hands[0]).count(), 3);
            }
            Capture::Dropped => panic!("sim source never drops"),
        }
    }

    #[test]
    fn only_newest_queued_count_survives() {
        let mut src = SimHandSource::new();
        src.push_count(1);
        src.push_count(4);
        src.push_count(2);
        match src.capture() {
            Capture::Frame(hands) => assert_eq!(fingers_up(&hands[0]).count(), 2),
            Capture::Dropped => panic!("sim source never drops"),
        }
        // Drained: next capture is hand-free.
        assert_eq!(src.capture(), Capture::Frame(Vec::new()));
    }

    #[test]
    fn counts_above_five_are_clamped() {
        let mut src = SimHandSource::new();
        src.push_count(9);
        match src.capture() {
            Capture::Frame(hands) => assert_eq!(fingers_up(&hands[0]).count(), 5),
            Capture::Dropped => panic!("sim source never drops"),
        }
    }
}
