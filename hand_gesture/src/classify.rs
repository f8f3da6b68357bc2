//! Per-frame finger-extension classification.
//!
//! A pure function of one landmark set: no smoothing, no history. Each
//! finger is judged by comparing its tip against a reference joint two
//! positions closer to the palm.

use crate::landmarks::{keypoint, HandLandmarks, TIP_IDS};

/// Which of the five fingers are extended, thumb first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerState(pub [bool; 5]);

impl FingerState {
    pub fn count(self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }

    pub fn thumb(self) -> bool {
        self.0[0]
    }
}

/// Classify one hand into a [`FingerState`].
///
/// * **Thumb** (lateral): extended iff `tip.x < ip.x`. This assumes the
///   mirror-flipped camera view of a raised right hand — a fixed,
///   documented assumption; the un-mirrored case is not detected.
/// * **Index/middle/ring/pinky** (vertical): extended iff the tip is
///   above its PIP joint (`tip.y < pip.y`, top-left origin).
///
/// Partially-visible hands still yield a value for every finger; there
/// is no "unknown" state.
pub fn fingers_up(hand: &HandLandmarks) -> FingerState {
    let mut up = [false; 5];

    up[0] = hand.point(keypoint::THUMB_TIP).x < hand.point(keypoint::THUMB_IP).x;

    for (i, &tip) in TIP_IDS.iter().enumerate().skip(1) {
        up[i] = hand.point(tip).y < hand.point(tip - 2).y;
    }

    FingerState(up)
}
