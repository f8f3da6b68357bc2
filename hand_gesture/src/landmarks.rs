//! Hand landmark model, MediaPipe hand-model convention: 21 keypoints
//! with stable semantic indices (wrist = 0, four joints per finger).
//!
//! Landmarks are produced fresh per frame by a provider and never
//! retained across frames.

/// Keypoint indices into a [`HandLandmarks`] set.
pub mod keypoint {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// Number of keypoints in one hand set.
pub const LANDMARK_COUNT: usize = 21;

/// Fingertip indices, thumb first.
pub const TIP_IDS: [usize; 5] = [
    keypoint::THUMB_TIP,
    keypoint::INDEX_TIP,
    keypoint::MIDDLE_TIP,
    keypoint::RING_TIP,
    keypoint::PINKY_TIP,
];

/// One keypoint. Coordinates are normalized to the image (0.0–1.0),
/// top-left origin; `z` is depth relative to the wrist.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }
}

/// One detected hand: a fixed, ordered set of 21 keypoints.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        HandLandmarks { points }
    }

    pub fn point(&self, idx: usize) -> Landmark {
        self.points[idx]
    }

    /// Build a plausible landmark set with the given fingers extended.
    ///
    /// Used by the keyboard simulation source and by tests: the geometry
    /// is crude (straight fingers fanned above the palm, curled fingers
    /// folded back toward it) but satisfies the same tip/joint relations
    /// a mirror-flipped camera view of a raised right hand would.
    pub fn synthetic(up: [bool; 5]) -> Self {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points[keypoint::WRIST] = Landmark::new(0.50, 0.90, 0.0);

        // Thumb chain runs laterally from the palm. Extended thumb pokes
        // out to smaller x than its IP joint (mirrored view); a curled
        // thumb tucks back to larger x.
        let thumb_xs = if up[0] {
            [0.44, 0.38, 0.32, 0.26]
        } else {
            [0.44, 0.40, 0.38, 0.42]
        };
        for (j, &x) in thumb_xs.iter().enumerate() {
            points[keypoint::THUMB_CMC + j] = Landmark::new(x, 0.80 - 0.03 * j as f32, 0.0);
        }

        // The four fingers run vertically: MCP, PIP, DIP, TIP. An
        // extended tip sits above (smaller y than) its PIP; a curled tip
        // folds below it.
        for finger in 1..5 {
            let mcp = keypoint::INDEX_MCP + 4 * (finger - 1);
            let x = 0.42 + 0.06 * finger as f32;
            let ys = if up[finger] {
                [0.70, 0.55, 0.42, 0.30]
            } else {
                [0.70, 0.62, 0.68, 0.74]
            };
            for (j, &y) in ys.iter().enumerate() {
                points[mcp + j] = Landmark::new(x, y, 0.0);
            }
        }

        HandLandmarks { points }
    }

    /// Synthetic hand with exactly `count` fingers extended, raised in
    /// the order index, middle, ring, pinky, thumb — the natural order
    /// for counting gestures.
    pub fn synthetic_count(count: usize) -> Self {
        let mut up = [false; 5];
        for i in 0..count.min(4) {
            up[i + 1] = true;
        }
        if count >= 5 {
            up[0] = true;
        }
        Self::synthetic(up)
    }
}
