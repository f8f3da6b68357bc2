//! # maze_pilot
//!
//! Steer a player through a fixed 10×10 maze with hand gestures: the
//! number of extended fingers picks the direction.
//!
//! ## Gesture → Move mapping
//!
//! | Extended fingers | Move |
//! |---|---|
//! | 1 | Up |
//! | 2 | Right |
//! | 3 | Down |
//! | 4 | Left |
//! | fist / open palm | hold |
//!
//! Moves into walls or off the grid are silently ignored — the player
//! simply doesn't budge.
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: digit keys stand in for gestures.
//! * `camera` — **Camera mode**: reads hand landmarks from the external
//!   landmarker helper process watching the webcam.
//!
//! ### Simulation keyboard shortcuts
//!
//! | Key | Meaning |
//! |---|---|
//! | `1`–`4` | show that many fingers (move up/right/down/left) |
//! | `0` / `5` | fist / open palm (hold) |
//! | `Q` / `Escape` | quit |
//!
//! Classification runs at most once per 100 ms regardless of how fast
//! frames (or key presses) arrive; anything in between is dropped.

pub mod app;
pub mod source;
pub mod throttle;
pub mod visualizer;

#[cfg(feature = "camera")]
pub mod camera;

pub use app::{run, Pilot, PilotConfig};
pub use source::{Capture, HandSource, SimHandSource};
pub use throttle::FrameGate;
