//! # hand_gesture
//!
//! Turns one frame's hand landmarks into a maze move command.
//!
//! ## Count → Command mapping
//!
//! | Extended fingers | Command |
//! |---|---|
//! | 1 | Up |
//! | 2 | Right |
//! | 3 | Down |
//! | 4 | Left |
//! | 0 or 5 | None |
//!
//! Classification is purely per-frame and stateless: no smoothing, no
//! temporal filtering. The frame gate upstream already dampens jitter at
//! the command-emission granularity.

pub mod classify;
pub mod landmarks;
pub mod mapper;

pub use classify::{fingers_up, FingerState};
pub use landmarks::{HandLandmarks, Landmark};
pub use mapper::{command_for, command_for_count};
