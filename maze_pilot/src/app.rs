//! The per-frame pipeline and the main loop.
//!
//! One loop iteration, all on one thread: poll window input → frame
//! gate → capture → classify → map → apply → render. The only owned
//! mutable state is inside [`Pilot`] (position, gate reference time,
//! status line), passed by exclusive borrow each iteration.

use std::time::{Duration, Instant};

use anyhow::anyhow;
use log::{debug, info};

use hand_gesture::{command_for, fingers_up};
use maze_grid::{Command, Maze, MazeError, Navigator, Pos, DEFAULT_ROWS};

use crate::source::{Capture, HandSource};
use crate::throttle::{FrameGate, DEFAULT_MIN_INTERVAL};
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// PilotConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
pub struct PilotConfig {
    /// Maze rows, top-to-bottom: `0` = path, anything else = wall.
    pub rows: Vec<Vec<u8>>,
    pub start: Pos,
    /// Classification rate ceiling (see [`FrameGate`]).
    pub min_interval: Duration,
}

impl Default for PilotConfig {
    fn default() -> Self {
        PilotConfig {
            rows: DEFAULT_ROWS.iter().map(|r| r.to_vec()).collect(),
            start: Pos::new(0, 0),
            min_interval: DEFAULT_MIN_INTERVAL,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Pilot
// ════════════════════════════════════════════════════════════════════════════

/// All mutable loop state: the navigator, the frame gate, the status
/// line shown in the window.
pub struct Pilot {
    nav: Navigator,
    gate: FrameGate,
    pub status: String,
}

impl Pilot {
    /// Fails fast on an invalid maze or start cell, before any frame is
    /// processed.
    pub fn new(cfg: PilotConfig) -> Result<Self, MazeError> {
        let maze = Maze::parse(&cfg.rows)?;
        let nav = Navigator::new(maze, cfg.start)?;
        Ok(Pilot {
            nav,
            gate: FrameGate::new(cfg.min_interval),
            status: "ready - show 1-4 fingers to move".to_string(),
        })
    }

    /// Process one loop iteration's worth of input.
    ///
    /// The gate is consulted first; a closed gate means the source is
    /// not even polled, so landmark inference stays bounded at the gate
    /// rate. Every hand in the frame is classified, mapped, and applied
    /// in order — with several hands the last one processed wins.
    ///
    /// Returns the last non-`None` command mapped this frame.
    pub fn on_frame(&mut self, source: &mut dyn HandSource, now: Instant) -> Command {
        if !self.gate.try_pass_at(now) {
            return Command::None;
        }

        let hands = match source.capture() {
            Capture::Dropped => return Command::None, // transient; retry next pass
            Capture::Frame(hands) => hands,
        };

        let mut last = Command::None;
        for hand in &hands {
            let cmd = command_for(fingers_up(hand));
            if cmd == Command::None {
                continue;
            }
            last = cmd;
            let moved = self.nav.apply(cmd);
            let p = self.nav.position();
            if moved {
                info!("{:?} -> ({}, {})", cmd, p.x, p.y);
                self.status = format!("{:?} - now at ({}, {})", cmd, p.x, p.y);
            } else {
                debug!("{:?} blocked at ({}, {})", cmd, p.x, p.y);
                self.status = format!("{:?} blocked at ({}, {})", cmd, p.x, p.y);
            }
        }
        last
    }

    pub fn position(&self) -> Pos {
        self.nav.position()
    }

    pub fn maze(&self) -> &Maze {
        self.nav.maze()
    }

    pub fn rejected_moves(&self) -> u64 {
        self.nav.rejected_moves()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application with the given hand source.
///
/// Single-threaded cooperative loop; quit is polled once per iteration
/// and the source is dropped on exit (which releases the camera helper
/// in camera mode).
pub fn run(cfg: PilotConfig, mut source: Box<dyn HandSource>) -> anyhow::Result<()> {
    let mut pilot = Pilot::new(cfg)?;
    let mut vis = Visualizer::new(pilot.maze()).map_err(|e| anyhow!(e))?;

    while vis.is_open() {
        let input = vis.poll_input();
        if input.quit {
            break;
        }
        for count in input.counts {
            source.inject_count(count);
        }

        pilot.on_frame(source.as_mut(), Instant::now());

        vis.render(pilot.maze(), pilot.position(), &pilot.status);
    }

    info!("quit after {} rejected moves", pilot.rejected_moves());
    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
