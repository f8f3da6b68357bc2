//! Webcam hand landmarks via an external landmarker helper process
//! (feature = `camera`).
//!
//! No maintained MediaPipe bindings exist for Rust, so the helper (a
//! small Python script wrapping the MediaPipe hand landmarker) owns the
//! webcam and prints one JSON line per camera frame:
//!
//! ```text
//! [[{"x":0.51,"y":0.87,"z":0.0}, ... 21 points], ...one array per hand]
//! ```
//!
//! A reader thread feeds parsed lines into a channel; `capture` takes
//! the newest one. The core loop stays single-threaded — this thread is
//! part of the capture collaborator, exactly like a camera driver.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;

use hand_gesture::landmarks::LANDMARK_COUNT;
use hand_gesture::{HandLandmarks, Landmark};

use crate::source::{Capture, HandSource};

#[derive(Debug, Deserialize)]
struct WirePoint {
    x: f32,
    y: f32,
    #[serde(default)]
    z: f32,
}

pub struct CameraHandSource {
    child: Child,
    rx: Receiver<Vec<HandLandmarks>>,
}

impl CameraHandSource {
    /// Spawn the landmarker helper and start draining its stdout.
    pub fn spawn(helper: &Path) -> Result<Self> {
        let mut child = Command::new(helper)
            .stdout(Stdio::piped())
            .stdin(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn landmarker helper {}", helper.display()))?;

        let stdout = child
            .stdout
            .take()
            .context("landmarker helper has no stdout")?;

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(_) => break, // helper died; channel closes with us
                };
                match parse_hands_line(&line) {
                    Ok(hands) => {
                        if tx.send(hands).is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("discarding malformed landmarker line: {}", e),
                }
            }
        });

        Ok(CameraHandSource { child, rx })
    }
}

impl HandSource for CameraHandSource {
    fn capture(&mut self) -> Capture {
        // Take the newest frame, discarding anything older — stale
        // landmark sets are never replayed.
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(hands) => latest = Some(hands),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        match latest {
            Some(hands) => Capture::Frame(hands),
            None => Capture::Dropped,
        }
    }
}

impl Drop for CameraHandSource {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn parse_hands_line(line: &str) -> Result<Vec<HandLandmarks>> {
    let wire: Vec<Vec<WirePoint>> =
        serde_json::from_str(line).context("landmarker line is not a hand array")?;

    let mut hands = Vec::with_capacity(wire.len());
    for points in wire {
        if points.len() != LANDMARK_COUNT {
            anyhow::bail!("hand has {} landmarks, expected {}", points.len(), LANDMARK_COUNT);
        }
        let mut set = [Landmark::default(); LANDMARK_COUNT];
        for (slot, p) in set.iter_mut().zip(points) {
            *slot = Landmark::new(p.x, p.y, p.z);
        }
        hands.push(HandLandmarks::new(set));
    }
    Ok(hands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_hand_line() {
        let one = r#"{"x":0.1,"y":0.2,"z":0.0}"#;
        let hand = format!("[{}]", vec![one; 21].join(","));
        let line = format!("[{}]", hand);
        let hands = parse_hands_line(&line).unwrap();
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].point(0), Landmark::new(0.1, 0.2, 0.0));
    }

    #[test]
    fn parses_empty_frame() {
        assert!(parse_hands_line("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_short_hand() {
        let one = r#"{"x":0.1,"y":0.2}"#;
        let line = format!("[[{}]]", vec![one; 5].join(","));
        assert!(parse_hands_line(&line).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_hands_line("not json").is_err());
    }
}
