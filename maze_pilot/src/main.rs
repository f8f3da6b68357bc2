//! maze_pilot — interactive entry point.

use std::io::{self, Write};
use std::time::Duration;

use maze_grid::Pos;
use maze_pilot::{run, HandSource, PilotConfig};

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║     Maze Pilot — hand gesture maze navigation    ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "camera")]
    println!("  Mode: webcam landmarker");
    #[cfg(not(feature = "camera"))]
    println!("  Mode: keyboard simulation  (build with --features camera for a webcam)");
    println!();
    println!("  1 finger = up   2 = right   3 = down   4 = left");
    println!();

    let cfg = if std::env::args().any(|a| a == "--quick") {
        println!("  Quick-start: default layout, start (0,0), 10 Hz\n");
        PilotConfig::default()
    } else {
        configure()
    };

    println!("  Opening maze window…");
    println!();

    let source = make_source();
    let source = match source {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cfg, source) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "camera"))]
fn make_source() -> anyhow::Result<Box<dyn HandSource>> {
    Ok(Box::new(maze_pilot::SimHandSource::new()))
}

#[cfg(feature = "camera")]
fn make_source() -> anyhow::Result<Box<dyn HandSource>> {
    use maze_pilot::camera::CameraHandSource;
    use std::path::PathBuf;

    let helper = std::env::var_os("MAZE_PILOT_LANDMARKER")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tools/hand_landmarker.py"));
    Ok(Box::new(CameraHandSource::spawn(&helper)?))
}

fn configure() -> PilotConfig {
    // Args first, prompts for whatever is left out.
    let args: Vec<String> = std::env::args().collect();

    let interval_ms = arg_value(&args, "--interval-ms")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or_else(|| {
            read_line("  Classification interval ms (default 100): ")
                .trim()
                .parse()
                .unwrap_or(100)
        })
        .clamp(10, 5000);

    let start = arg_value(&args, "--start")
        .and_then(parse_start)
        .unwrap_or_else(|| {
            parse_start(read_line("  Start cell X,Y (default 0,0): ").trim().to_string())
                .unwrap_or(Pos::new(0, 0))
        });

    PilotConfig {
        start,
        min_interval: Duration::from_millis(interval_ms),
        ..PilotConfig::default()
    }
}

fn arg_value(args: &[String], name: &str) -> Option<String> {
    args.iter().position(|a| a == name).and_then(|i| args.get(i + 1).cloned())
}

fn parse_start(s: String) -> Option<Pos> {
    let (x, y) = s.split_once(',')?;
    Some(Pos::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
