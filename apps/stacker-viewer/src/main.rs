//! Stacker viewer.
//!
//! Drop the sliding block onto the tower. Overhangs are cut off and fall.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p stacker-viewer -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--speed <N>`: Distance the moving block travels per frame (default: 0.15)
//! - `--keep-missed`: Leave a missed block frozen in place instead of dropping it
//! - `-h, --help`: Print help message
//!
//! ## Controls
//!
//! - Click, tap, or Space: start / drop the block
//! - R or Enter: restart
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod app;
mod hud;

use stacker_app::{run_app, AppConfig};

use crate::app::Viewer;

const WIDTH: u32 = 720;
const HEIGHT: u32 = 960;
const TARGET_FPS: u32 = 60;

fn main() -> anyhow::Result<()> {
    // Check for help flag before starting the app
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    run_app::<Viewer>(
        AppConfig::new(hud::TITLE)
            .with_size(WIDTH, HEIGHT)
            .with_target_fps(TARGET_FPS),
    )
}

fn print_help() {
    eprintln!(
        "Stacker

USAGE:
    cargo run -p stacker-viewer -- [OPTIONS]

OPTIONS:
    --speed <N>     Distance the moving block travels per frame (default: 0.15)
    --keep-missed   Leave a missed block frozen instead of dropping it
    -h, --help      Print this help message

CONTROLS:
    Click, tap, Space   Start / drop the block
    R, Enter            Restart

ENVIRONMENT VARIABLES:
    RUST_LOG        Set log level (e.g., info, debug, trace)"
    );
}
