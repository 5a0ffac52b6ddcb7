//! Stacker headless runner.
//!
//! Plays the game with a scripted player against the real physics backend
//! and logs a summary. Useful as a soak test and as a demo without a window.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p stacker-headless -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--frames <N>`: Frames to simulate (default: 3600)
//! - `--accuracy <F>`: How far past center the player drops, in world units (default: 0.0)
//! - `--restart`: Start a new game after each game over
//! - `--max-overhangs <N>`: Keep at most N fragments alive
//! - `-h, --help`: Print help message

use anyhow::{bail, Context};
use stacker_app::init_logging;
use stacker_core::GameConfig;
use stacker_game::{AutoPlayer, EventOutcome, FrameOutcome, GameState, Session};
use stacker_physics::RapierGateway;
use tracing::{debug, info};

/// HUD that logs instead of drawing.
#[derive(Debug, Default)]
struct LogHud;

impl stacker_core::Hud for LogHud {
    fn set_score(&mut self, score: u32) {
        debug!(score, "Score");
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        if visible {
            debug!("Game over shown");
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RunParams {
    frames: u64,
    accuracy: f32,
    restart: bool,
    max_overhangs: Option<usize>,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            frames: 3600,
            accuracy: 0.0,
            restart: false,
            max_overhangs: None,
        }
    }
}

impl RunParams {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut params = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--frames" => params.frames = value(&mut args, &arg)?,
                "--accuracy" => params.accuracy = value(&mut args, &arg)?,
                "--max-overhangs" => params.max_overhangs = Some(value(&mut args, &arg)?),
                "--restart" => params.restart = true,
                other => bail!("unknown argument: {other}"),
            }
        }

        if params.accuracy.is_nan() || params.accuracy < 0.0 {
            bail!("--accuracy must be non-negative");
        }
        Ok(params)
    }

    fn game_config(&self) -> GameConfig {
        let config = GameConfig::default();
        match self.max_overhangs {
            Some(max) => config.with_max_overhangs(max),
            None => config,
        }
    }
}

fn value<T>(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .next()
        .with_context(|| format!("{flag} needs a value"))?;
    raw.parse()
        .with_context(|| format!("invalid value for {flag}: {raw}"))
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    games: u32,
    best_score: u32,
    placements: u32,
    misses: u32,
}

fn run(params: &RunParams) -> anyhow::Result<Summary> {
    let config = params.game_config();
    let gateway = RapierGateway::new(config.gravity);
    let mut session = Session::new(config, gateway, LogHud)?;
    let player = AutoPlayer::new(params.accuracy).with_restart(params.restart);

    let mut summary = Summary::default();

    for frame in 0..params.frames {
        if let Some(event) = player.decide(&session) {
            match session.handle(event) {
                EventOutcome::Started => summary.games += 1,
                EventOutcome::Placed(_) => summary.placements += 1,
                EventOutcome::Missed => summary.misses += 1,
                EventOutcome::Restarted | EventOutcome::Ignored => {}
            }
        }

        if session.frame() == FrameOutcome::GameOver {
            info!(frame, score = session.score(), "Block slid off the field");
        }
        summary.best_score = summary.best_score.max(session.score());

        if session.state() == GameState::Over && !params.restart {
            break;
        }
    }

    let snapshot = session.snapshot();
    info!(
        state = ?snapshot.state,
        layers = snapshot.layers.len(),
        fragments = snapshot.fragments,
        bodies = session.gateway().body_count(),
        "Final session"
    );

    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    init_logging("info");

    let params = RunParams::parse(std::env::args().skip(1))?;
    info!(?params, "Stacker headless run");

    let summary = run(&params)?;
    info!(
        games = summary.games,
        best_score = summary.best_score,
        placements = summary.placements,
        misses = summary.misses,
        "Run complete"
    );

    Ok(())
}

fn print_help() {
    eprintln!(
        "Stacker headless runner

USAGE:
    cargo run -p stacker-headless -- [OPTIONS]

OPTIONS:
    --frames <N>         Frames to simulate (default: 3600)
    --accuracy <F>       How far past center the player drops (default: 0.0)
    --restart            Start a new game after each game over
    --max-overhangs <N>  Keep at most N fragments alive
    -h, --help           Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG             Set log level (e.g., info, debug, trace)"
    );
}
