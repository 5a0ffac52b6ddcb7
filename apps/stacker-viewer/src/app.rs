//! Viewer application.

use stacker_app::{AppContext, FrameContext, GameApp};
use stacker_core::{GameConfig, Gateway};
use stacker_game::{FrameOutcome, GameState, Session};
use stacker_input::InputManager;
use stacker_physics::RapierGateway;
use stacker_render::{RenderGateway, WindowPresenter};
use tracing::{debug, info, warn};
use winit::event::WindowEvent;

use crate::hud::TitleHud;

/// Game settings from the command line.
#[derive(Debug, Clone, Default)]
pub struct ViewerParams {
    pub speed: Option<f32>,
    pub keep_missed: bool,
}

impl ViewerParams {
    /// Parse viewer parameters from command line arguments.
    pub fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut params = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--speed" => {
                    if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                        params.speed = Some(v);
                    }
                }
                "--keep-missed" => params.keep_missed = true,
                _ => {}
            }
        }

        params
    }

    fn game_config(&self) -> GameConfig {
        let config = GameConfig::default().with_drop_missed_layer(!self.keep_missed);
        match self.speed {
            Some(speed) => config.with_speed(speed),
            None => config,
        }
    }
}

pub struct Viewer {
    session: Session<RenderGateway<WindowPresenter>, TitleHud>,
    input: InputManager,
    last_state: GameState,
}

impl GameApp for Viewer {
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
        let params = ViewerParams::from_args();
        let config = params.game_config();
        info!(speed = config.speed, "Starting game");

        let size = ctx.window.inner_size();
        // Platform surface errors are not `Send`, so only the message is kept
        let presenter = WindowPresenter::new(ctx.window.clone())
            .map_err(|err| anyhow::anyhow!("Failed to create window surface: {err}"))?;
        let gateway = RenderGateway::new(
            RapierGateway::new(config.gravity),
            presenter,
            size.width,
            size.height,
        );
        let hud = TitleHud::new(ctx.window.clone());
        let mut session = Session::new(config, gateway, hud)?;
        session.set_viewport(size.width, size.height);

        Ok(Self {
            session,
            input: InputManager::new(),
            last_state: GameState::Idle,
        })
    }

    fn update(&mut self, _ctx: &AppContext, frame: &FrameContext) {
        for event in self.input.drain_events() {
            self.session.enqueue(event);
        }

        match self.session.frame() {
            FrameOutcome::GameOver => info!(score = self.session.score(), "Game over"),
            // The session only draws while its loop runs; keep the still
            // tower on screen.
            FrameOutcome::Skipped => {
                let view = self.session.camera().view();
                self.session.gateway_mut().render_frame(&view);
            }
            FrameOutcome::Advanced | FrameOutcome::Settling => {}
        }

        let state = self.session.state();
        if state != self.last_state {
            debug!(from = ?self.last_state, to = ?state, "State changed");
            self.last_state = state;
        }

        if frame.frame_number % 600 == 0 {
            let gateway = self.session.gateway();
            debug!(
                frame = frame.frame_number,
                bodies = gateway.physics().body_count(),
                presented = gateway.frames_presented(),
                camera_y = self.session.camera().position().y,
                "Scene"
            );
        }
    }

    fn on_event(&mut self, event: &WindowEvent) -> bool {
        self.input.process_window_event(event)
    }

    fn on_resize(&mut self, _ctx: &mut AppContext, width: u32, height: u32) {
        self.session.set_viewport(width, height);
        if let Err(err) = self.session.gateway_mut().resize(width, height) {
            warn!(%err, width, height, "Failed to resize render target");
        }
    }

    fn cleanup(&mut self, _ctx: &mut AppContext) {
        let snapshot = self.session.snapshot();
        info!(
            score = snapshot.score,
            layers = snapshot.layers.len(),
            fragments = snapshot.fragments,
            "Final tower"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ViewerParams {
        ViewerParams::parse(args.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn defaults_match_game_defaults() {
        let params = parse(&[]);
        let config = params.game_config();
        assert!((config.speed - GameConfig::default().speed).abs() < f32::EPSILON);
        assert!(config.drop_missed_layer);
    }

    #[test]
    fn parses_speed_and_keep_missed() {
        let params = parse(&["--speed", "0.3", "--keep-missed"]);
        assert_eq!(params.speed, Some(0.3));
        assert!(!params.game_config().drop_missed_layer);
    }

    #[test]
    fn ignores_bad_speed() {
        assert!(parse(&["--speed", "fast"]).speed.is_none());
    }
}
