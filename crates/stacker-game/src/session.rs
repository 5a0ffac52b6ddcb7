//! Game loop and state machine.
//!
//! ```text
//!            activate                 miss / slid off
//!   Idle ───────────────> Playing ───────────────────> Over
//!    ^                       │ activate (hit)            │
//!    │                       └──> Playing                │
//!    └──────────────────── restart ──────────────────────┘
//! ```
//!
//! Every frame runs a fixed sequence while the loop is running: advance the
//! moving layer, check for game over, advance the camera, step physics, sync
//! overhangs, render. Input arrives either directly through
//! [`Session::handle`] or queued through [`Session::enqueue`]; queued events
//! are applied at the start of the next frame, never mid-update.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use stacker_core::{layer_color, Axis, Extent, GameConfig, Gateway, Hud, Result};
use tracing::{debug, info, trace};

use crate::alignment::{align, Alignment, Cut};
use crate::camera::CameraRig;
use crate::overhang::OverhangRegistry;
use crate::stack::{Layer, LayerStack};

/// Session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Base layer only, waiting for the first activation.
    #[default]
    Idle,
    Playing,
    Over,
}

/// Abstract input understood by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Tap, click, or key press.
    Activate,
    /// Restart control.
    Restart,
}

/// What an event did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventOutcome {
    /// The first moving layer was spawned.
    Started,
    /// The moving layer landed.
    Placed(Cut),
    /// The moving layer missed; the game is over.
    Missed,
    /// The session was reset.
    Restarted,
    /// The event is not valid in the current state.
    Ignored,
}

/// What a frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameOutcome {
    /// The loop is stopped.
    Skipped,
    /// A full gameplay frame ran.
    Advanced,
    /// The moving layer slid past the play field this frame.
    GameOver,
    /// Game over, but debris from a missed layer is still simulated.
    Settling,
}

/// Serializable view of a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: GameState,
    pub score: u32,
    pub layers: Vec<Layer>,
    pub fragments: usize,
    pub camera_y: f32,
    pub loop_running: bool,
}

/// One play session.
///
/// Owns the tower, the overhang fragments, the camera, and the collaborators
/// it drives.
pub struct Session<G: Gateway, H: Hud> {
    config: GameConfig,
    gateway: G,
    hud: H,
    stack: LayerStack,
    overhangs: OverhangRegistry,
    camera: CameraRig,
    state: GameState,
    score: u32,
    loop_running: bool,
    pending: VecDeque<GameEvent>,
}

impl<G: Gateway, H: Hud> Session<G, H> {
    /// Create a session with the base layer in place.
    pub fn new(config: GameConfig, gateway: G, hud: H) -> Result<Self> {
        config.validate()?;

        let mut session = Self {
            overhangs: OverhangRegistry::new(config.fragment_mass, config.max_overhangs),
            camera: CameraRig::new(config.camera_start, config.camera_headroom),
            config,
            gateway,
            hud,
            stack: LayerStack::new(),
            state: GameState::Idle,
            score: 0,
            loop_running: false,
            pending: VecDeque::new(),
        };
        session.spawn_base();
        session.hud.set_score(0);
        session.hud.set_game_over_visible(false);

        info!(block_size = session.config.block_size, "session created");
        Ok(session)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of successful placements.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn stack(&self) -> &LayerStack {
        &self.stack
    }

    #[must_use]
    pub const fn overhangs(&self) -> &OverhangRegistry {
        &self.overhangs
    }

    #[must_use]
    pub const fn camera(&self) -> &CameraRig {
        &self.camera
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_loop_running(&self) -> bool {
        self.loop_running
    }

    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    #[must_use]
    pub const fn hud(&self) -> &H {
        &self.hud
    }

    /// Queue an event for the start of the next frame.
    pub fn enqueue(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    /// Apply an event immediately.
    pub fn handle(&mut self, event: GameEvent) -> EventOutcome {
        match event {
            GameEvent::Activate => self.activate(),
            GameEvent::Restart => {
                self.restart();
                EventOutcome::Restarted
            }
        }
    }

    /// Tap/click: start the game or drop the moving layer.
    pub fn activate(&mut self) -> EventOutcome {
        match self.state {
            GameState::Idle => {
                self.start();
                EventOutcome::Started
            }
            GameState::Playing => self.drop_layer(),
            GameState::Over => EventOutcome::Ignored,
        }
    }

    /// Reset to a fresh tower. Safe to call in any state.
    pub fn restart(&mut self) {
        self.stop_loop();
        self.pending.clear();
        self.stack.clear();
        self.overhangs.clear();
        self.gateway.clear_visuals();
        self.camera.reset();
        self.state = GameState::Idle;
        self.spawn_base();

        self.score = 0;
        self.hud.set_score(0);
        self.hud.set_game_over_visible(false);
        info!("session restarted");
    }

    /// Run one frame.
    pub fn frame(&mut self) -> FrameOutcome {
        // Take the whole batch so a restart inside it cannot discard the
        // events queued after it.
        for event in std::mem::take(&mut self.pending) {
            self.handle(event);
        }

        if !self.loop_running {
            return FrameOutcome::Skipped;
        }

        if self.state == GameState::Over {
            self.simulate();
            return FrameOutcome::Settling;
        }

        let speed = self.config.speed;
        let top = self.stack.top_mut();
        let axis = top.axis.expect("moving layer has an axis");
        let advanced = axis.component(top.position) + speed;
        axis.set_component(&mut top.position, advanced);
        let (body, position) = (top.body, top.position);
        self.gateway.set_body_translation(body, position);

        if axis.component(position) > self.config.play_field_limit {
            info!(score = self.score, "moving layer left the play field");
            self.game_over(false);
            return FrameOutcome::GameOver;
        }

        self.camera.advance(self.stack.len(), speed);
        self.simulate();
        trace!(camera_y = self.camera.position().y, "frame");
        FrameOutcome::Advanced
    }

    /// Serializable summary of the current session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            score: self.score,
            layers: self.stack.as_slice().to_vec(),
            fragments: self.overhangs.len(),
            camera_y: self.camera.position().y,
            loop_running: self.loop_running,
        }
    }

    /// Start the frame loop. Idempotent.
    pub fn start_loop(&mut self) {
        self.loop_running = true;
    }

    /// Stop the frame loop. Idempotent.
    pub fn stop_loop(&mut self) {
        self.loop_running = false;
    }

    /// Fit the camera frustum to a viewport in pixels.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    fn spawn_base(&mut self) {
        let size = self.config.block_size;
        self.stack
            .add_layer(&mut self.gateway, 0.0, 0.0, Extent::new(size, size), None);
    }

    fn start(&mut self) {
        let size = self.config.block_size;
        self.stack.add_layer(
            &mut self.gateway,
            self.config.spawn_offset,
            0.0,
            Extent::new(size, size),
            Some(Axis::X),
        );
        self.state = GameState::Playing;
        self.start_loop();
        info!("game started");
    }

    fn drop_layer(&mut self) -> EventOutcome {
        let alignment = align(
            self.stack.top(),
            self.stack.second_from_top(),
            self.config.spawn_offset,
        );

        match alignment {
            Alignment::Hit(cut) => {
                self.apply_cut(&cut);
                EventOutcome::Placed(cut)
            }
            Alignment::Miss { delta, overlap } => {
                info!(delta, overlap, score = self.score, "layer missed");
                self.game_over(self.config.drop_missed_layer);
                EventOutcome::Missed
            }
        }
    }

    fn apply_cut(&mut self, cut: &Cut) {
        self.stack
            .place_top(&mut self.gateway, cut.position, cut.extent);

        // Overhangs take the hue one step past the layer they were cut from.
        if let Some(slice) = cut.overhang {
            self.overhangs.add_overhang(
                &mut self.gateway,
                slice.position,
                slice.extent,
                layer_color(self.stack.len()),
            );
        }

        self.score = u32::try_from(self.stack.len() - 1).unwrap_or(u32::MAX);
        self.hud.set_score(self.score);

        let (x, z) = cut.next_spawn;
        self.stack
            .add_layer(&mut self.gateway, x, z, cut.extent, Some(cut.next_axis));

        debug!(
            score = self.score,
            overlap = cut.overlap,
            axis = ?cut.axis,
            "layer placed"
        );
    }

    /// Enter `Over`. With `drop_top`, the moving layer becomes debris and the
    /// loop keeps simulating so it can fall.
    fn game_over(&mut self, drop_top: bool) {
        self.state = GameState::Over;
        self.hud.set_game_over_visible(true);

        if drop_top {
            let index = self.stack.len() - 1;
            if let Some(layer) = self.stack.pop() {
                self.gateway.remove_body(layer.body);
                self.overhangs.add_overhang(
                    &mut self.gateway,
                    layer.position,
                    layer.extent,
                    layer_color(index),
                );
            }
        } else {
            self.stop_loop();
        }
    }

    fn simulate(&mut self) {
        self.gateway.step_simulation(self.config.physics_dt);
        self.overhangs.sync_all(&self.gateway);
        self.gateway.render_frame(&self.camera.view());
    }
}
