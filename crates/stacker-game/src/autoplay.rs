//! Scripted player for demos and soak runs.

use stacker_core::{Gateway, Hud};

use crate::session::{GameEvent, GameState, Session};

/// Drops each layer once it passes a fixed offset past the layer beneath.
///
/// Layers always slide toward positive coordinates, so the offset between
/// the moving layer and the one below grows every frame. An `aim` of zero
/// drops as close to center as the frame step allows; larger values shave
/// the tower down by roughly `aim` per placement until it misses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoPlayer {
    aim: f32,
    restart_when_over: bool,
}

impl AutoPlayer {
    #[must_use]
    pub const fn new(aim: f32) -> Self {
        Self {
            aim,
            restart_when_over: false,
        }
    }

    /// Restart automatically after a game over.
    #[must_use]
    pub const fn with_restart(mut self, restart: bool) -> Self {
        self.restart_when_over = restart;
        self
    }

    /// The event to send this frame, if any.
    #[must_use]
    pub fn decide<G: Gateway, H: Hud>(&self, session: &Session<G, H>) -> Option<GameEvent> {
        match session.state() {
            GameState::Idle => Some(GameEvent::Activate),
            GameState::Playing => {
                let stack = session.stack();
                let top = stack.top();
                let axis = top.axis?;
                let below = stack.second_from_top();
                let delta = axis.component(top.position) - axis.component(below.position);
                (delta >= self.aim).then_some(GameEvent::Activate)
            }
            GameState::Over => self.restart_when_over.then_some(GameEvent::Restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacker_core::GameConfig;
    use stacker_test::{RecordingGateway, RecordingHud};

    fn session() -> Session<RecordingGateway, RecordingHud> {
        Session::new(
            GameConfig::default().with_drop_missed_layer(false),
            RecordingGateway::new(),
            RecordingHud::new(),
        )
        .unwrap()
    }

    fn play(player: AutoPlayer, frames: usize) -> Session<RecordingGateway, RecordingHud> {
        let mut s = session();
        for _ in 0..frames {
            if let Some(event) = player.decide(&s) {
                s.enqueue(event);
            }
            s.frame();
        }
        s
    }

    #[test]
    fn starts_an_idle_session() {
        let s = session();
        assert_eq!(AutoPlayer::new(0.0).decide(&s), Some(GameEvent::Activate));
    }

    #[test]
    fn centered_play_keeps_scoring() {
        let s = play(AutoPlayer::new(0.0), 2_000);

        assert_eq!(s.state(), GameState::Playing);
        assert!(s.score() >= 10);
    }

    #[test]
    fn sloppy_play_eventually_misses() {
        let s = play(AutoPlayer::new(0.8), 5_000);

        assert_eq!(s.state(), GameState::Over);
        assert!(s.score() >= 1);
    }

    #[test]
    fn restarts_when_asked() {
        let player = AutoPlayer::new(0.8).with_restart(true);
        let mut s = play(player, 5_000);
        while s.state() != GameState::Over {
            if let Some(event) = player.decide(&s) {
                s.enqueue(event);
            }
            s.frame();
        }

        assert_eq!(player.decide(&s), Some(GameEvent::Restart));
    }
}
