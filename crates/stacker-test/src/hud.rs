//! HUD that records what it was told to show.

use stacker_core::Hud;

/// A single call made on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudCall {
    Score(u32),
    GameOver(bool),
}

/// HUD double.
#[derive(Debug, Default)]
pub struct RecordingHud {
    calls: Vec<HudCall>,
    score: Option<u32>,
    game_over: bool,
}

impl RecordingHud {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last score shown, if any.
    #[must_use]
    pub const fn score(&self) -> Option<u32> {
        self.score
    }

    #[must_use]
    pub const fn game_over_visible(&self) -> bool {
        self.game_over
    }

    /// Every call in order.
    #[must_use]
    pub fn calls(&self) -> &[HudCall] {
        &self.calls
    }
}

impl Hud for RecordingHud {
    fn set_score(&mut self, score: u32) {
        self.score = Some(score);
        self.calls.push(HudCall::Score(score));
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        self.game_over = visible;
        self.calls.push(HudCall::GameOver(visible));
    }
}
