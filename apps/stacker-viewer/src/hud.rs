//! HUD drawn into the window title.

use std::sync::Arc;

use stacker_core::Hud;
use winit::window::Window;

pub const TITLE: &str = "Stacker";

/// Shows the score and the game-over notice in the title bar.
pub struct TitleHud {
    window: Arc<Window>,
    score: u32,
    game_over: bool,
}

impl TitleHud {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            score: 0,
            game_over: false,
        }
    }

    fn refresh(&self) {
        self.window
            .set_title(&title_text(self.score, self.game_over));
    }
}

impl Hud for TitleHud {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.refresh();
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        self.game_over = visible;
        self.refresh();
    }
}

fn title_text(score: u32, game_over: bool) -> String {
    if game_over {
        format!("{TITLE} | Score: {score} | Game over! Press R to restart")
    } else {
        format!("{TITLE} | Score: {score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_shows_score() {
        assert_eq!(title_text(3, false), "Stacker | Score: 3");
    }

    #[test]
    fn title_shows_game_over() {
        assert!(title_text(7, true).ends_with("Game over! Press R to restart"));
    }
}
