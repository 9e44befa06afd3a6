use crate::env::{GameOverSummary, Screen};

use super::GameEngine;

impl GameEngine<'_> {
    /// Pushes the game-over screen if the player is dead.
    ///
    /// Returns true only on the call that performed the transition.
    pub fn check_game_over(&mut self) -> bool {
        if self.state.is_player_alive() {
            return false;
        }
        self.trigger_game_over()
    }

    pub(super) fn trigger_game_over(&mut self) -> bool {
        if self.state.turn.game_over {
            return false;
        }
        self.state.turn.game_over = true;

        let summary = GameOverSummary {
            turn: self.state.turn.turn,
            killed_by: self.state.turn.killed_by.clone(),
            strength: self.state.needs.strength,
        };
        tracing::debug!(
            turn = summary.turn,
            killed_by = ?summary.killed_by,
            "game over"
        );
        self.screens.push(Screen::GameOver(summary));
        true
    }
}
