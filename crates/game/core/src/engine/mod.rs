//! Turn scheduler.
//!
//! The [`GameEngine`] drives one round per accepted player command: the
//! player phase (buffs, cell effects, needs, auto-heal, turn counter) and then
//! every NPC in turn-queue order (AI, cell effects, buffs). Player death at
//! any point fires the game-over transition once and ends the round.

mod game_over;
mod round;

use crate::action::Command;
use crate::env::{GameEnv, ScreenStack};
use crate::state::GameState;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed,
    /// The game-over screen was pushed; no further rounds will run.
    PlayerDied,
}

/// Scheduler over a borrowed state, its collaborators and the UI screen stack.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
    screens: &'a mut dyn ScreenStack,
}

impl<'a> GameEngine<'a> {
    pub fn new(
        state: &'a mut GameState,
        env: GameEnv<'a>,
        screens: &'a mut dyn ScreenStack,
    ) -> Self {
        Self {
            state,
            env,
            screens,
        }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        self.state
    }

    pub fn env(&self) -> &GameEnv<'a> {
        &self.env
    }

    pub fn is_over(&self) -> bool {
        self.state.turn.game_over
    }

    /// Executes a player command and, if it succeeded, runs one round.
    ///
    /// Returns `None` when the command was rejected or the game is already over.
    pub fn submit(&mut self, command: &dyn Command) -> Option<RoundOutcome> {
        if self.is_over() {
            tracing::debug!("command ignored after game over");
            return None;
        }
        if !command.execute(self.state, &self.env) {
            return None;
        }
        Some(self.run_round())
    }
}
