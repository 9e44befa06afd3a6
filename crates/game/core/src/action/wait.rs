use crate::action::Command;
use crate::env::GameEnv;
use crate::state::GameState;

/// Pass the turn without doing anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitCommand;

impl Command for WaitCommand {
    fn execute(&self, state: &mut GameState, _env: &GameEnv<'_>) -> bool {
        state.is_player_alive()
    }
}
