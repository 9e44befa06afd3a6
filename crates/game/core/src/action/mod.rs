//! Player commands.
//!
//! A [`Command`] is produced by the input layer. The engine only cares whether
//! it succeeded: a successful command consumes the player's action and
//! triggers exactly one round.

mod consume;
mod movement;
mod wait;

pub use consume::ConsumeCommand;
pub use movement::StepCommand;
pub use wait::WaitCommand;

use crate::env::GameEnv;
use crate::state::GameState;

pub trait Command {
    /// Performs the player's action. Returns false if it was rejected and no
    /// time should pass.
    fn execute(&self, state: &mut GameState, env: &GameEnv<'_>) -> bool;
}
