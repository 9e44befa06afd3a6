/// Round bookkeeping shared by the scheduler, resolver and game-over check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Global turn counter. Advances once per completed player phase, starting at 1.
    pub turn: u64,

    /// Damage the player has taken since the last completed NPC phase.
    /// Feeds the single batched "You took N damage." flash message.
    pub damage_taken: u32,

    /// Per-roll counter mixed into every deterministic seed.
    pub rng_nonce: u64,

    /// Set once by the game-over transition; the engine ignores commands afterwards.
    pub game_over: bool,

    /// Name of whatever dealt the killing blow to the player.
    pub killed_by: Option<String>,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            turn: 1,
            damage_taken: 0,
            rng_nonce: 0,
            game_over: false,
            killed_by: None,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
