//! Collaborators the simulation consumes but does not own.
//!
//! The map, RNG, AI strategy and cell-effects capability are bundled in
//! [`GameEnv`] and passed by reference into every core operation, so the
//! scheduler never reaches into ambient globals.
mod ai;
mod cells;
mod map;
mod rng;
mod screen;

pub use ai::{AiStrategy, BuiltinAi};
pub use cells::{CellEffects, NoCellEffects, TerrainEffects};
pub use map::{GridMap, MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};
pub use screen::{GameOverSummary, Screen, ScreenStack};

use crate::config::GameConfig;

static DEFAULT_RNG: PcgRng = PcgRng;
static DEFAULT_AI: BuiltinAi = BuiltinAi;
static DEFAULT_CELLS: TerrainEffects = TerrainEffects;

/// Read-only context shared by the scheduler, resolver and tick engine.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    map: &'a dyn MapOracle,
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
    ai: &'a dyn AiStrategy,
    cells: &'a dyn CellEffects,
}

impl<'a> GameEnv<'a> {
    /// Env with the built-in RNG, AI and terrain effects.
    pub fn new(map: &'a dyn MapOracle, config: &'a GameConfig) -> Self {
        Self {
            map,
            config,
            rng: &DEFAULT_RNG,
            ai: &DEFAULT_AI,
            cells: &DEFAULT_CELLS,
        }
    }

    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_ai(mut self, ai: &'a dyn AiStrategy) -> Self {
        self.ai = ai;
        self
    }

    pub fn with_cells(mut self, cells: &'a dyn CellEffects) -> Self {
        self.cells = cells;
        self
    }

    pub fn map(&self) -> &'a dyn MapOracle {
        self.map
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn ai(&self) -> &'a dyn AiStrategy {
        self.ai
    }

    pub fn cells(&self) -> &'a dyn CellEffects {
        self.cells
    }
}
