//! Deterministic turn-based simulation core for a dungeon crawler.
//!
//! `crawl-core` owns the rules that run between two player inputs: the turn
//! scheduler, combat and death resolution, buff ticking and hunger/thirst
//! attrition. Map generation, rendering, input parsing and persistence are
//! consumed through the narrow traits in [`env`] and [`action`].
//! All state mutation for a round flows through [`engine::GameEngine`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod needs;
pub mod state;
pub mod status;

pub use action::{Command, ConsumeCommand, StepCommand, WaitCommand};
pub use combat::{DamageOutcome, DeathReport, LootRoll, Source};
pub use config::{AutoHealConfig, ConfigError, GameConfig, HazardConfig, LootConfig, NeedsConfig};
pub use engine::{GameEngine, RoundOutcome};
pub use env::{
    AiStrategy, BuiltinAi, CellEffects, GameEnv, GameOverSummary, GridMap, MapDimensions,
    MapOracle, NoCellEffects, PcgRng, RngOracle, RollContext, Screen, ScreenStack, StaticTile,
    TerrainEffects, TerrainKind,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActorState, ActorTemplate, AiKind, Buff, BuffKind, Buffs, Direction, EntitiesState, EntityId,
    GameState, ItemHandle, MessageLog, NeedKind, NeedsState, Position, StateError, TurnQueue,
    TurnState, WorldState,
};
