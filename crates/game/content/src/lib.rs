//! Data files for the crawl simulation core.
//!
//! Loaders turn on-disk content into `crawl-core` values:
//! - Game configuration (TOML)
//! - Static grid maps (ASCII glyph rows)
//! - NPC templates (RON)
//!
//! Content feeds the environment and spawn calls; it never lives in game state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ConfigLoader, LoadResult, MapLoader};
