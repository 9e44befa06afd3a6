//! Combat and health resolution.
//!
//! Every hp change in the simulation goes through this module. Damage that
//! drives an actor to `hp <= 0` runs death processing in the same call:
//! message, removal from map and turn queue, loot roll. Dead actors stop
//! resolving as living targets, so later hits against them are no-ops and
//! death fires exactly once.
//!
//! # Core Functions
//!
//! - [`heal`]: hp increase clamped to `max_hp`
//! - [`damage`] / [`damage_from`]: hp decrease, batching and death trigger
//! - [`kill`]: damage equal to current hp
//! - [`adjust`]: signed convenience wrapper
//! - [`melee`]: rolled attack between two actors

mod death;
mod melee;
mod resolver;

pub use death::{DeathReport, LootRoll};
pub use melee::melee;
pub use resolver::{DamageOutcome, Source, adjust, damage, damage_from, heal, kill};
