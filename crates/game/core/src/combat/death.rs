use crate::env::{GameEnv, RollContext};
use crate::state::{EntityId, GameState, ItemHandle, Position};

use super::resolver::Source;

/// Result of the death-drop roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LootRoll {
    /// The player never drops loot.
    NotEligible,
    Missed,
    /// The roll hit but the cell refuses items (lava, full stack).
    Refused,
    Dropped(ItemHandle),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeathReport {
    pub victim: EntityId,
    /// Final hp, possibly negative after overkill.
    pub hp: i32,
    pub position: Position,
    pub loot: LootRoll,
}

/// Death processing. Only reached from `damage_from` at the blow that drives
/// hp to zero or below.
pub(super) fn die(
    state: &mut GameState,
    env: &GameEnv<'_>,
    victim: EntityId,
    source: Source,
) -> DeathReport {
    let (name, hp, last_position) = match state.entities.actor(victim) {
        Some(actor) => (actor.name.clone(), actor.hp, actor.position),
        None => (String::new(), 0, Position::default()),
    };
    let cause = match source {
        Source::Actor(id) => state.entities.actor(id).map(|a| a.name.clone()),
        Source::Environment(cause) => Some(cause.to_string()),
        Source::Unattributed => None,
    };
    let by_player = matches!(source, Source::Actor(id) if id.is_player());

    if victim.is_player() {
        state.log.push("You die...");
        state.turn.killed_by = cause;
    } else if by_player {
        state.log.push(format!("You kill the {name}!"));
    } else {
        tracing::debug!(%victim, name = %name, cause = ?cause, "actor died out of sight");
    }

    let position = state.remove_from_map(victim).unwrap_or(last_position);

    let loot = if victim.is_player() {
        LootRoll::NotEligible
    } else {
        state.discard(victim);
        roll_loot(state, env, victim, position)
    };
    if by_player && matches!(loot, LootRoll::Dropped(_)) {
        state.log.push(format!("The {name} dropped something."));
    }

    tracing::debug!(%victim, hp, %position, ?loot, "death processed");
    DeathReport {
        victim,
        hp,
        position,
        loot,
    }
}

fn roll_loot(
    state: &mut GameState,
    env: &GameEnv<'_>,
    victim: EntityId,
    position: Position,
) -> LootRoll {
    let loot = &env.config().loot;
    let seed = state.next_seed(victim, RollContext::Loot);
    if loot.table.is_empty() || !env.rng().one_in(seed, loot.one_in) {
        return LootRoll::Missed;
    }
    if !env.map().allows_items(position) {
        return LootRoll::Refused;
    }

    let seed = state.next_seed(victim, RollContext::LootItem);
    let index = env.rng().range(seed, 0, loot.table.len() as u32 - 1) as usize;
    let item = loot.table[index];
    if !state.world.drop_item(position, item) {
        return LootRoll::Refused;
    }
    LootRoll::Dropped(item)
}
