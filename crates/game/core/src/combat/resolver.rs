use crate::env::GameEnv;
use crate::state::{EntityId, GameState};

use super::death::{self, DeathReport};

/// Who or what dealt a hit. Used for death messages and the game-over summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Actor(EntityId),
    /// Named environmental cause such as "lava" or "starvation".
    Environment(&'static str),
    Unattributed,
}

impl From<Option<EntityId>> for Source {
    fn from(attacker: Option<EntityId>) -> Self {
        attacker.map_or(Source::Unattributed, Source::Actor)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target does not resolve to a living actor.
    Ignored,
    Wounded { hp: i32 },
    Killed(DeathReport),
}

impl DamageOutcome {
    pub fn is_kill(&self) -> bool {
        matches!(self, DamageOutcome::Killed(_))
    }
}

/// Raises hp by `amount`, never past `max_hp`.
///
/// Returns the hp actually restored. Zero amounts and dead or missing
/// targets are no-ops.
pub fn heal(state: &mut GameState, target: EntityId, amount: u32) -> u32 {
    if amount == 0 {
        return 0;
    }
    let Some(actor) = state
        .entities
        .actor_mut(target)
        .filter(|actor| actor.is_alive())
    else {
        return 0;
    };

    let before = actor.hp;
    actor.hp = actor
        .hp
        .saturating_add(clamp_amount(amount))
        .min(actor.max_hp);
    actor.hp.saturating_sub(before).max(0) as u32
}

/// Deals `amount` damage on behalf of an optional attacker.
pub fn damage(
    state: &mut GameState,
    env: &GameEnv<'_>,
    target: EntityId,
    amount: u32,
    attacker: Option<EntityId>,
) -> DamageOutcome {
    damage_from(state, env, target, amount, attacker.into())
}

/// Deals `amount` damage and runs death processing if hp reaches zero.
///
/// Being hit resets the target's natural-healing counter. Damage to the
/// player is accumulated into [`crate::state::TurnState::damage_taken`] and
/// reported as one flash line per round.
pub fn damage_from(
    state: &mut GameState,
    env: &GameEnv<'_>,
    target: EntityId,
    amount: u32,
    source: Source,
) -> DamageOutcome {
    let Some(actor) = state
        .entities
        .actor_mut(target)
        .filter(|actor| actor.is_alive())
    else {
        tracing::trace!(%target, amount, "damage against missing or dead actor ignored");
        return DamageOutcome::Ignored;
    };

    actor.regen_counter = 0;
    actor.hp = actor.hp.saturating_sub(clamp_amount(amount));
    if amount > 0 {
        actor.bloody = true;
    }
    let hp = actor.hp;

    if target.is_player() && amount > 0 {
        let total = state.turn.damage_taken.saturating_add(amount);
        state.turn.damage_taken = total;
        state.log.set_flash(format!("You took {total} damage."));
    }

    if hp > 0 {
        return DamageOutcome::Wounded { hp };
    }
    DamageOutcome::Killed(death::die(state, env, target, source))
}

/// Forces death by dealing damage equal to the target's current hp.
pub fn kill(
    state: &mut GameState,
    env: &GameEnv<'_>,
    target: EntityId,
    source: Source,
) -> DamageOutcome {
    let Some(hp) = state.entities.living(target).map(|actor| actor.hp) else {
        return DamageOutcome::Ignored;
    };
    damage_from(state, env, target, hp.max(1) as u32, source)
}

/// Routes positive deltas to [`heal`] and negative ones to [`damage`].
pub fn adjust(state: &mut GameState, env: &GameEnv<'_>, target: EntityId, delta: i32) {
    match delta {
        0 => {}
        d if d > 0 => {
            heal(state, target, d as u32);
        }
        d => {
            damage_from(state, env, target, d.unsigned_abs(), Source::Unattributed);
        }
    }
}

fn clamp_amount(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}
