//! Hunger/thirst attrition and natural healing for the player.
//!
//! Evaluated once per player turn by the scheduler. Levels, thresholds and
//! multipliers are all per-mille.

use crate::combat::{self, Source};
use crate::env::GameEnv;
use crate::state::{EntityId, GameState, NeedKind, NeedsState};

/// Outcome of one attrition step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeedsReport {
    /// Summed strength reduction after capping.
    pub reduction: u16,
    pub damage_events: u32,
    pub died: bool,
}

/// Accrues hunger and thirst, recomputes strength and applies threshold damage.
pub fn apply_needs(state: &mut GameState, env: &GameEnv<'_>) -> NeedsReport {
    let config = &env.config().needs;
    let mut report = NeedsReport::default();

    let mut reduction: u32 = 0;
    for kind in NeedKind::ALL {
        let level = state.needs.level(kind).saturating_add(config.rate(kind));
        state.needs.set_level(kind, level);

        let level = state.needs.level(kind);
        let crossed = config
            .thresholds(kind)
            .iter()
            .filter(|&&threshold| level >= threshold)
            .count() as u32;
        reduction += crossed * u32::from(config.reduction_step);
    }
    report.reduction = reduction.min(u32::from(config.max_reduction)) as u16;
    state.needs.strength = effective_strength(
        state.needs.base_strength,
        report.reduction,
        config.min_multiplier,
    );

    for kind in NeedKind::ALL {
        if state.needs.level(kind) < config.high(kind) {
            continue;
        }
        state.log.push(threshold_message(kind));
        report.damage_events += 1;
        let outcome = combat::damage_from(
            state,
            env,
            EntityId::PLAYER,
            config.threshold_damage,
            Source::Environment(threshold_cause(kind)),
        );
        if outcome.is_kill() {
            report.died = true;
            break;
        }
    }

    tracing::trace!(
        hunger = state.needs.hunger,
        thirst = state.needs.thirst,
        strength = state.needs.strength,
        "needs applied"
    );
    report
}

/// `ceil(base * max(min_multiplier, 1000 - reduction) / 1000)`.
pub fn effective_strength(base: u32, reduction: u16, min_multiplier: u16) -> u32 {
    let multiplier = 1000u16.saturating_sub(reduction).max(min_multiplier).min(1000);
    let scaled = u64::from(base) * u64::from(multiplier);
    scaled.div_ceil(1000) as u32
}

/// Natural healing is off while either resource is at or above its medium threshold.
pub fn auto_heal_suppressed(needs: &NeedsState, env: &GameEnv<'_>) -> bool {
    let config = &env.config().needs;
    NeedKind::ALL
        .into_iter()
        .any(|kind| needs.level(kind) >= config.medium(kind))
}

/// Advances the player's regeneration counter and heals when it fills up.
///
/// Returns the hp restored.
pub fn auto_heal(state: &mut GameState, env: &GameEnv<'_>) -> u32 {
    let Some(policy) = env.config().auto_heal else {
        return 0;
    };
    if auto_heal_suppressed(&state.needs, env) {
        return 0;
    }
    let Some(player) = state
        .entities
        .actor_mut(EntityId::PLAYER)
        .filter(|p| p.is_alive())
    else {
        return 0;
    };

    player.regen_counter += 1;
    if player.regen_counter < policy.interval {
        return 0;
    }
    player.regen_counter = 0;
    combat::heal(state, EntityId::PLAYER, policy.amount)
}

fn threshold_message(kind: NeedKind) -> &'static str {
    match kind {
        NeedKind::Hunger => "You are starving!",
        NeedKind::Thirst => "You are dying of thirst!",
    }
}

fn threshold_cause(kind: NeedKind) -> &'static str {
    match kind {
        NeedKind::Hunger => "starvation",
        NeedKind::Thirst => "dehydration",
    }
}
