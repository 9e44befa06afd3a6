//! Buff tick engine.
//!
//! Runs once per actor per completed turn, after the stillness counter has
//! been bumped. Each buff's behaviour is a pure function of its kind, the
//! global turn and the owner's stillness ([`buff_effect`]); the engine applies
//! the effect, then consumes one turn of duration.

use crate::combat::{self, Source};
use crate::env::{GameEnv, RollContext};
use crate::state::{BuffKind, Buffs, EntityId, GameState};

/// What a buff does to its owner this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuffEffect {
    Damage {
        amount: u32,
        /// Shown only when the owner is the player.
        message: &'static str,
        cause: &'static str,
    },
    Heal(u32),
}

/// Per-kind rule for one elapsed turn.
///
/// `roll` yields a uniform 0-2 and is only invoked when the freeze rule needs it.
pub fn buff_effect(
    kind: BuffKind,
    turn: u64,
    since_move: u32,
    roll: impl FnOnce() -> u32,
) -> Option<BuffEffect> {
    let even_turn = turn % 2 == 0;
    match kind {
        BuffKind::Poison => even_turn.then_some(BuffEffect::Damage {
            amount: 1,
            message: "The poison burns in your veins.",
            cause: "poison",
        }),
        BuffKind::Freeze => {
            if !even_turn || since_move < 2 {
                return None;
            }
            let amount = roll();
            (amount > 0).then_some(BuffEffect::Damage {
                amount,
                message: "The cold bites into you.",
                cause: "frostbite",
            })
        }
        BuffKind::Burning => Some(BuffEffect::Damage {
            amount: 1,
            message: "You are burning!",
            cause: "fire",
        }),
        BuffKind::Regeneration => Some(BuffEffect::Heal(1)),
    }
}

/// What happened during one call to [`tick_buffs`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub damage_events: u32,
    pub expired: Vec<BuffKind>,
    /// The owner died mid-tick; remaining buffs were not processed.
    pub died: bool,
}

/// Applies and ages every buff on `id`.
///
/// Stops as soon as a buff kills its owner.
pub fn tick_buffs(state: &mut GameState, env: &GameEnv<'_>, id: EntityId) -> TickSummary {
    let mut summary = TickSummary::default();
    let Some(actor) = state.entities.living(id) else {
        return summary;
    };
    let pending: Buffs = actor.buffs.clone();
    let since_move = actor.since_move;
    let turn = state.turn.turn;

    for buff in pending.iter() {
        let effect = buff_effect(buff.kind, turn, since_move, || {
            let seed = state.next_seed(id, RollContext::Freeze);
            env.rng().range(seed, 0, 2)
        });

        match effect {
            Some(BuffEffect::Damage {
                amount,
                message,
                cause,
            }) => {
                if id.is_player() {
                    state.log.push(message);
                }
                summary.damage_events += 1;
                let outcome =
                    combat::damage_from(state, env, id, amount, Source::Environment(cause));
                if outcome.is_kill() {
                    tracing::debug!(actor = %id, kind = %buff.kind, "buff killed its owner");
                    summary.died = true;
                    return summary;
                }
            }
            Some(BuffEffect::Heal(amount)) => {
                combat::heal(state, id, amount);
            }
            None => {}
        }

        let remaining = state
            .entities
            .actor_mut(id)
            .and_then(|actor| actor.buffs.decrement(buff.kind));
        if remaining == Some(0) {
            summary.expired.push(buff.kind);
            if id.is_player() {
                state.log.push(format!("The {} wears off.", buff.kind));
            }
        }
    }

    summary
}
