use crate::combat::{self, Source};
use crate::env::{GameEnv, TerrainKind};
use crate::state::{BuffKind, EntityId, GameState, Position};

/// Environment effects of the cell an actor ends its turn on.
///
/// Invoked once per actor per turn; the scheduler re-checks liveness afterwards.
pub trait CellEffects {
    fn apply(&self, actor: EntityId, cell: Position, state: &mut GameState, env: &GameEnv<'_>);
}

/// Cells are inert.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCellEffects;

impl CellEffects for NoCellEffects {
    fn apply(&self, _: EntityId, _: Position, _: &mut GameState, _: &GameEnv<'_>) {}
}

/// Lava burns, ice freezes, swamp poisons.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerrainEffects;

impl CellEffects for TerrainEffects {
    fn apply(&self, actor: EntityId, cell: Position, state: &mut GameState, env: &GameEnv<'_>) {
        let Some(tile) = env.map().tile(cell) else {
            return;
        };
        let hazards = &env.config().hazards;

        match tile.terrain() {
            TerrainKind::Lava => {
                if actor.is_player() {
                    state.log.push("The lava scorches you!");
                }
                combat::damage_from(
                    state,
                    env,
                    actor,
                    hazards.lava_damage,
                    Source::Environment("lava"),
                );
            }
            TerrainKind::Ice => {
                state.apply_buff(actor, BuffKind::Freeze, hazards.ice_freeze_turns);
            }
            TerrainKind::Swamp => {
                state.apply_buff(actor, BuffKind::Poison, hazards.swamp_poison_turns);
            }
            TerrainKind::Floor | TerrainKind::Wall | TerrainKind::Void | TerrainKind::Water => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::GridMap;
    use crate::state::ActorTemplate;

    #[test]
    fn terrain_effects_follow_the_tile() {
        let mut map = GridMap::filled(3, 1, TerrainKind::Lava);
        map.set(Position::new(1, 0), TerrainKind::Ice);
        map.set(Position::new(2, 0), TerrainKind::Swamp);
        let config = GameConfig::default();
        let env = GameEnv::new(&map, &config);

        let mut state = GameState::new(0);
        let template = ActorTemplate::new("newt", ':', 10, 1);
        let on_lava = state.spawn_npc(&map, &template, Position::new(0, 0)).unwrap();
        let on_ice = state.spawn_npc(&map, &template, Position::new(1, 0)).unwrap();
        let on_swamp = state.spawn_npc(&map, &template, Position::new(2, 0)).unwrap();

        for id in [on_lava, on_ice, on_swamp] {
            let cell = state.entities.actor(id).unwrap().position;
            TerrainEffects.apply(id, cell, &mut state, &env);
        }

        let hp = |state: &GameState, id| state.entities.actor(id).unwrap().hp;
        assert_eq!(hp(&state, on_lava), 10 - config.hazards.lava_damage as i32);
        assert!(state.entities.actor(on_ice).unwrap().buffs.has(BuffKind::Freeze));
        assert!(state.entities.actor(on_swamp).unwrap().buffs.has(BuffKind::Poison));
    }
}
