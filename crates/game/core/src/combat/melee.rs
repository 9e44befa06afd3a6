use crate::env::{GameEnv, RollContext};
use crate::state::{EntityId, GameState};

use super::resolver::{DamageOutcome, Source, damage_from};

/// One melee blow: rolls `1..=power` and routes it through the resolver.
///
/// The player rolls against its effective strength instead, so hunger and
/// thirst weaken its blows. Hit messages are only logged when the player is involved.
pub fn melee(
    state: &mut GameState,
    env: &GameEnv<'_>,
    attacker: EntityId,
    defender: EntityId,
) -> DamageOutcome {
    let (Some(att), Some(def)) = (
        state.entities.living(attacker),
        state.entities.living(defender),
    ) else {
        return DamageOutcome::Ignored;
    };
    let power = if attacker.is_player() {
        state.needs.strength
    } else {
        att.power
    }
    .max(1);
    let attacker_name = att.name.clone();
    let defender_name = def.name.clone();

    let seed = state.next_seed(attacker, RollContext::Melee);
    let amount = env.rng().roll_die(seed, power);

    if attacker.is_player() {
        state
            .log
            .push(format!("You hit the {defender_name} for {amount}."));
    } else if defender.is_player() {
        state.log.push(format!("The {attacker_name} hits you."));
    }
    tracing::trace!(%attacker, %defender, amount, "melee hit");

    damage_from(state, env, defender, amount, Source::Actor(attacker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{GridMap, TerrainKind};
    use crate::state::{ActorTemplate, Position};

    #[test]
    fn melee_damage_stays_within_power() {
        let map = GridMap::filled(4, 4, TerrainKind::Floor);
        let config = GameConfig::default();
        let env = GameEnv::new(&map, &config);

        for seed in 0..32 {
            let mut state = GameState::new(seed);
            state
                .spawn_player(&map, &ActorTemplate::new("you", '@', 20, 4), Position::new(0, 0))
                .unwrap();
            let troll = state
                .spawn_npc(&map, &ActorTemplate::new("troll", 'T', 30, 1), Position::new(1, 0))
                .unwrap();

            melee(&mut state, &env, EntityId::PLAYER, troll);

            let hp = state.entities.actor(troll).unwrap().hp;
            assert!((26..=29).contains(&hp), "seed {seed} left hp {hp}");
        }
    }

    #[test]
    fn hunger_and_thirst_lower_the_player_damage_ceiling() {
        let map = GridMap::filled(4, 4, TerrainKind::Floor);
        let config = GameConfig::default();
        let env = GameEnv::new(&map, &config);

        let max_blow = |starving: bool| {
            (0..200)
                .map(|seed| {
                    let mut state = GameState::new(seed);
                    let hero = ActorTemplate::new("you", '@', 20, 10);
                    let brute = ActorTemplate::new("ogre", 'O', 100, 1);
                    state.spawn_player(&map, &hero, Position::new(0, 0)).unwrap();
                    let ogre = state.spawn_npc(&map, &brute, Position::new(1, 0)).unwrap();
                    if starving {
                        state.needs.hunger = 1000;
                        state.needs.thirst = 1000;
                        crate::needs::apply_needs(&mut state, &env);
                        assert_eq!(state.needs.strength, 5);
                    }
                    melee(&mut state, &env, EntityId::PLAYER, ogre);
                    100 - state.entities.actor(ogre).unwrap().hp
                })
                .max()
                .unwrap()
        };

        assert!(max_blow(false) > 5);
        assert!(max_blow(true) <= 5);
    }

    #[test]
    fn dead_defender_is_ignored() {
        let map = GridMap::filled(4, 4, TerrainKind::Floor);
        let config = GameConfig::default();
        let env = GameEnv::new(&map, &config);
        let mut state = GameState::new(0);
        state
            .spawn_player(&map, &ActorTemplate::new("you", '@', 20, 4), Position::new(0, 0))
            .unwrap();

        assert_eq!(
            melee(&mut state, &env, EntityId::PLAYER, EntityId(99)),
            DamageOutcome::Ignored
        );
        assert_eq!(state.turn.rng_nonce, 0);
    }
}
