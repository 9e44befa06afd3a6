use crate::action::Command;
use crate::combat;
use crate::env::GameEnv;
use crate::state::{Direction, EntityId, GameState};

/// Move one tile, or attack whoever stands there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepCommand {
    pub direction: Direction,
}

impl StepCommand {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Command for StepCommand {
    fn execute(&self, state: &mut GameState, env: &GameEnv<'_>) -> bool {
        let Some(origin) = state.entities.living(EntityId::PLAYER).map(|p| p.position) else {
            return false;
        };
        let destination = origin.step(self.direction);

        if let Some(occupant) = state.world.occupant(destination) {
            combat::melee(state, env, EntityId::PLAYER, occupant);
            return true;
        }

        match state.move_actor(env.map(), EntityId::PLAYER, destination) {
            Ok(()) => {
                if !state.world.items_at(destination).is_empty() {
                    state.log.push("You see something here.");
                }
                true
            }
            Err(err) => {
                tracing::debug!(%destination, %err, "step rejected");
                state.log.set_flash("You can't go that way.");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{GridMap, TerrainKind};
    use crate::state::{ActorTemplate, Position};

    fn fixture() -> (GridMap, GameConfig, GameState) {
        let mut map = GridMap::filled(4, 4, TerrainKind::Floor);
        map.set(Position::new(0, 1), TerrainKind::Wall);
        let mut state = GameState::new(2);
        state
            .spawn_player(&map, &ActorTemplate::new("you", '@', 10, 3), Position::new(0, 0))
            .unwrap();
        (map, GameConfig::default(), state)
    }

    #[test]
    fn step_moves_and_resets_stillness() {
        let (map, config, mut state) = fixture();
        let env = GameEnv::new(&map, &config);
        state.entities.actor_mut(EntityId::PLAYER).unwrap().since_move = 4;

        assert!(StepCommand::new(Direction::East).execute(&mut state, &env));

        let player = state.entities.player().unwrap();
        assert_eq!(player.position, Position::new(1, 0));
        assert_eq!(player.since_move, 0);
    }

    #[test]
    fn step_into_wall_is_rejected() {
        let (map, config, mut state) = fixture();
        let env = GameEnv::new(&map, &config);

        assert!(!StepCommand::new(Direction::South).execute(&mut state, &env));
        assert!(!StepCommand::new(Direction::North).execute(&mut state, &env));
        assert_eq!(state.log.flash(), Some("You can't go that way."));
    }

    #[test]
    fn step_into_actor_attacks() {
        let (map, config, mut state) = fixture();
        let env = GameEnv::new(&map, &config);
        let bat = state
            .spawn_npc(&map, &ActorTemplate::new("bat", 'b', 10, 1), Position::new(1, 1))
            .unwrap();

        assert!(StepCommand::new(Direction::SouthEast).execute(&mut state, &env));

        assert!(state.entities.actor(bat).unwrap().hp < 10);
        assert_eq!(state.entities.player().unwrap().position, Position::new(0, 0));
    }
}
