use crate::combat;
use crate::env::{GameEnv, RollContext, ScreenStack};
use crate::state::{AiKind, Direction, EntityId, GameState, Position};

/// Performs exactly one action for one actor and returns.
///
/// The scheduler has no visibility into what the action was; it re-checks
/// liveness afterwards. Implementations may damage or kill any actor,
/// including the acting one and the player.
pub trait AiStrategy {
    fn perform(
        &self,
        actor: EntityId,
        state: &mut GameState,
        env: &GameEnv<'_>,
        screens: &mut dyn ScreenStack,
    );
}

/// Dispatches on the actor's [`AiKind`] tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinAi;

impl AiStrategy for BuiltinAi {
    fn perform(
        &self,
        actor: EntityId,
        state: &mut GameState,
        env: &GameEnv<'_>,
        _screens: &mut dyn ScreenStack,
    ) {
        let Some(kind) = state.entities.living(actor).map(|mob| mob.ai) else {
            return;
        };
        match kind {
            AiKind::Idle => {}
            AiKind::Wander => wander(actor, state, env),
            AiKind::Melee => hunt(actor, state, env),
        }
    }
}

fn wander(actor: EntityId, state: &mut GameState, env: &GameEnv<'_>) {
    let Some(from) = state.entities.actor(actor).map(|mob| mob.position) else {
        return;
    };
    let seed = state.next_seed(actor, RollContext::Wander);
    let index = env.rng().range(seed, 0, Direction::ALL.len() as u32 - 1) as usize;
    let step = Direction::ALL[index];

    if let Err(err) = state.move_actor(env.map(), actor, from.step(step)) {
        tracing::trace!(%actor, %step, %err, "wander step blocked");
    }
}

/// Attack when adjacent, otherwise close the distance.
///
/// The player is ignored beyond [`crate::GameConfig::sight_radius`].
fn hunt(actor: EntityId, state: &mut GameState, env: &GameEnv<'_>) {
    let (Some(from), Some(target)) = (
        state.entities.living(actor).map(|mob| mob.position),
        state.entities.living(EntityId::PLAYER).map(|p| p.position),
    ) else {
        return;
    };

    let distance = from.distance(target);
    if distance > env.config().sight_radius {
        tracing::trace!(%actor, distance, "player out of sight");
        return;
    }
    if distance == 1 {
        combat::melee(state, env, actor, EntityId::PLAYER);
        return;
    }

    for step in approach_steps(from, target) {
        if state.move_actor(env.map(), actor, from.step(step)).is_ok() {
            return;
        }
    }
    tracing::trace!(%actor, "no free step towards player");
}

/// Direct step first, then its horizontal and vertical components.
fn approach_steps(from: Position, target: Position) -> impl Iterator<Item = Direction> {
    let dx = (target.x - from.x).signum();
    let dy = (target.y - from.y).signum();
    [
        from.direction_to(target),
        Direction::from_delta(dx, 0),
        Direction::from_delta(0, dy),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{GridMap, Screen, TerrainKind};
    use crate::state::ActorTemplate;

    fn setup(npc_at: Position) -> (GridMap, GameState, EntityId) {
        let map = GridMap::filled(12, 12, TerrainKind::Floor);
        let mut state = GameState::new(3);
        state
            .spawn_player(&map, &ActorTemplate::new("you", '@', 10, 2), Position::new(1, 1))
            .unwrap();
        let orc = ActorTemplate::new("orc", 'o', 5, 3).with_ai(AiKind::Melee);
        let id = state.spawn_npc(&map, &orc, npc_at).unwrap();
        (map, state, id)
    }

    #[test]
    fn melee_ai_steps_towards_player() {
        let (map, mut state, orc) = setup(Position::new(4, 1));
        let config = GameConfig::default();
        let env = GameEnv::new(&map, &config);
        let mut screens: Vec<Screen> = Vec::new();

        BuiltinAi.perform(orc, &mut state, &env, &mut screens);

        assert_eq!(
            state.entities.actor(orc).map(|a| a.position),
            Some(Position::new(3, 1))
        );
    }

    #[test]
    fn melee_ai_attacks_when_adjacent() {
        let (map, mut state, orc) = setup(Position::new(2, 2));
        let config = GameConfig::default();
        let env = GameEnv::new(&map, &config);
        let mut screens: Vec<Screen> = Vec::new();

        BuiltinAi.perform(orc, &mut state, &env, &mut screens);

        let player = state.entities.player().unwrap();
        assert!(player.hp < 10);
        assert_eq!(state.entities.actor(orc).map(|a| a.position), Some(Position::new(2, 2)));
    }

    #[test]
    fn melee_ai_ignores_player_out_of_sight() {
        let (map, mut state, orc) = setup(Position::new(11, 11));
        let mut config = GameConfig::default();
        config.sight_radius = 3;
        let env = GameEnv::new(&map, &config);
        let mut screens: Vec<Screen> = Vec::new();

        BuiltinAi.perform(orc, &mut state, &env, &mut screens);

        assert_eq!(
            state.entities.actor(orc).map(|a| a.position),
            Some(Position::new(11, 11))
        );
    }

    #[test]
    fn blocked_diagonal_falls_back_to_axis_step() {
        let (mut map, mut state, orc) = setup(Position::new(3, 3));
        map.set(Position::new(2, 2), TerrainKind::Wall);
        let config = GameConfig::default();
        let env = GameEnv::new(&map, &config);
        let mut screens: Vec<Screen> = Vec::new();

        BuiltinAi.perform(orc, &mut state, &env, &mut screens);

        assert_eq!(
            state.entities.actor(orc).map(|a| a.position),
            Some(Position::new(2, 3))
        );
    }
}
