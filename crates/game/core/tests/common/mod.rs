#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Once;

use crawl_core::{
    ActorTemplate, AiStrategy, EntityId, GameEnv, GameState, GridMap, Position, RngOracle,
    ScreenStack, TerrainKind,
};

static TRACING: Once = Once::new();

/// Routes `tracing` output through the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn open_map() -> GridMap {
    GridMap::filled(10, 10, TerrainKind::Floor)
}

pub fn hero(max_hp: i32) -> ActorTemplate {
    ActorTemplate::new("hero", '@', max_hp, 2)
}

pub fn dummy(name: &str, max_hp: i32) -> ActorTemplate {
    ActorTemplate::new(name, 'd', max_hp, 1)
}

/// State with the player at (0, 0) and one idle NPC per entry of `npcs`,
/// placed along the bottom row.
pub fn populated(map: &GridMap, player_hp: i32, npcs: &[i32]) -> (GameState, Vec<EntityId>) {
    let mut state = GameState::new(0xC0FFEE);
    state
        .spawn_player(map, &hero(player_hp), Position::new(0, 0))
        .expect("player spawn");
    let ids = npcs
        .iter()
        .enumerate()
        .map(|(i, &hp)| {
            state
                .spawn_npc(map, &dummy("dummy", hp), Position::new(i as i32, 9))
                .expect("npc spawn")
        })
        .collect();
    (state, ids)
}

pub fn hp(state: &GameState, id: EntityId) -> i32 {
    state.entities.actor(id).map(|a| a.hp).expect("actor exists")
}

/// Always rolls zero: every one-in-N check succeeds, every range yields its minimum.
pub struct Lucky;

impl RngOracle for Lucky {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }
}

type Script = Box<dyn Fn(EntityId, &mut GameState, &GameEnv<'_>)>;

/// Records who acted and optionally runs a scripted action.
#[derive(Default)]
pub struct ScriptedAi {
    pub acted: RefCell<Vec<EntityId>>,
    script: Option<Script>,
}

impl ScriptedAi {
    pub fn new(script: impl Fn(EntityId, &mut GameState, &GameEnv<'_>) + 'static) -> Self {
        Self {
            acted: RefCell::new(Vec::new()),
            script: Some(Box::new(script)),
        }
    }

    pub fn acted(&self) -> Vec<EntityId> {
        self.acted.borrow().clone()
    }
}

impl AiStrategy for ScriptedAi {
    fn perform(
        &self,
        actor: EntityId,
        state: &mut GameState,
        env: &GameEnv<'_>,
        _screens: &mut dyn ScreenStack,
    ) {
        self.acted.borrow_mut().push(actor);
        if let Some(script) = &self.script {
            script(actor, state, env);
        }
    }
}
