use crate::action::Command;
use crate::env::GameEnv;
use crate::state::{GameState, NeedKind};

/// Eat or drink, lowering hunger or thirst by `relief` per-mille.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumeCommand {
    pub need: NeedKind,
    pub relief: u16,
}

impl ConsumeCommand {
    pub fn eat(relief: u16) -> Self {
        Self {
            need: NeedKind::Hunger,
            relief,
        }
    }

    pub fn drink(relief: u16) -> Self {
        Self {
            need: NeedKind::Thirst,
            relief,
        }
    }
}

impl Command for ConsumeCommand {
    fn execute(&self, state: &mut GameState, _env: &GameEnv<'_>) -> bool {
        if !state.is_player_alive() {
            return false;
        }
        state.needs.relieve(self.need, self.relief);
        state.log.push(match self.need {
            NeedKind::Hunger => "You eat.",
            NeedKind::Thirst => "You drink.",
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{GridMap, TerrainKind};
    use crate::state::{ActorTemplate, Position};

    #[test]
    fn drinking_lowers_thirst() {
        let map = GridMap::filled(2, 2, TerrainKind::Floor);
        let config = GameConfig::default();
        let env = GameEnv::new(&map, &config);
        let mut state = GameState::new(0);
        state
            .spawn_player(&map, &ActorTemplate::new("you", '@', 5, 1), Position::new(0, 0))
            .unwrap();
        state.needs.thirst = 700;

        assert!(ConsumeCommand::drink(500).execute(&mut state, &env));
        assert_eq!(state.needs.thirst, 200);
        assert!(ConsumeCommand::drink(500).execute(&mut state, &env));
        assert_eq!(state.needs.thirst, 0);
    }
}
