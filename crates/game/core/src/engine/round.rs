use crate::needs;
use crate::state::EntityId;
use crate::status;

use super::{GameEngine, RoundOutcome};

impl GameEngine<'_> {
    /// Player phase followed by the NPC phase.
    pub fn run_round(&mut self) -> RoundOutcome {
        tracing::debug!(turn = self.state.turn.turn, "round started");
        match self.run_player_turn() {
            RoundOutcome::PlayerDied => RoundOutcome::PlayerDied,
            RoundOutcome::Completed => self.run_npc_turns(),
        }
    }

    /// Finishes the player's turn: stillness and buffs, cell effects, needs,
    /// auto-heal, then the global turn counter.
    ///
    /// Does nothing if the player is not the current actor. A player that
    /// died before the phase (for instance during its own command) ends the
    /// game here.
    pub fn run_player_turn(&mut self) -> RoundOutcome {
        if self.is_over() || self.player_died() {
            return RoundOutcome::PlayerDied;
        }
        if self.state.queue.current() != Some(EntityId::PLAYER) {
            tracing::warn!(
                current = ?self.state.queue.current(),
                "player is not the current actor, skipping player phase"
            );
            return RoundOutcome::Completed;
        }
        let env = self.env;

        if let Some(player) = self.state.entities.actor_mut(EntityId::PLAYER) {
            player.since_move += 1;
        }
        status::tick_buffs(self.state, &env, EntityId::PLAYER);

        if let Some(cell) = self
            .state
            .entities
            .living(EntityId::PLAYER)
            .map(|p| p.position)
        {
            env.cells().apply(EntityId::PLAYER, cell, self.state, &env);
        }
        if self.player_died() {
            return RoundOutcome::PlayerDied;
        }

        needs::apply_needs(self.state, &env);
        if self.player_died() {
            return RoundOutcome::PlayerDied;
        }
        needs::auto_heal(self.state, &env);

        self.state.turn.turn += 1;
        RoundOutcome::Completed
    }

    /// Gives every NPC one turn, in queue order, until the cursor is back on
    /// the player. Ends immediately when the player dies.
    pub fn run_npc_turns(&mut self) -> RoundOutcome {
        loop {
            if self.is_over() || self.player_died() {
                return RoundOutcome::PlayerDied;
            }
            if !self.state.queue.contains(EntityId::PLAYER) {
                tracing::warn!("player missing from turn queue, ending NPC phase");
                break;
            }
            let Some(actor) = self.state.queue.advance() else {
                break;
            };
            if actor.is_player() {
                break;
            }

            self.run_actor_turn(actor);

            if self.player_died() {
                return RoundOutcome::PlayerDied;
            }
        }

        self.state.turn.damage_taken = 0;
        RoundOutcome::Completed
    }

    /// Fires the game-over transition if the player is dead.
    fn player_died(&mut self) -> bool {
        if self.state.is_player_alive() {
            return false;
        }
        self.trigger_game_over();
        true
    }

    /// AI action, then cell effects, then stillness and buffs, re-checking
    /// liveness after each step that can kill.
    fn run_actor_turn(&mut self, actor: EntityId) {
        let env = self.env;

        if self.state.entities.living(actor).is_none() {
            tracing::warn!(%actor, "dead actor found in turn queue");
            self.state.queue.remove(actor);
            return;
        }

        env.ai().perform(actor, self.state, &env, self.screens);
        let Some(cell) = self.state.entities.living(actor).map(|a| a.position) else {
            tracing::debug!(%actor, "actor died during its action");
            return;
        };

        env.cells().apply(actor, cell, self.state, &env);
        let Some(mob) = self
            .state
            .entities
            .actor_mut(actor)
            .filter(|a| a.is_alive())
        else {
            tracing::debug!(%actor, "actor died from cell effects");
            return;
        };

        mob.since_move += 1;
        status::tick_buffs(self.state, &env, actor);
    }
}
