//! Authoritative simulation state.
//!
//! Actors live in an arena keyed by [`EntityId`]; the occupancy layer and the
//! turn queue only hold ids. Removing an actor from the map always removes it
//! from the queue in the same call, so no live collection can reference a
//! destroyed actor.
mod actor;
mod buff;
mod common;
mod error;
mod log;
mod needs;
mod queue;
mod turn;
mod world;

pub use actor::{ActorState, ActorTemplate, AiKind, EntitiesState};
pub use buff::{Buff, BuffKind, Buffs};
pub use common::{Direction, EntityId, ItemHandle, Position};
pub use error::StateError;
pub use log::MessageLog;
pub use needs::{NeedKind, NeedsState};
pub use queue::TurnQueue;
pub use turn::TurnState;
pub use world::WorldState;

use crate::env::{MapOracle, RollContext, compute_seed};

/// Canonical snapshot of the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game start. Combined with `turn.rng_nonce` to derive a
    /// unique seed for every roll.
    pub game_seed: u64,

    /// Sequential NPC id allocator. Never reused; 0 is reserved for the player.
    next_entity_id: u32,

    pub turn: TurnState,
    pub entities: EntitiesState,
    pub world: WorldState,
    pub queue: TurnQueue,
    pub needs: NeedsState,
    pub log: MessageLog,
}

impl GameState {
    pub fn new(game_seed: u64) -> Self {
        Self {
            game_seed,
            next_entity_id: 1,
            turn: TurnState::new(),
            entities: EntitiesState::default(),
            world: WorldState::default(),
            queue: TurnQueue::new(),
            needs: NeedsState::default(),
            log: MessageLog::default(),
        }
    }

    pub fn with_needs(mut self, needs: NeedsState) -> Self {
        self.needs = needs;
        self
    }

    /// Places the player and makes it the current actor of the queue.
    ///
    /// The template's `power` becomes the base strength that hunger and
    /// thirst scale down.
    pub fn spawn_player(
        &mut self,
        map: &dyn MapOracle,
        template: &ActorTemplate,
        position: Position,
    ) -> Result<EntityId, StateError> {
        if self.entities.contains(EntityId::PLAYER) {
            return Err(StateError::PlayerAlreadySpawned);
        }
        let actor = ActorState::from_template(EntityId::PLAYER, template, position);
        let id = self.admit(map, actor, position)?;
        self.needs.base_strength = template.power;
        self.needs.strength = template.power;
        Ok(id)
    }

    /// Places a new NPC at the end of the acting order.
    pub fn spawn_npc(
        &mut self,
        map: &dyn MapOracle,
        template: &ActorTemplate,
        position: Position,
    ) -> Result<EntityId, StateError> {
        self.check_placement(map, position)?;
        let id = self.allocate_entity_id();
        let actor = ActorState::from_template(id, template, position);
        self.admit(map, actor, position)
    }

    /// Brings an existing actor record onto the active map (new level,
    /// returning follower). The player becomes the current actor.
    pub fn admit(
        &mut self,
        map: &dyn MapOracle,
        mut actor: ActorState,
        position: Position,
    ) -> Result<EntityId, StateError> {
        self.check_placement(map, position)?;

        let id = actor.id;
        actor.position = position;
        actor.since_move = 0;
        self.world.place(position, id);
        self.entities.insert(actor);
        self.queue.push(id);
        if id.is_player() {
            self.queue.reset_to(id);
        }

        tracing::debug!(actor = %id, %position, "actor admitted to map");
        Ok(id)
    }

    /// Moves an actor to an adjacent or distant free tile and resets its
    /// stillness counter.
    pub fn move_actor(
        &mut self,
        map: &dyn MapOracle,
        id: EntityId,
        destination: Position,
    ) -> Result<(), StateError> {
        let origin = self
            .entities
            .actor(id)
            .map(|actor| actor.position)
            .ok_or(StateError::ActorNotFound(id))?;
        self.check_placement(map, destination)?;

        if !self.world.vacate(origin, id) {
            return Err(StateError::OccupancyDesync {
                actor: id,
                position: origin,
            });
        }
        self.world.place(destination, id);

        if let Some(actor) = self.entities.actor_mut(id) {
            actor.position = destination;
            actor.since_move = 0;
        }
        Ok(())
    }

    /// Takes an actor off the active map and out of the turn queue.
    ///
    /// The arena record is kept; callers decide whether to drop it.
    /// Returns the last position, or `None` if the id does not resolve.
    pub fn remove_from_map(&mut self, id: EntityId) -> Option<Position> {
        let position = self.entities.actor(id)?.position;
        if !self.world.vacate(position, id) {
            tracing::warn!(actor = %id, %position, "occupancy desync during removal");
        }
        self.queue.remove(id);
        Some(position)
    }

    /// Level transition: removes the actor from map, queue and arena, handing
    /// its record to the caller for [`GameState::admit`] elsewhere.
    pub fn transfer_out(&mut self, id: EntityId) -> Option<ActorState> {
        self.remove_from_map(id)?;
        self.entities.remove(id)
    }

    /// Drops an actor record from the arena. Its id stops resolving.
    pub(crate) fn discard(&mut self, id: EntityId) -> Option<ActorState> {
        self.entities.remove(id)
    }

    pub fn is_player_alive(&self) -> bool {
        self.entities.living(EntityId::PLAYER).is_some()
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.living(id).is_some()
    }

    /// Applies a buff to a living actor. Returns false if it was dropped.
    pub fn apply_buff(&mut self, id: EntityId, kind: BuffKind, duration: u32) -> bool {
        let Some(actor) = self.entities.actor_mut(id).filter(|a| a.is_alive()) else {
            return false;
        };
        let applied = actor.buffs.apply(kind, duration);
        if !applied {
            tracing::debug!(actor = %id, %kind, duration, "buff dropped");
        }
        applied
    }

    /// Derives the seed for the next roll and bumps the nonce.
    pub fn next_seed(&mut self, actor: EntityId, context: RollContext) -> u64 {
        let seed = compute_seed(self.game_seed, self.turn.rng_nonce, actor.0, context as u32);
        self.turn.rng_nonce += 1;
        seed
    }

    fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    fn check_placement(&self, map: &dyn MapOracle, position: Position) -> Result<(), StateError> {
        let Some(tile) = map.tile(position) else {
            let dimensions = map.dimensions();
            return Err(StateError::PositionOutOfBounds {
                position,
                width: dimensions.width,
                height: dimensions.height,
            });
        };
        if !tile.is_passable() {
            return Err(StateError::Impassable { position });
        }
        if let Some(occupant) = self.world.occupant(position) {
            return Err(StateError::PositionOccupied { position, occupant });
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
