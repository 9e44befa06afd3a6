use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::{EntityId, ItemHandle, Position};

type ItemSlots = ArrayVec<ItemHandle, { GameConfig::MAX_ITEMS_PER_TILE }>;

/// Dynamic layer over the static map: who stands where, and what lies where.
///
/// At most one actor occupies a tile. Items stack up to
/// [`GameConfig::MAX_ITEMS_PER_TILE`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    occupancy: BTreeMap<Position, EntityId>,
    items: BTreeMap<Position, ItemSlots>,
}

impl WorldState {
    pub fn occupant(&self, position: Position) -> Option<EntityId> {
        self.occupancy.get(&position).copied()
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupancy.contains_key(&position)
    }

    /// Places `entity` on an empty tile. Returns false if the tile is taken.
    pub(crate) fn place(&mut self, position: Position, entity: EntityId) -> bool {
        match self.occupancy.get(&position) {
            Some(existing) => *existing == entity,
            None => {
                self.occupancy.insert(position, entity);
                true
            }
        }
    }

    /// Clears `entity` from `position`. Returns false on an occupancy mismatch.
    pub(crate) fn vacate(&mut self, position: Position, entity: EntityId) -> bool {
        if self.occupancy.get(&position) == Some(&entity) {
            self.occupancy.remove(&position);
            true
        } else {
            false
        }
    }

    pub fn items_at(&self, position: Position) -> &[ItemHandle] {
        self.items
            .get(&position)
            .map(|slots| slots.as_slice())
            .unwrap_or(&[])
    }

    /// Drops an item on the ground. Returns false when the tile's stack is full.
    pub fn drop_item(&mut self, position: Position, item: ItemHandle) -> bool {
        self.items
            .entry(position)
            .or_default()
            .try_push(item)
            .is_ok()
    }

    /// Picks up the topmost item at `position`.
    pub fn take_item(&mut self, position: Position) -> Option<ItemHandle> {
        let slots = self.items.get_mut(&position)?;
        let item = slots.pop();
        if slots.is_empty() {
            self.items.remove(&position);
        }
        item
    }

    pub fn item_count(&self) -> usize {
        self.items.values().map(|slots| slots.len()).sum()
    }
}
