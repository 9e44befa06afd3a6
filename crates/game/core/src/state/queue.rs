//! Cyclic turn order for the actors on the active map.
//!
//! The queue stores ids only. The cursor names the actor whose turn it is;
//! [`TurnQueue::advance`] moves it forward and wraps past the end. Removal
//! shifts the cursor so that the next `advance` returns exactly the actor that
//! would have followed had the removed one never been there.

use super::EntityId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnQueue {
    order: Vec<EntityId>,
    cursor: usize,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actor under the cursor.
    pub fn current(&self) -> Option<EntityId> {
        self.order.get(self.cursor).copied()
    }

    /// Moves the cursor to the next actor (cyclic) and returns it.
    ///
    /// Returns `None` only when the queue is empty.
    pub fn advance(&mut self) -> Option<EntityId> {
        if self.order.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.order.len();
        self.current()
    }

    /// Appends an actor at the end of the acting order. Duplicates are ignored.
    pub fn push(&mut self, id: EntityId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Removes `id` and repairs the cursor.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let Some(index) = self.order.iter().position(|&entry| entry == id) else {
            return false;
        };
        self.order.remove(index);

        if self.order.is_empty() {
            self.cursor = 0;
        } else if index < self.cursor {
            self.cursor -= 1;
        } else if index == self.cursor {
            // Step back to the predecessor so the next advance lands on the
            // actor that followed the removed one.
            self.cursor = match self.cursor {
                0 => self.order.len() - 1,
                cursor => cursor - 1,
            };
        }
        true
    }

    /// Places the cursor on `id`. Returns false if it is not queued.
    pub fn reset_to(&mut self, id: EntityId) -> bool {
        match self.order.iter().position(|&entry| entry == id) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.order.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
