//! Timed status effects owned by a single actor.
//!
//! Each buff counts its remaining duration in actor turns. The tick engine in
//! [`crate::status`] applies the per-kind behaviour and then calls
//! [`Buffs::decrement`], so a buff is gone once its counter reaches zero.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Closed set of buff kinds. Behaviour lives in [`crate::status::buff_effect`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BuffKind {
    /// 1 damage on every even global turn.
    Poison,
    /// 0-2 damage on even global turns while the owner stands still.
    Freeze,
    /// 1 damage every turn.
    Burning,
    /// Heals 1 every turn.
    Regeneration,
}

/// A single buff and the number of owner turns it has left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buff {
    pub kind: BuffKind,
    pub remaining: u32,
}

impl Buff {
    pub const fn new(kind: BuffKind, remaining: u32) -> Self {
        Self { kind, remaining }
    }
}

/// Bounded, insertion-ordered buff collection with at most one entry per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffs {
    entries: ArrayVec<Buff, { GameConfig::MAX_BUFFS }>,
}

impl Buffs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a buff. An existing buff of the same kind is extended to the
    /// longer of the two durations.
    ///
    /// Returns false when the buff was dropped: zero duration or no free slot.
    pub fn apply(&mut self, kind: BuffKind, duration: u32) -> bool {
        if duration == 0 {
            return false;
        }

        if let Some(existing) = self.entries.iter_mut().find(|b| b.kind == kind) {
            existing.remaining = existing.remaining.max(duration);
            return true;
        }

        self.entries.try_push(Buff::new(kind, duration)).is_ok()
    }

    /// Consumes one turn of `kind`, dropping it when the counter hits zero.
    ///
    /// Returns the remaining duration, or `None` if the kind is not active.
    pub fn decrement(&mut self, kind: BuffKind) -> Option<u32> {
        let index = self.entries.iter().position(|b| b.kind == kind)?;
        let entry = &mut self.entries[index];
        entry.remaining = entry.remaining.saturating_sub(1);
        let remaining = entry.remaining;
        if remaining == 0 {
            self.entries.remove(index);
        }
        Some(remaining)
    }

    pub fn remove(&mut self, kind: BuffKind) -> bool {
        let before = self.entries.len();
        self.entries.retain(|b| b.kind != kind);
        self.entries.len() != before
    }

    pub fn get(&self, kind: BuffKind) -> Option<&Buff> {
        self.entries.iter().find(|b| b.kind == kind)
    }

    pub fn has(&self, kind: BuffKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Buff> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reapplying_extends_to_longer_duration() {
        let mut buffs = Buffs::new();
        assert!(buffs.apply(BuffKind::Poison, 3));
        assert!(buffs.apply(BuffKind::Poison, 5));
        assert!(buffs.apply(BuffKind::Poison, 2));

        assert_eq!(buffs.len(), 1);
        assert_eq!(buffs.get(BuffKind::Poison).map(|b| b.remaining), Some(5));
    }

    #[test]
    fn decrement_removes_at_zero() {
        let mut buffs = Buffs::new();
        buffs.apply(BuffKind::Freeze, 2);

        assert_eq!(buffs.decrement(BuffKind::Freeze), Some(1));
        assert!(buffs.has(BuffKind::Freeze));
        assert_eq!(buffs.decrement(BuffKind::Freeze), Some(0));
        assert!(!buffs.has(BuffKind::Freeze));
        assert_eq!(buffs.decrement(BuffKind::Freeze), None);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut buffs = Buffs::new();
        assert!(!buffs.apply(BuffKind::Burning, 0));
        assert!(buffs.is_empty());
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(BuffKind::Regeneration.as_ref(), "regeneration");
        assert_eq!("poison".parse::<BuffKind>().ok(), Some(BuffKind::Poison));
    }
}
