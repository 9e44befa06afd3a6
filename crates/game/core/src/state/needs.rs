/// The two attrition resources tracked for the player.
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
pub enum NeedKind {
    Hunger,
    Thirst,
}

impl NeedKind {
    pub const ALL: [NeedKind; 2] = [NeedKind::Hunger, NeedKind::Thirst];
}

/// Player stats block: attrition levels and derived strength.
///
/// Levels are per-mille (`0..=1000`, where 1000 means fully starved/parched).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeedsState {
    pub hunger: u16,
    pub thirst: u16,
    pub base_strength: u32,
    /// Recomputed from `base_strength` every player turn.
    pub strength: u32,
}

impl NeedsState {
    pub const MAX_LEVEL: u16 = 1000;

    pub fn new(base_strength: u32) -> Self {
        Self {
            hunger: 0,
            thirst: 0,
            base_strength,
            strength: base_strength,
        }
    }

    pub fn level(&self, kind: NeedKind) -> u16 {
        match kind {
            NeedKind::Hunger => self.hunger,
            NeedKind::Thirst => self.thirst,
        }
    }

    pub fn set_level(&mut self, kind: NeedKind, level: u16) {
        let level = level.min(Self::MAX_LEVEL);
        match kind {
            NeedKind::Hunger => self.hunger = level,
            NeedKind::Thirst => self.thirst = level,
        }
    }

    /// Lowers a resource (eating, drinking). Saturates at zero.
    pub fn relieve(&mut self, kind: NeedKind, amount: u16) {
        self.set_level(kind, self.level(kind).saturating_sub(amount));
    }
}

impl Default for NeedsState {
    fn default() -> Self {
        Self::new(10)
    }
}
