//! Game configuration constants and tunable parameters.
//!
//! Fractions are stored per-mille (`1000 == 1.0`) so every rule stays in
//! integer arithmetic and replays are bit-for-bit deterministic.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ItemHandle, NeedKind};

/// Tunables read by the scheduler and its subsystems.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Chebyshev radius within which built-in AIs notice the player.
    pub sight_radius: u32,
    pub needs: NeedsConfig,
    pub loot: LootConfig,
    pub hazards: HazardConfig,
    /// Natural regeneration for the player. `None` disables it.
    pub auto_heal: Option<AutoHealConfig>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_BUFFS: usize = 8;
    pub const MAX_ITEMS_PER_TILE: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SIGHT_RADIUS: u32 = 8;

    pub fn new() -> Self {
        Self {
            sight_radius: Self::DEFAULT_SIGHT_RADIUS,
            needs: NeedsConfig::default(),
            loot: LootConfig::default(),
            hazards: HazardConfig::default(),
            auto_heal: Some(AutoHealConfig::default()),
        }
    }

    pub fn with_auto_heal(mut self, auto_heal: Option<AutoHealConfig>) -> Self {
        self.auto_heal = auto_heal;
        self
    }

    pub fn with_loot(mut self, loot: LootConfig) -> Self {
        self.loot = loot;
        self
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.needs.validate()?;

        if self.loot.one_in == 0 {
            return Err(ConfigError::ZeroLootChance);
        }

        if matches!(self.auto_heal, Some(AutoHealConfig { interval: 0, .. })) {
            return Err(ConfigError::ZeroHealInterval);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Hunger/thirst accrual and the penalties attached to each threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NeedsConfig {
    /// Per-mille added to hunger every player turn.
    pub hunger_rate: u16,
    /// Per-mille added to thirst every player turn.
    pub thirst_rate: u16,
    /// Ascending low/medium/high thresholds for hunger.
    pub hunger_thresholds: [u16; 3],
    /// Ascending low/medium/high thresholds for thirst.
    pub thirst_thresholds: [u16; 3],
    /// Strength reduction added per crossed threshold.
    pub reduction_step: u16,
    /// Cap on the summed reduction.
    pub max_reduction: u16,
    /// Floor for the strength multiplier.
    pub min_multiplier: u16,
    /// Damage per turn while a resource sits at or above its high threshold.
    pub threshold_damage: u32,
}

impl NeedsConfig {
    pub const DEFAULT_THRESHOLDS: [u16; 3] = [400, 600, 800];

    pub fn rate(&self, kind: NeedKind) -> u16 {
        match kind {
            NeedKind::Hunger => self.hunger_rate,
            NeedKind::Thirst => self.thirst_rate,
        }
    }

    pub fn thresholds(&self, kind: NeedKind) -> [u16; 3] {
        match kind {
            NeedKind::Hunger => self.hunger_thresholds,
            NeedKind::Thirst => self.thirst_thresholds,
        }
    }

    /// Level at which natural healing stops.
    pub fn medium(&self, kind: NeedKind) -> u16 {
        self.thresholds(kind)[1]
    }

    /// Level at which the resource starts dealing damage.
    pub fn high(&self, kind: NeedKind) -> u16 {
        self.thresholds(kind)[2]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in NeedKind::ALL {
            let [low, medium, high] = self.thresholds(kind);
            if !(low < medium && medium < high && high <= 1000) {
                return Err(ConfigError::ThresholdsNotAscending {
                    kind,
                    thresholds: [low, medium, high],
                });
            }
        }

        if self.min_multiplier > 1000 {
            return Err(ConfigError::PerMilleOutOfRange {
                field: "min_multiplier",
                value: self.min_multiplier,
            });
        }
        if self.max_reduction > 1000 {
            return Err(ConfigError::PerMilleOutOfRange {
                field: "max_reduction",
                value: self.max_reduction,
            });
        }

        Ok(())
    }
}

impl Default for NeedsConfig {
    fn default() -> Self {
        Self {
            hunger_rate: 2,
            thirst_rate: 3,
            hunger_thresholds: Self::DEFAULT_THRESHOLDS,
            thirst_thresholds: Self::DEFAULT_THRESHOLDS,
            reduction_step: 100,
            max_reduction: 500,
            min_multiplier: 300,
            threshold_damage: 1,
        }
    }
}

/// Death drop chance and the table it draws from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LootConfig {
    /// A drop happens with probability `1 / one_in`.
    pub one_in: u32,
    /// Candidate items, picked uniformly. An empty table never drops.
    pub table: Vec<ItemHandle>,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self {
            one_in: 10,
            table: vec![ItemHandle(1)],
        }
    }
}

/// Strength of the built-in terrain effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HazardConfig {
    pub lava_damage: u32,
    pub ice_freeze_turns: u32,
    pub swamp_poison_turns: u32,
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            lava_damage: 3,
            ice_freeze_turns: 4,
            swamp_poison_turns: 6,
        }
    }
}

/// Heal `amount` every `interval` player turns without being hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoHealConfig {
    pub interval: u32,
    pub amount: u32,
}

impl Default for AutoHealConfig {
    fn default() -> Self {
        Self {
            interval: 10,
            amount: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{kind} thresholds must ascend and stay within 1000, got {thresholds:?}")]
    ThresholdsNotAscending { kind: NeedKind, thresholds: [u16; 3] },

    #[error("{field} must be at most 1000 per-mille, got {value}")]
    PerMilleOutOfRange { field: &'static str, value: u16 },

    #[error("loot chance denominator must be positive")]
    ZeroLootChance,

    #[error("auto-heal interval must be positive")]
    ZeroHealInterval,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ThresholdsNotAscending { .. } => "CONFIG_THRESHOLDS_NOT_ASCENDING",
            Self::PerMilleOutOfRange { .. } => "CONFIG_PER_MILLE_OUT_OF_RANGE",
            Self::ZeroLootChance => "CONFIG_ZERO_LOOT_CHANCE",
            Self::ZeroHealInterval => "CONFIG_ZERO_HEAL_INTERVAL",
        }
    }
}
