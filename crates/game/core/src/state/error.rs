//! State management errors.
//!
//! Raised while populating or rearranging the arena: spawning, moving and
//! level transitions. The round itself never fails; it only transitions.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The player slot is already taken.
    #[error("player is already spawned")]
    PlayerAlreadySpawned,

    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("position {position} is outside the map ({width}x{height})")]
    PositionOutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    /// Terrain at the position cannot be entered.
    #[error("position {position} is not passable")]
    Impassable { position: Position },

    #[error("position {position} is already occupied by {occupant}")]
    PositionOccupied {
        position: Position,
        occupant: EntityId,
    },

    /// Occupancy layer disagrees with the actor's recorded position.
    #[error("occupancy desync for {actor} at {position}")]
    OccupancyDesync { actor: EntityId, position: Position },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PositionOccupied { .. } | Self::Impassable { .. } => ErrorSeverity::Recoverable,
            Self::PlayerAlreadySpawned
            | Self::ActorNotFound(_)
            | Self::PositionOutOfBounds { .. } => ErrorSeverity::Validation,
            Self::OccupancyDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerAlreadySpawned => "STATE_PLAYER_ALREADY_SPAWNED",
            Self::ActorNotFound(_) => "STATE_ACTOR_NOT_FOUND",
            Self::PositionOutOfBounds { .. } => "STATE_POSITION_OUT_OF_BOUNDS",
            Self::Impassable { .. } => "STATE_IMPASSABLE",
            Self::PositionOccupied { .. } => "STATE_POSITION_OCCUPIED",
            Self::OccupancyDesync { .. } => "STATE_OCCUPANCY_DESYNC",
        }
    }
}
