//! World store errors.
//!
//! Every variant means an id or position that the caller believed valid is
//! not there. None of them are retried.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, LevelId, Position, TileId};

/// Errors raised by lookups and mutations on the [`World`](crate::World).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldError {
    #[error("level {0} doesn't exist")]
    LevelNotFound(LevelId),

    #[error("tile {0} doesn't exist")]
    TileNotFound(TileId),

    #[error("entity {0} doesn't exist")]
    EntityNotFound(EntityId),

    /// The level has no tile at this position.
    #[error("tile with position {position} doesn't exist in {level}")]
    PositionNotInLevel {
        level: LevelId,
        position: Position,
    },

    /// A placement operation was asked to move an entity that is not in any level.
    #[error("cannot move entity {0} because it doesn't exist in any level")]
    NotInLevel(EntityId),
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        use WorldError::*;
        match self {
            LevelNotFound(_) | TileNotFound(_) | EntityNotFound(_) | PositionNotInLevel { .. } => {
                ErrorSeverity::Fatal
            }

            // Entity exists but its placement attributes are missing
            NotInLevel(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use WorldError::*;
        match self {
            LevelNotFound(_) => "WORLD_LEVEL_NOT_FOUND",
            TileNotFound(_) => "WORLD_TILE_NOT_FOUND",
            EntityNotFound(_) => "WORLD_ENTITY_NOT_FOUND",
            PositionNotInLevel { .. } => "WORLD_POSITION_NOT_IN_LEVEL",
            NotInLevel(_) => "WORLD_NOT_IN_LEVEL",
        }
    }
}
