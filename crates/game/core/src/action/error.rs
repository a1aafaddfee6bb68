//! Action execution errors.
//!
//! A rule that cannot apply ("not enough coins", "tile is blocked") is not an
//! error: it comes back as [`Rejection`](super::Rejection). These variants
//! mean the caller handed in an entity that cannot take part in the action.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, WorldError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    World(#[from] WorldError),

    /// Only actors take turns.
    #[error("entity {0} is not an actor")]
    NotAnActor(EntityId),

    /// The acting entity has no level or position.
    #[error("entity {0} is not placed in a level")]
    NotPlaced(EntityId),

    /// An attack was aimed at something without health.
    #[error("entity {0} cannot be damaged")]
    NotDamageable(EntityId),

    /// Inventory holds an entity that is not a known item.
    #[error("entity {0} is not a usable item")]
    UnknownItem(EntityId),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            World(error) => error.severity(),
            NotAnActor(_) | NotDamageable(_) | UnknownItem(_) => ErrorSeverity::Validation,
            NotPlaced(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            World(error) => error.error_code(),
            NotAnActor(_) => "ACTION_NOT_AN_ACTOR",
            NotPlaced(_) => "ACTION_NOT_PLACED",
            NotDamageable(_) => "ACTION_NOT_DAMAGEABLE",
            UnknownItem(_) => "ACTION_UNKNOWN_ITEM",
        }
    }
}
