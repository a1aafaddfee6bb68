//! Scheduler errors.

use grid_graph::GraphError;

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, WorldError};

/// Errors surfaced while scheduling or resolving a turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("graph search failed: {0}")]
    Graph(#[from] GraphError),

    /// The actor still carries energy debt.
    #[error("entity {actor} is not ready to act ({action_ticks} ticks left)")]
    NotReady { actor: EntityId, action_ticks: i64 },

    #[error("entity {0} is not an actor")]
    NotAnActor(EntityId),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        use TurnError::*;
        match self {
            Action(error) => error.severity(),
            World(error) => error.severity(),
            Graph(error) => error.severity(),
            NotReady { .. } => ErrorSeverity::Recoverable,
            NotAnActor(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use TurnError::*;
        match self {
            Action(error) => error.error_code(),
            World(error) => error.error_code(),
            Graph(error) => error.error_code(),
            NotReady { .. } => "TURN_NOT_READY",
            NotAnActor(_) => "TURN_NOT_AN_ACTOR",
        }
    }
}
