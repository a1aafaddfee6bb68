//! Errors surfaced by the frame driver.

use thiserror::Error;

use tactics_core::{ErrorSeverity, GameError, TurnError, WorldError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("scene `{0}` is not registered")]
    UnknownScene(String),

    #[error("scene `{0}` is registered twice")]
    DuplicateScene(String),

    #[error("scene `{scene}` failed: {message}")]
    Scene { scene: String, message: String },
}

impl RuntimeError {
    /// Convenience for scene implementations reporting their own failures.
    pub fn scene(scene: impl Into<String>, message: impl Into<String>) -> Self {
        RuntimeError::Scene {
            scene: scene.into(),
            message: message.into(),
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Turn(error) => error.severity(),
            RuntimeError::World(error) => error.severity(),
            RuntimeError::UnknownScene(_) | RuntimeError::DuplicateScene(_) => {
                ErrorSeverity::Validation
            }
            RuntimeError::Scene { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Turn(error) => error.error_code(),
            RuntimeError::World(error) => error.error_code(),
            RuntimeError::UnknownScene(_) => "RUNTIME_UNKNOWN_SCENE",
            RuntimeError::DuplicateScene(_) => "RUNTIME_DUPLICATE_SCENE",
            RuntimeError::Scene { .. } => "RUNTIME_SCENE_FAILED",
        }
    }
}
