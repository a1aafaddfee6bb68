//! Shared error classification for tactics-core.
//!
//! Each layer owns its error enum (`WorldError`, `ActionError`, `TurnError`)
//! next to the code that raises it. This module holds the pieces they share:
//! a severity scale and the [`GameError`] trait that exposes it.
//!
//! Missing identifiers are always [`ErrorSeverity::Fatal`]: they mean a stale
//! id reached the core, which is a bug upstream, not a condition to retry.
//! Outcomes such as "no path" or "no free tile" are not errors at all and are
//! reported through `Option`s and empty collections instead.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request cannot be honoured right now, but the state is fine.
    ///
    /// Examples: actor has no health to attack, item used by a non-holder
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: acting with an entity that is not an actor
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: entity claims a level but sits on no tile
    Internal,

    /// A data-model invariant is broken; the caller holds a stale id.
    ///
    /// Examples: unknown level, tile or entity; search result without parent
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all tactics-core errors.
///
/// Implementors are `thiserror` enums; this adds a severity and a stable
/// code that logs and tests can match on.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl GameError for grid_graph::GraphError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StartNotFound => "GRAPH_START_NOT_FOUND",
            Self::MissingResult => "GRAPH_MISSING_RESULT",
            Self::MissingParent => "GRAPH_MISSING_PARENT",
        }
    }
}
