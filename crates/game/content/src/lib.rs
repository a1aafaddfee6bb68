//! Data-driven content for the tactics engine.
//!
//! - [`EntityKind`]: the names level layouts use, mapped to core templates
//! - Level layouts (RON) spawned into a [`tactics_core::World`]
//! - Game configuration (TOML)
//!
//! Content is consumed when a level is built and never referenced by the
//! rules afterwards.

pub mod kinds;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use kinds::EntityKind;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LevelLayout, LevelLoader, LoadResult};
