//! Loaders turning RON/TOML files into core values.

pub mod config;
pub mod factory;
pub mod level;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use level::{LevelLayout, LevelLoader};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
