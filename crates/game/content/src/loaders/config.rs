//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use tactics_core::GameConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files.
///
/// Missing keys fall back to their defaults, so an empty file is a valid
/// configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).context("failed to parse config TOML")
    }
}
