//! Content factory resolving data files from a directory.

use std::path::{Path, PathBuf};

use tactics_core::GameConfig;

use crate::loaders::{ConfigLoader, LevelLayout, LevelLoader, LoadResult};

/// Loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── levels/
///     ├── arena.ron
///     └── shop.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load `config.toml`, or the defaults when the file does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `levels/<name>.ron`.
    pub fn load_level(&self, name: &str) -> LoadResult<LevelLayout> {
        let path = self.data_dir.join("levels").join(format!("{name}.ron"));
        LevelLoader::load(&path)
    }
}
