//! Level layout loader.
//!
//! A layout is a rectangular floor plus the entities standing on it:
//!
//! ```ron
//! (
//!     width: 5,
//!     height: 3,
//!     entities: [
//!         (0, 1, player),
//!         (4, 1, frog),
//!         (2, 0, wall),
//!         (2, 2, item(healing_ring)),
//!     ],
//! )
//! ```

use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tactics_core::{LevelId, Position, World};
use tracing::{debug, info};

use crate::kinds::EntityKind;
use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub width: u32,
    pub height: u32,
    /// `(x, y, kind)`, spawned in order.
    #[serde(default)]
    pub entities: Vec<(i32, i32, EntityKind)>,
}

impl LevelLayout {
    fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y)
    }

    /// Creates the level's tiles and entities in `world`.
    ///
    /// Every placement is checked before anything is created, so a bad
    /// layout leaves the world untouched.
    pub fn spawn(&self, world: &mut World) -> LoadResult<LevelId> {
        if self.width == 0 || self.height == 0 {
            bail!("level must be at least 1x1, got {}x{}", self.width, self.height);
        }
        for &(x, y, kind) in &self.entities {
            if !self.contains(x, y) {
                bail!(
                    "{kind} at ({x}, {y}) lies outside the {}x{} level",
                    self.width,
                    self.height
                );
            }
        }

        let level = world.create_grid_level(self.width, self.height);
        for &(x, y, kind) in &self.entities {
            let entity = world.create_entity(kind.attributes());
            world
                .add_entity_to_level(entity, level, Position::new(x, y))
                .with_context(|| format!("failed to place {kind} at ({x}, {y})"))?;
            debug!(%entity, %kind, x, y, "spawned");
        }

        info!(
            %level,
            width = self.width,
            height = self.height,
            entities = self.entities.len(),
            "level spawned"
        );
        Ok(level)
    }
}

/// Loader for [`LevelLayout`]s from RON files.
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<LevelLayout> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("invalid level in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<LevelLayout> {
        ron::from_str(content).context("failed to parse level RON")
    }
}
