//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tactics_content::{ConfigLoader, ContentFactory, LevelLayout, LevelLoader};
use tactics_core::GameConfig;

use crate::headless::DEFAULT_LEVEL;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Content directory holding `config.toml` and `levels/`.
    pub data_dir: Option<PathBuf>,
    /// Level loaded from `data_dir/levels/<name>.ron`.
    pub level_name: String,
    /// TOML game configuration. Defaults apply when unset.
    pub config_path: Option<PathBuf>,
    /// RON level layout. The built-in arena is used when unset.
    pub level_path: Option<PathBuf>,
    /// Upper bound on frames driven before the client exits.
    pub frames: u64,
    /// Overrides `game_seed` from the configuration file.
    pub seed: Option<u64>,
    /// Comma-separated player intents, e.g. `east,east,use 0,pass`.
    pub script: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            level_name: Self::DEFAULT_LEVEL_NAME.to_owned(),
            config_path: None,
            level_path: None,
            frames: Self::DEFAULT_FRAMES,
            seed: None,
            script: String::new(),
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_FRAMES: u64 = 60;
    pub const DEFAULT_LEVEL_NAME: &'static str = "arena";

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TACTICS_DATA_DIR` - content directory (see [`ContentFactory`])
    /// - `TACTICS_LEVEL_NAME` - level inside the content directory (default: arena)
    /// - `TACTICS_CONFIG` - path to the game configuration TOML
    /// - `TACTICS_LEVEL` - path to a level layout RON
    /// - `TACTICS_FRAMES` - frames to drive (default: 60)
    /// - `TACTICS_SEED` - game seed override
    /// - `TACTICS_SCRIPT` - scripted player intents
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = read_env("TACTICS_DATA_DIR");
        if let Ok(name) = env::var("TACTICS_LEVEL_NAME") {
            config.level_name = name;
        }
        config.config_path = read_env("TACTICS_CONFIG");
        config.level_path = read_env("TACTICS_LEVEL");
        if let Some(frames) = read_env::<u64>("TACTICS_FRAMES") {
            config.frames = frames;
        }
        config.seed = read_env("TACTICS_SEED");
        if let Ok(script) = env::var("TACTICS_SCRIPT") {
            config.script = script;
        }

        config
    }

    /// Game configuration and level layout this client should run.
    ///
    /// Explicit file paths win over the content directory. Without either,
    /// the defaults and the built-in arena are used.
    pub fn load_content(&self) -> Result<(GameConfig, LevelLayout)> {
        let factory = self.data_dir.as_ref().map(ContentFactory::new);

        let mut game_config = match (&self.config_path, &factory) {
            (Some(path), _) => ConfigLoader::load(path)?,
            (None, Some(factory)) => factory.load_config()?,
            (None, None) => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            game_config.game_seed = seed;
        }

        let layout = match (&self.level_path, &factory) {
            (Some(path), _) => LevelLoader::load(path)?,
            (None, Some(factory)) => factory.load_level(&self.level_name)?,
            (None, None) => LevelLoader::parse(DEFAULT_LEVEL)?,
        };

        Ok((game_config, layout))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
