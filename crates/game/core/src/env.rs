//! Read-only collaborators passed alongside the mutable world.

use crate::config::GameConfig;
use crate::rng::{PcgRng, RngOracle, compute_seed};
use crate::state::EntityId;

/// Configuration and randomness, borrowed for the duration of a call.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    pub config: &'a GameConfig,
    pub rng: &'a dyn RngOracle,
}

static DEFAULT_RNG: PcgRng = PcgRng;

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    /// Uses the built-in PCG generator.
    pub fn with_config(config: &'a GameConfig) -> Self {
        Self::new(config, &DEFAULT_RNG)
    }

    /// Seed for a roll made by `actor` at action `nonce`.
    pub fn seed(&self, nonce: u64, actor: EntityId, context: u32) -> u64 {
        compute_seed(self.config.game_seed, nonce, actor.0, context)
    }

    /// Uniform index below `len` for the given roll, `None` when `len` is 0.
    pub fn choose_index(
        &self,
        nonce: u64,
        actor: EntityId,
        context: u32,
        len: usize,
    ) -> Option<usize> {
        self.rng.choose_index(self.seed(nonce, actor, context), len)
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
