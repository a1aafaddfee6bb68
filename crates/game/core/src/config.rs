use grid_graph::Connectivity;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Energy charged for a turn when the actor has no `action_cost` attribute.
    pub default_action_cost: i64,

    /// Initial `action_ticks` for non-player actors. `None` uses the actor's
    /// own action cost.
    pub initial_npc_delay: Option<i64>,

    /// Upper bound on non-player actions resolved within one update. Guards
    /// against levels without a player where the cascade never waits for input.
    pub max_actions_per_update: usize,

    /// Health removed by a single attack.
    pub attack_damage: i32,

    /// Neighbourhood used for movement, pathing and surrounding-tile lookups.
    pub connectivity: Connectivity,

    /// Base seed for deterministic random rolls.
    pub game_seed: u64,
}

impl GameConfig {
    // ===== compile-time limits =====
    pub const MAX_INVENTORY_SLOTS: usize = 8;
    /// Upper bound of surrounding tiles (principal connectivity).
    pub const MAX_NEIGHBOURS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ACTION_COST: i64 = 100;
    pub const DEFAULT_MAX_ACTIONS_PER_UPDATE: usize = 1024;
    pub const DEFAULT_ATTACK_DAMAGE: i32 = 1;

    pub fn new() -> Self {
        Self {
            default_action_cost: Self::DEFAULT_ACTION_COST,
            initial_npc_delay: None,
            max_actions_per_update: Self::DEFAULT_MAX_ACTIONS_PER_UPDATE,
            attack_damage: Self::DEFAULT_ATTACK_DAMAGE,
            connectivity: Connectivity::Cardinal,
            game_seed: 0,
        }
    }

    pub fn with_seed(mut self, game_seed: u64) -> Self {
        self.game_seed = game_seed;
        self
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_initial_npc_delay(mut self, delay: i64) -> Self {
        self.initial_npc_delay = Some(delay);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
