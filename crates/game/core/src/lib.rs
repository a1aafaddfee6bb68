//! Deterministic rules for a turn-based tactics game on tile grids.
//!
//! `tactics-core` owns the attribute-bag [`World`], the structural [`Query`]
//! engine, player and non-player actions, and the energy-debt
//! [`TurnScheduler`] that decides who acts next. Everything here is
//! synchronous and seed-deterministic: the same world, config and seed always
//! produce the same sequence of [`GameEvent`]s.
pub mod action;
pub mod ai;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod navigation;
pub mod query;
pub mod rng;
pub mod state;
pub mod templates;

pub use action::{Action, ActionError, ActionOutcome, Rejection};
pub use ai::{Decision, npc_behavior};
pub use grid_graph::{Connectivity, Direction};
pub use config::GameConfig;
pub use engine::{SchedulerOutcome, TurnError, TurnScheduler};
pub use env::GameEnv;
pub use error::{ErrorSeverity, GameError};
pub use navigation::LevelGraph;
pub use query::{Matcher, Query, find_entities, find_entity};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{
    Attributes, Entity, EntityId, EntityStore, GameEvent, Health, ItemKind, Level, LevelId,
    Position, Tile, TileId, Value, World, WorldError, attr,
};
