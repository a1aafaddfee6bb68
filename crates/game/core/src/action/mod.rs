//! Rules that mutate the world on behalf of an actor.
//!
//! Every entry point takes the world mutably plus the read-only [`GameEnv`].
//! A resolved action always ends in [`conclude_turn`], which charges the
//! actor's action cost; a rejected one leaves the world untouched.
//!
//! - `turn`: conclude and pass
//! - `combat`: damage, provocation and death drops
//! - `movement`: stepping, pickups and the player's "act in direction"
//! - `items`: inventory item effects and summoning
//! - `interact`: gochapon machines

mod combat;
mod error;
mod interact;
mod items;
mod movement;
mod turn;

pub use combat::{AttackReport, attack, kill};
pub use error::ActionError;
pub use interact::use_gochapon_machine;
pub use items::{draw_item, summon, use_item};
pub use movement::{act_in_direction, move_actor};
pub use turn::{conclude_turn, pass_turn};

use grid_graph::Direction;

use crate::env::GameEnv;
use crate::state::{EntityId, LevelId, Position, TileId, World};

/// Result of an action that did not fail outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action happened and the actor's turn is over.
    Concluded,
    /// Nothing happened; the actor may try something else.
    Rejected(Rejection),
}

impl ActionOutcome {
    pub fn is_concluded(&self) -> bool {
        matches!(self, ActionOutcome::Concluded)
    }
}

/// Why an action had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Rejection {
    OutOfBounds,
    Blocked,
    InsufficientCoins,
    NoFreeTile,
    EmptySlot,
    NoEffect,
}

/// A decision an actor can submit for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Move, attack or interact depending on what occupies the target tile.
    Act(Direction),
    /// Use the inventory item at this slot.
    UseItem(usize),
    Pass,
}

impl Action {
    pub fn apply(
        self,
        world: &mut World,
        env: GameEnv<'_>,
        actor: EntityId,
    ) -> Result<ActionOutcome, ActionError> {
        match self {
            Action::Act(direction) => act_in_direction(world, env, actor, direction),
            Action::UseItem(slot) => use_item(world, env, actor, slot),
            Action::Pass => pass_turn(world, env, actor),
        }
    }
}

/// Level and position of a placed entity.
pub(crate) fn placement(
    world: &World,
    entity: EntityId,
) -> Result<(LevelId, Position), ActionError> {
    let record = world.entity(entity)?;
    match (record.current_level(), record.position()) {
        (Some(level), Some(position)) => Ok((level, position)),
        _ => Err(ActionError::NotPlaced(entity)),
    }
}

/// Surrounding tiles (in direction order) holding no entity.
pub(crate) fn free_surrounding_tiles(
    world: &World,
    env: GameEnv<'_>,
    level: LevelId,
    position: Position,
) -> Result<Vec<TileId>, ActionError> {
    let mut free = Vec::new();
    for tile in
        world.find_surrounding_tiles(level, position, env.config.connectivity.directions())?
    {
        if world.tile(tile)?.is_empty() {
            free.push(tile);
        }
    }
    Ok(free)
}
