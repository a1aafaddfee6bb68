use grid_graph::Direction;
use tracing::debug;

use super::{
    ActionError, ActionOutcome, Rejection, attack, conclude_turn, placement, use_gochapon_machine,
};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{EntityId, GameEvent, Position, Value, World, attr};

/// Moves `actor` to `position` in its level and collects what lies there.
///
/// Coin piles are added to the actor's `coins`; floor items go into its
/// `inventory` while a slot is free. Does not conclude the turn.
pub fn move_actor(
    world: &mut World,
    actor: EntityId,
    position: Position,
) -> Result<(), ActionError> {
    let (level, from) = placement(world, actor)?;
    world.move_entity_to_position(actor, position)?;
    world.record(GameEvent::Moved {
        entity: actor,
        from,
        to: position,
    });

    let tile = world.find_tile_in_level(level, position)?;
    let (has_coins, has_inventory) = {
        let record = world.entity(actor)?;
        (record.has(attr::COINS), record.inventory().is_some())
    };

    let mut piles = Vec::new();
    let mut items = Vec::new();
    for entity in world.entities_on_tile(tile, &[actor])? {
        if has_coins && entity.flag(attr::IS_PILE_OF_COINS) {
            piles.push((entity.id, entity.int(attr::AMOUNT).unwrap_or(0)));
        } else if has_inventory && entity.flag(attr::IS_ITEM) {
            items.push(entity.id);
        }
    }

    for (pile, amount) in piles {
        world.remove_entity_from_level(pile)?;
        let record = world.entity_mut(actor)?;
        let coins = record.coins().unwrap_or(0) + amount;
        record.set(attr::COINS, coins);
        world.record(GameEvent::CoinsCollected {
            collector: actor,
            amount,
        });
    }

    for item in items {
        let mut inventory = world
            .entity(actor)?
            .inventory()
            .map(<[EntityId]>::to_vec)
            .unwrap_or_default();
        if inventory.len() >= GameConfig::MAX_INVENTORY_SLOTS {
            break;
        }
        world.remove_entity_from_level(item)?;
        inventory.push(item);
        world
            .entity_mut(actor)?
            .set(attr::INVENTORY, Value::Entities(inventory));
        world.record(GameEvent::ItemPickedUp {
            collector: actor,
            item,
        });
    }

    Ok(())
}

/// The player's bump action.
///
/// Resolves against the tile one step in `direction`:
/// - no such tile: rejected
/// - a solid entity without health: interact if it is a gochapon machine,
///   otherwise rejected as blocked
/// - an entity with health: attack it
/// - otherwise: move there
pub fn act_in_direction(
    world: &mut World,
    env: GameEnv<'_>,
    actor: EntityId,
    direction: Direction,
) -> Result<ActionOutcome, ActionError> {
    let (level, position) = placement(world, actor)?;
    let target_position = position + direction;

    if !world.does_position_exist_in_level(level, target_position)? {
        return Ok(ActionOutcome::Rejected(Rejection::OutOfBounds));
    }

    let tile = world.find_tile_in_level(level, target_position)?;
    let occupants = world.entities_on_tile(tile, &[actor])?;

    if let Some(obstacle) = occupants
        .iter()
        .find(|entity| entity.is_solid() && !entity.has_health())
    {
        if obstacle.flag(attr::IS_GOCHAPON_MACHINE) {
            let machine = obstacle.id;
            return use_gochapon_machine(world, env, actor, machine);
        }
        return Ok(ActionOutcome::Rejected(Rejection::Blocked));
    }

    let target = occupants
        .iter()
        .find(|entity| entity.has_health())
        .map(|entity| entity.id);
    match target {
        Some(target) => {
            attack(world, env, actor, target)?;
        }
        None => {
            debug!(%actor, ?direction, to = %target_position, "move");
            move_actor(world, actor, target_position)?;
        }
    }

    conclude_turn(world, env, actor)?;
    Ok(ActionOutcome::Concluded)
}
