use std::str::FromStr;

use tracing::{debug, info};

use super::{
    ActionError, ActionOutcome, Rejection, conclude_turn, free_surrounding_tiles, placement,
};
use crate::env::GameEnv;
use crate::rng::context;
use crate::state::{Attributes, EntityId, GameEvent, ItemKind, Value, World, attr};
use crate::templates;

/// Pulls a kind from the world's item pool and creates an unplaced item.
///
/// `draw` distinguishes several draws made by the same actor in one action.
pub fn draw_item(world: &mut World, env: GameEnv<'_>, actor: EntityId, draw: u32) -> EntityId {
    let nonce = world.nonce();
    let kind = world.item_pool.draw(|len| {
        env.choose_index(nonce, actor, context::ITEM_DRAW + draw, len)
            .unwrap_or(0)
    });
    world.create_entity(templates::item(kind))
}

/// Spawns an ally of `summoner` on a random free surrounding tile.
///
/// Returns `None` when every surrounding tile is occupied.
pub fn summon(
    world: &mut World,
    env: GameEnv<'_>,
    summoner: EntityId,
    template: fn(bool) -> Attributes,
) -> Result<Option<EntityId>, ActionError> {
    let (level, position) = placement(world, summoner)?;
    let free = free_surrounding_tiles(world, env, level, position)?;
    let Some(index) = env.choose_index(world.nonce(), summoner, context::SUMMON_TILE, free.len())
    else {
        return Ok(None);
    };
    let destination = world.tile(free[index])?.position;

    let is_enemy = world.entity(summoner)?.is_enemy();
    let summoned = world.create_entity(template(is_enemy));
    world.add_entity_to_level(summoned, level, destination)?;
    world.record(GameEvent::Summoned { summoner, summoned });
    debug!(%summoner, %summoned, at = %destination, "summoned");
    Ok(Some(summoned))
}

/// Uses the inventory item at `slot`.
///
/// On success the item is consumed and the user's turn concludes. An empty
/// slot or an effect that could not apply leaves everything unchanged.
pub fn use_item(
    world: &mut World,
    env: GameEnv<'_>,
    user: EntityId,
    slot: usize,
) -> Result<ActionOutcome, ActionError> {
    let record = world.entity(user)?;
    if !record.is_actor() {
        return Err(ActionError::NotAnActor(user));
    }
    let Some(&item) = record.inventory().and_then(|inventory| inventory.get(slot)) else {
        return Ok(ActionOutcome::Rejected(Rejection::EmptySlot));
    };

    let kind = world
        .entity(item)?
        .text(attr::ITEM_KIND)
        .and_then(|name| ItemKind::from_str(name).ok())
        .ok_or(ActionError::UnknownItem(item))?;

    if !apply_effect(world, env, user, item, kind)? {
        debug!(%user, %kind, "item had no effect");
        return Ok(ActionOutcome::Rejected(Rejection::NoEffect));
    }

    let mut inventory = inventory_of(world, user)?;
    inventory.retain(|&id| id != item);
    world
        .entity_mut(user)?
        .set(attr::INVENTORY, Value::Entities(inventory));
    world.delete_entity(item)?;

    world.record(GameEvent::ItemUsed { user, item });
    info!(%user, %kind, "used item");
    conclude_turn(world, env, user)?;
    Ok(ActionOutcome::Concluded)
}

fn inventory_of(world: &World, user: EntityId) -> Result<Vec<EntityId>, ActionError> {
    Ok(world
        .entity(user)?
        .inventory()
        .map(<[EntityId]>::to_vec)
        .unwrap_or_default())
}

fn apply_effect(
    world: &mut World,
    env: GameEnv<'_>,
    user: EntityId,
    item: EntityId,
    kind: ItemKind,
) -> Result<bool, ActionError> {
    match kind {
        ItemKind::WitchHat => Ok(summon(world, env, user, templates::frog)?.is_some()),
        ItemKind::HornetBox => Ok(summon(world, env, user, templates::hornet)?.is_some()),
        ItemKind::HealingRing => {
            let record = world.entity_mut(user)?;
            let Some(mut health) = record.health() else {
                return Ok(false);
            };
            if health.is_full() {
                return Ok(false);
            }
            health.heal(1);
            record.set(attr::HEALTH, health);
            Ok(true)
        }
        ItemKind::BlackOpalPendant => {
            let (level, _) = placement(world, user)?;
            let free = world.free_tiles_in_level(level)?;
            let Some(index) =
                env.choose_index(world.nonce(), user, context::TELEPORT_TILE, free.len())
            else {
                return Ok(false);
            };
            let destination = world.tile(free[index])?.position;
            world.move_entity_to_position(user, destination)?;
            world.record(GameEvent::Teleported {
                entity: user,
                to: destination,
            });
            Ok(true)
        }
        ItemKind::FourSidedDie => {
            // every other item is replaced; the die itself is consumed
            let mut inventory = inventory_of(world, user)?;
            let mut draws = 0;
            for slot in inventory.iter_mut().filter(|id| **id != item) {
                let replaced = std::mem::replace(slot, draw_item(world, env, user, draws));
                world.delete_entity(replaced)?;
                draws += 1;
            }
            world
                .entity_mut(user)?
                .set(attr::INVENTORY, Value::Entities(inventory));
            Ok(true)
        }
        ItemKind::ScrollOfFire => Ok(true),
    }
}
