use tracing::{debug, info};

use super::{ActionError, placement};
use crate::env::GameEnv;
use crate::state::{EntityId, GameEvent, World, attr};
use crate::templates;

/// What a single attack did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub damage: i32,
    pub killed: bool,
    /// The target switched sides.
    pub provoked: bool,
}

/// Applies one attack from `attacker` to `target`. Does not conclude the turn.
///
/// A surviving non-player actor on the attacker's own side turns against it.
/// A target whose health drops to zero or below is killed.
pub fn attack(
    world: &mut World,
    env: GameEnv<'_>,
    attacker: EntityId,
    target: EntityId,
) -> Result<AttackReport, ActionError> {
    let attacker_is_enemy = world.entity(attacker)?.is_enemy();
    let damage = env.config.attack_damage;

    let record = world.entity_mut(target)?;
    let mut health = record
        .health()
        .ok_or(ActionError::NotDamageable(target))?;
    health.damage(damage);
    record.set(attr::HEALTH, health);

    let killed = health.is_depleted();
    let provoked = !killed
        && record.is_actor()
        && !record.is_player()
        && record.is_enemy() == attacker_is_enemy;
    if provoked {
        record.set(attr::IS_ENEMY, !attacker_is_enemy);
    }

    world.record(GameEvent::Attacked {
        attacker,
        target,
        damage,
    });
    debug!(%attacker, %target, damage, remaining = health.current, "attack");

    if provoked {
        world.record(GameEvent::Provoked {
            target,
            is_enemy: !attacker_is_enemy,
        });
    }
    if killed {
        kill(world, attacker, target)?;
    }

    Ok(AttackReport {
        damage,
        killed,
        provoked,
    })
}

/// Drops the target's coins and held item on its tile, then takes it off
/// the level. The record stays in the store.
pub fn kill(world: &mut World, killer: EntityId, target: EntityId) -> Result<(), ActionError> {
    let (level, position) = placement(world, target)?;
    let record = world.entity_mut(target)?;
    let coins = record.coins().unwrap_or(0);
    let held_item = record.held_item();
    if coins > 0 {
        record.set(attr::COINS, 0);
    }
    record.remove(attr::HELD_ITEM);

    world.remove_entity_from_level(target)?;

    if coins > 0 {
        let pile = world.create_entity(templates::pile_of_coins(coins));
        world.add_entity_to_level(pile, level, position)?;
    }
    if let Some(item) = held_item {
        world.add_entity_to_level(item, level, position)?;
    }

    world.record(GameEvent::Died {
        entity: target,
        killer,
    });
    info!(entity = %target, %killer, %position, coins, "died");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Attributes, Health, ItemKind, LevelId, Position};
    use crate::templates;

    fn arena() -> (World, LevelId) {
        let mut world = World::new();
        let level = world.create_grid_level(3, 3);
        (world, level)
    }

    fn spawn(world: &mut World, level: LevelId, at: Position, attributes: Attributes) -> EntityId {
        let id = world.create_entity(attributes);
        world.add_entity_to_level(id, level, at).unwrap();
        id
    }

    #[test]
    fn damage_reduces_health() {
        let config = GameConfig::new();
        let (mut world, level) = arena();
        let player = spawn(&mut world, level, Position::new(0, 0), templates::player());
        let frog = spawn(&mut world, level, Position::new(1, 0), templates::frog(true));

        let report = attack(&mut world, GameEnv::with_config(&config), player, frog).unwrap();

        assert!(!report.killed);
        assert!(!report.provoked);
        assert_eq!(world.entity(frog).unwrap().health(), Some(Health::new(2, 3)));
    }

    #[test]
    fn friendly_fire_provokes() {
        let config = GameConfig::new();
        let (mut world, level) = arena();
        let player = spawn(&mut world, level, Position::new(0, 0), templates::player());
        let buddy = spawn(&mut world, level, Position::new(1, 0), templates::frog(false));

        let report = attack(&mut world, GameEnv::with_config(&config), player, buddy).unwrap();

        assert!(report.provoked);
        assert!(world.entity(buddy).unwrap().is_enemy());
    }

    #[test]
    fn death_drops_coins_and_held_item() {
        let config = GameConfig::new();
        let (mut world, level) = arena();
        let player = spawn(&mut world, level, Position::new(0, 0), templates::player());
        let item = world.create_entity(templates::item(ItemKind::HealingRing));
        let egg = spawn(
            &mut world,
            level,
            Position::new(1, 0),
            templates::gochapon_egg(item, templates::EGG_SPRITES[2]),
        );
        let hornet = spawn(&mut world, level, Position::new(0, 1), templates::hornet(true));

        let env = GameEnv::with_config(&config);
        assert!(attack(&mut world, env, player, egg).unwrap().killed);
        assert!(attack(&mut world, env, player, hornet).unwrap().killed);

        let egg_tile = world.find_tile_in_level(level, Position::new(1, 0)).unwrap();
        assert_eq!(world.tile(egg_tile).unwrap().entities, vec![item]);
        assert!(world.entity(egg).unwrap().position().is_none());

        let hornet_tile = world.find_tile_in_level(level, Position::new(0, 1)).unwrap();
        let on_tile = world.entities_on_tile(hornet_tile, &[]).unwrap();
        assert_eq!(on_tile.len(), 1);
        assert!(on_tile[0].flag(attr::IS_PILE_OF_COINS));
        assert_eq!(on_tile[0].int(attr::AMOUNT), Some(1));
    }

    #[test]
    fn attacking_scenery_fails() {
        let config = GameConfig::new();
        let (mut world, level) = arena();
        let player = spawn(&mut world, level, Position::new(0, 0), templates::player());
        let wall = spawn(&mut world, level, Position::new(1, 0), templates::wall());

        assert_eq!(
            attack(&mut world, GameEnv::with_config(&config), player, wall),
            Err(ActionError::NotDamageable(wall))
        );
    }
}
