use tracing::info;

use super::{
    ActionError, ActionOutcome, Rejection, conclude_turn, draw_item, free_surrounding_tiles,
    placement,
};
use crate::env::GameEnv;
use crate::rng::context;
use crate::state::{EntityId, GameEvent, World, attr};
use crate::templates;

/// Buys an egg from a gochapon machine.
///
/// Charges the machine's `cost` in coins and drops an egg holding a freshly
/// drawn item on a random free tile around the machine. With too few coins
/// or no free tile nothing happens.
pub fn use_gochapon_machine(
    world: &mut World,
    env: GameEnv<'_>,
    customer: EntityId,
    machine: EntityId,
) -> Result<ActionOutcome, ActionError> {
    let cost = world.entity(machine)?.int(attr::COST).unwrap_or(0);
    let coins = world.entity(customer)?.coins().unwrap_or(0);
    if coins < cost {
        return Ok(ActionOutcome::Rejected(Rejection::InsufficientCoins));
    }

    let (level, position) = placement(world, machine)?;
    let free = free_surrounding_tiles(world, env, level, position)?;
    let nonce = world.nonce();
    let Some(index) = env.choose_index(nonce, customer, context::EGG_TILE, free.len()) else {
        return Ok(ActionOutcome::Rejected(Rejection::NoFreeTile));
    };
    let destination = world.tile(free[index])?.position;

    world.entity_mut(customer)?.set(attr::COINS, coins - cost);

    let item = draw_item(world, env, customer, 0);
    let sprite = env
        .choose_index(nonce, customer, context::EGG_SPRITE, templates::EGG_SPRITES.len())
        .map_or(templates::EGG_SPRITES[0], |index| templates::EGG_SPRITES[index]);
    let egg = world.create_entity(templates::gochapon_egg(item, sprite));
    world.add_entity_to_level(egg, level, destination)?;

    world.record(GameEvent::EggDispensed {
        machine,
        egg,
        customer,
    });
    info!(%customer, %egg, at = %destination, cost, "gochapon egg dispensed");

    conclude_turn(world, env, customer)?;
    Ok(ActionOutcome::Concluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::act_in_direction;
    use crate::config::GameConfig;
    use crate::state::{LevelId, Position};
    use grid_graph::Direction;

    fn setup(coins: i64) -> (World, LevelId, EntityId, EntityId) {
        let mut world = World::new();
        let level = world.create_grid_level(3, 3);
        let player = world.create_entity(templates::player().with(attr::COINS, coins));
        world
            .add_entity_to_level(player, level, Position::new(0, 1))
            .unwrap();
        let machine = world.create_entity(templates::gochapon_machine());
        world
            .add_entity_to_level(machine, level, Position::new(1, 1))
            .unwrap();
        (world, level, player, machine)
    }

    #[test]
    fn bumping_the_machine_buys_an_egg() {
        let config = GameConfig::new();
        let (mut world, _, player, machine) = setup(5);

        let outcome =
            act_in_direction(&mut world, GameEnv::with_config(&config), player, Direction::East)
                .unwrap();

        assert!(outcome.is_concluded());
        assert_eq!(world.entity(player).unwrap().coins(), Some(3));
        let eggs = world.find_entities_with_attribute(attr::HIDE_HEALTH, None);
        assert_eq!(eggs.len(), 1);
        let egg = world.entity(eggs[0]).unwrap();
        let held = egg.held_item().unwrap();
        assert!(world.entity(held).unwrap().flag(attr::IS_ITEM));
        assert!(world.entity(held).unwrap().position().is_none());
        assert!(matches!(
            world.events().first(),
            Some(GameEvent::EggDispensed { machine: m, .. }) if *m == machine
        ));
    }

    #[test]
    fn too_few_coins_changes_nothing() {
        let config = GameConfig::new();
        let (mut world, _, player, machine) = setup(1);

        let outcome =
            use_gochapon_machine(&mut world, GameEnv::with_config(&config), player, machine)
                .unwrap();

        assert_eq!(outcome, ActionOutcome::Rejected(Rejection::InsufficientCoins));
        assert_eq!(world.entity(player).unwrap().coins(), Some(1));
        assert_eq!(world.entity(player).unwrap().action_ticks(), None);
    }

    #[test]
    fn surrounded_machine_refuses() {
        let config = GameConfig::new();
        let (mut world, level, player, machine) = setup(9);
        for (x, y) in [(1, 0), (2, 1), (1, 2)] {
            let wall = world.create_entity(templates::wall());
            world
                .add_entity_to_level(wall, level, Position::new(x, y))
                .unwrap();
        }

        let outcome =
            use_gochapon_machine(&mut world, GameEnv::with_config(&config), player, machine)
                .unwrap();

        assert_eq!(outcome, ActionOutcome::Rejected(Rejection::NoFreeTile));
        assert_eq!(world.entity(player).unwrap().coins(), Some(9));
    }
}
