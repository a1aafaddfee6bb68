//! Attribute bundles for every entity the rules know how to spawn.

use crate::state::{Attributes, EntityId, Health, ItemKind, attr};

pub const PLAYER_HEALTH: i32 = 5;
pub const PLAYER_COINS: i64 = 99;
pub const GOCHAPON_COST: i64 = 2;

pub const EGG_SPRITES: [&str; 6] = [
    "gochapon-egg-1",
    "gochapon-egg-2",
    "gochapon-egg-3",
    "gochapon-egg-4",
    "gochapon-egg-5",
    "gochapon-egg-6",
];

pub fn player() -> Attributes {
    Attributes::new()
        .with(attr::SPRITE, "hoarder")
        .with(attr::IS_ACTOR, true)
        .with(attr::IS_PLAYER, true)
        .with(attr::IS_ENEMY, false)
        .with(attr::IS_SOLID, true)
        .with(attr::ACTION_COST, 100)
        .with(attr::HEALTH, Health::full(PLAYER_HEALTH))
        .with(attr::INVENTORY, Vec::<EntityId>::new())
        .with(attr::COINS, PLAYER_COINS)
}

fn non_player(sprite: &str, is_enemy: bool, health: i32, coins: i64) -> Attributes {
    Attributes::new()
        .with(attr::SPRITE, sprite)
        .with(attr::IS_ACTOR, true)
        .with(attr::IS_NON_PLAYER, true)
        .with(attr::IS_ENEMY, is_enemy)
        .with(attr::IS_SOLID, true)
        .with(attr::HEALTH, Health::full(health))
        .with(attr::ACTION_COST, 100)
        .with(attr::COINS, coins)
}

pub fn frog(is_enemy: bool) -> Attributes {
    non_player("frog", is_enemy, 3, 3)
}

pub fn hornet(is_enemy: bool) -> Attributes {
    non_player("hornet", is_enemy, 1, 1)
}

pub fn gochapon_machine() -> Attributes {
    Attributes::new()
        .with(attr::IS_GOCHAPON_MACHINE, true)
        .with(attr::SPRITE, "gochapon-machine")
        .with(attr::IS_SOLID, true)
        .with(attr::COST, GOCHAPON_COST)
}

/// Breakable egg holding `item` until it dies.
pub fn gochapon_egg(item: EntityId, sprite: &str) -> Attributes {
    Attributes::new()
        .with(attr::SPRITE, sprite)
        .with(attr::IS_SOLID, true)
        .with(attr::HEALTH, Health::full(1))
        .with(attr::HIDE_HEALTH, true)
        .with(attr::HELD_ITEM, item)
}

pub fn pile_of_coins(amount: i64) -> Attributes {
    Attributes::new()
        .with(attr::IS_PILE_OF_COINS, true)
        .with(attr::SPRITE, coin_sprite(amount))
        .with(attr::AMOUNT, amount)
}

pub fn coin_sprite(amount: i64) -> &'static str {
    match amount {
        1 => "single-coin",
        2 => "two-coins",
        3 => "three-coins",
        _ => "four-coins",
    }
}

pub fn item(kind: ItemKind) -> Attributes {
    Attributes::new()
        .with(attr::IS_ITEM, true)
        .with(attr::ITEM_KIND, kind.as_ref())
        .with(attr::SPRITE, kind.sprite())
        .with(attr::NAME, kind.title())
        .with(attr::EFFECT_DESCRIPTION, kind.effect_description())
        .with(attr::COST, kind.cost())
}

pub fn wall() -> Attributes {
    Attributes::new()
        .with(attr::SPRITE, "wall")
        .with(attr::IS_SOLID, true)
}

pub fn entrance() -> Attributes {
    Attributes::new()
        .with(attr::SPRITE, "entrance")
        .with(attr::IS_ENTRANCE, true)
}

pub fn exit() -> Attributes {
    Attributes::new()
        .with(attr::SPRITE, "exit")
        .with(attr::IS_EXIT, true)
}
