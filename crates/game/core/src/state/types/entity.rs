use std::collections::BTreeMap;
use std::collections::btree_map;

use super::{EntityId, Health, LevelId, Position, Value};

/// Well-known attribute names.
///
/// Entities are schemaless, but the rules only ever look at this vocabulary.
pub mod attr {
    pub const NAME: &str = "name";
    pub const TITLE: &str = "title";
    pub const SPRITE: &str = "sprite";

    pub const POSITION: &str = "position";
    pub const CURRENT_LEVEL: &str = "current_level";

    pub const HEALTH: &str = "health";
    pub const HIDE_HEALTH: &str = "hide_health";
    pub const IS_SOLID: &str = "is_solid";
    pub const IS_ACTOR: &str = "is_actor";
    pub const IS_PLAYER: &str = "is_player";
    pub const IS_NON_PLAYER: &str = "is_non_player";
    pub const IS_ENEMY: &str = "is_enemy";
    pub const ACTION_TICKS: &str = "action_ticks";
    pub const ACTION_COST: &str = "action_cost";

    pub const COINS: &str = "coins";
    pub const INVENTORY: &str = "inventory";
    pub const HELD_ITEM: &str = "held_item";

    pub const IS_PILE_OF_COINS: &str = "is_pile_of_coins";
    pub const AMOUNT: &str = "amount";

    pub const IS_ITEM: &str = "is_item";
    pub const ITEM_KIND: &str = "item_kind";
    pub const EFFECT_DESCRIPTION: &str = "effect_description";
    pub const COST: &str = "cost";

    pub const IS_GOCHAPON_MACHINE: &str = "is_gochapon_machine";
    pub const IS_ENTRANCE: &str = "is_entrance";
    pub const IS_EXIT: &str = "is_exit";
}

/// Named attribute bag, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes(BTreeMap<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.0.get_mut(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.to_owned(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An entity record: an id plus its attributes.
///
/// The typed accessors return `None` both when the attribute is missing and
/// when it holds a different variant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub attributes: Attributes,
}

impl Entity {
    pub fn new(id: EntityId, attributes: Attributes) -> Self {
        Self { id, attributes }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.attributes.set(name, value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// True when the attribute is present with a truthy value.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(Value::is_truthy)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    pub fn position(&self) -> Option<Position> {
        self.get(attr::POSITION).and_then(Value::as_position)
    }

    pub fn current_level(&self) -> Option<LevelId> {
        self.get(attr::CURRENT_LEVEL).and_then(Value::as_level)
    }

    pub fn health(&self) -> Option<Health> {
        self.get(attr::HEALTH).and_then(Value::as_health)
    }

    pub fn has_health(&self) -> bool {
        self.has(attr::HEALTH)
    }

    pub fn is_solid(&self) -> bool {
        self.flag(attr::IS_SOLID)
    }

    pub fn is_actor(&self) -> bool {
        self.flag(attr::IS_ACTOR)
    }

    pub fn is_player(&self) -> bool {
        self.flag(attr::IS_PLAYER)
    }

    pub fn is_enemy(&self) -> bool {
        self.flag(attr::IS_ENEMY)
    }

    /// Solid and not an actor: walls, furniture, machines, eggs.
    pub fn is_obstacle(&self) -> bool {
        self.is_solid() && !self.is_actor()
    }

    pub fn action_ticks(&self) -> Option<i64> {
        self.int(attr::ACTION_TICKS)
    }

    pub fn action_cost(&self) -> Option<i64> {
        self.int(attr::ACTION_COST)
    }

    pub fn coins(&self) -> Option<i64> {
        self.int(attr::COINS)
    }

    pub fn inventory(&self) -> Option<&[EntityId]> {
        self.get(attr::INVENTORY).and_then(Value::as_entities)
    }

    pub fn held_item(&self) -> Option<EntityId> {
        self.get(attr::HELD_ITEM).and_then(Value::as_entity)
    }

    /// Actor capability view, if this entity is an actor with health.
    pub fn as_actor(&self) -> Option<ActorView<'_>> {
        if !self.is_actor() {
            return None;
        }
        let health = self.health()?;
        Some(ActorView {
            entity: self,
            health,
        })
    }
}

/// Read-only view over an entity that can take turns.
#[derive(Clone, Copy, Debug)]
pub struct ActorView<'a> {
    entity: &'a Entity,
    health: Health,
}

impl<'a> ActorView<'a> {
    pub fn id(&self) -> EntityId {
        self.entity.id
    }

    pub fn entity(&self) -> &'a Entity {
        self.entity
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn is_player(&self) -> bool {
        self.entity.is_player()
    }

    pub fn is_enemy(&self) -> bool {
        self.entity.is_enemy()
    }

    pub fn position(&self) -> Option<Position> {
        self.entity.position()
    }

    /// Whether `other` belongs to the opposing faction.
    pub fn opposes(&self, other: &Entity) -> bool {
        other.is_actor() && other.has_health() && other.is_enemy() != self.is_enemy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frog() -> Entity {
        Entity::new(
            EntityId(4),
            Attributes::new()
                .with(attr::IS_ACTOR, true)
                .with(attr::IS_ENEMY, true)
                .with(attr::IS_SOLID, true)
                .with(attr::HEALTH, Health::full(3)),
        )
    }

    #[test]
    fn flags_use_truthiness() {
        let mut entity = frog();
        entity.set(attr::COINS, 0);

        assert!(entity.is_solid());
        assert!(!entity.flag(attr::COINS));
        assert!(!entity.flag(attr::IS_PLAYER));
        assert!(!entity.is_obstacle());
    }

    #[test]
    fn actor_view_requires_health() {
        let mut entity = frog();
        assert!(entity.as_actor().is_some());

        entity.remove(attr::HEALTH);
        assert!(entity.as_actor().is_none());
    }

    #[test]
    fn opposition_compares_enemy_flags() {
        let entity = frog();
        let actor = entity.as_actor().unwrap();
        let player = Entity::new(
            EntityId(1),
            Attributes::new()
                .with(attr::IS_ACTOR, true)
                .with(attr::IS_ENEMY, false)
                .with(attr::HEALTH, Health::full(5)),
        );

        assert!(actor.opposes(&player));
        assert!(!actor.opposes(&entity));
    }
}
