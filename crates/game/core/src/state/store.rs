//! Id-keyed entity arena.

use std::collections::BTreeMap;

use super::error::WorldError;
use super::types::{Attributes, Entity, EntityId};

/// Owns every entity by id. Ids are allocated sequentially and never reused.
///
/// Iteration order is ascending id, which keeps queries and turn order
/// reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityStore {
    entities: BTreeMap<EntityId, Entity>,
    next_id: u32,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, attributes: Attributes) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, Entity::new(id, attributes));
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Result<Entity, WorldError> {
        self.entities
            .remove(&id)
            .ok_or(WorldError::EntityNotFound(id))
    }

    pub fn get(&self, id: EntityId) -> Result<&Entity, WorldError> {
        self.entities.get(&id).ok_or(WorldError::EntityNotFound(id))
    }

    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut Entity, WorldError> {
        self.entities
            .get_mut(&id)
            .ok_or(WorldError::EntityNotFound(id))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
