//! Authoritative world state.
//!
//! Entities, tiles and levels live in id-indexed arenas owned by [`World`].
//! Cross references (tile to entity, entity to level) are plain ids resolved
//! through the arenas, so there are no owning cycles. Every lookup of an id
//! that is not in its arena fails with a [`WorldError`].
mod error;
mod events;
mod store;
pub mod types;

pub use error::WorldError;
pub use events::{EventLog, GameEvent};
pub use store::EntityStore;
pub use types::{
    ActorView, Attributes, Entity, EntityId, Health, ItemKind, ItemPool, Level, LevelId, Position,
    Tile, TileId, Value, attr,
};

use grid_graph::Direction;

use crate::query::Query;

/// Entity, tile and level arenas plus turn bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct World {
    entities: EntityStore,
    tiles: Vec<Tile>,
    levels: Vec<Level>,
    current_level: Option<LevelId>,

    /// Action sequence number; combined with the game seed for random rolls.
    nonce: u64,

    /// Shared bag that gochapon machines and rerolls draw from.
    pub item_pool: ItemPool,

    events: EventLog,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    pub fn create_entity(&mut self, attributes: Attributes) -> EntityId {
        self.entities.create(attributes)
    }

    /// Removes the entity from its level (if any) and then from the store.
    pub fn delete_entity(&mut self, id: EntityId) -> Result<Entity, WorldError> {
        self.remove_entity_from_level(id)?;
        self.entities.remove(id)
    }

    pub fn entity(&self, id: EntityId) -> Result<&Entity, WorldError> {
        self.entities.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, WorldError> {
        self.entities.get_mut(id)
    }

    /// Entities whose `name` attribute is truthy, or equal to `value` when given.
    pub fn find_entities_with_attribute(&self, name: &str, value: Option<Value>) -> Vec<EntityId> {
        let query = match value {
            Some(value) => Query::new().equals(name, value),
            None => Query::new().filter(name, true),
        };
        query.find(self.entities.iter()).map(|entity| entity.id).collect()
    }

    // ------------------------------------------------------------------
    // Tiles and levels
    // ------------------------------------------------------------------

    pub fn create_level(&mut self) -> LevelId {
        let id = LevelId(self.levels.len() as u32);
        self.levels.push(Level::new(id));
        id
    }

    pub fn level(&self, id: LevelId) -> Result<&Level, WorldError> {
        self.levels
            .get(id.0 as usize)
            .ok_or(WorldError::LevelNotFound(id))
    }

    fn level_mut(&mut self, id: LevelId) -> Result<&mut Level, WorldError> {
        self.levels
            .get_mut(id.0 as usize)
            .ok_or(WorldError::LevelNotFound(id))
    }

    pub fn create_tile(&mut self, position: Position) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push(Tile::new(id, position));
        id
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile, WorldError> {
        self.tiles
            .get(id.0 as usize)
            .ok_or(WorldError::TileNotFound(id))
    }

    fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile, WorldError> {
        self.tiles
            .get_mut(id.0 as usize)
            .ok_or(WorldError::TileNotFound(id))
    }

    /// Registers `tile` in `level` at the tile's own position.
    pub fn add_tile_to_level(&mut self, level: LevelId, tile: TileId) -> Result<(), WorldError> {
        let position = self.tile(tile)?.position;
        self.level_mut(level)?.insert_tile(position, tile);
        Ok(())
    }

    pub fn current_level(&self) -> Option<LevelId> {
        self.current_level
    }

    pub fn set_current_level(&mut self, level: LevelId) -> Result<(), WorldError> {
        self.level(level)?;
        self.current_level = Some(level);
        Ok(())
    }

    pub fn does_position_exist_in_level(
        &self,
        level: LevelId,
        position: Position,
    ) -> Result<bool, WorldError> {
        Ok(self.level(level)?.contains_position(position))
    }

    pub fn find_tile_in_level(
        &self,
        level: LevelId,
        position: Position,
    ) -> Result<TileId, WorldError> {
        self.level(level)?
            .tile_at(position)
            .ok_or(WorldError::PositionNotInLevel { level, position })
    }

    /// Tiles of the level, ordered by `x` then `y`.
    pub fn tiles_in_level(&self, level: LevelId) -> Result<Vec<TileId>, WorldError> {
        Ok(self.level(level)?.tile_ids().collect())
    }

    /// Tiles of the level that hold no entity at all.
    pub fn free_tiles_in_level(&self, level: LevelId) -> Result<Vec<TileId>, WorldError> {
        let mut free = Vec::new();
        for tile in self.level(level)?.tile_ids() {
            if self.tile(tile)?.is_empty() {
                free.push(tile);
            }
        }
        Ok(free)
    }

    /// Tiles that exist at `position + direction`, in direction order.
    pub fn find_surrounding_tiles(
        &self,
        level: LevelId,
        position: Position,
        directions: &[Direction],
    ) -> Result<Vec<TileId>, WorldError> {
        let level = self.level(level)?;
        Ok(directions
            .iter()
            .filter_map(|&direction| level.tile_at(position + direction))
            .collect())
    }

    /// Entities standing on `tile`, skipping the ids in `exclude`.
    pub fn entities_on_tile(
        &self,
        tile: TileId,
        exclude: &[EntityId],
    ) -> Result<Vec<&Entity>, WorldError> {
        self.tile(tile)?
            .entities
            .iter()
            .filter(|id| !exclude.contains(id))
            .map(|&id| self.entity(id))
            .collect()
    }

    /// Tile the entity currently stands on, if it is placed in a level.
    pub fn tile_of_entity(&self, id: EntityId) -> Result<Option<TileId>, WorldError> {
        let entity = self.entity(id)?;
        match (entity.current_level(), entity.position()) {
            (Some(level), Some(position)) => self.find_tile_in_level(level, position).map(Some),
            _ => Ok(None),
        }
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    pub fn add_entity_to_tile(&mut self, entity: EntityId, tile: TileId) -> Result<(), WorldError> {
        self.entity(entity)?;
        let tile = self.tile_mut(tile)?;
        if !tile.contains(entity) {
            tile.entities.push(entity);
        }
        Ok(())
    }

    pub fn remove_entity_from_tile(
        &mut self,
        entity: EntityId,
        tile: TileId,
    ) -> Result<(), WorldError> {
        self.tile_mut(tile)?.entities.retain(|&id| id != entity);
        Ok(())
    }

    /// Places the entity on `position` in `level`, taking it out of any level
    /// it was in before.
    pub fn add_entity_to_level(
        &mut self,
        entity: EntityId,
        level: LevelId,
        position: Position,
    ) -> Result<(), WorldError> {
        let tile = self.find_tile_in_level(level, position)?;
        self.remove_entity_from_level(entity)?;

        let record = self.entity_mut(entity)?;
        record.set(attr::CURRENT_LEVEL, level);
        record.set(attr::POSITION, position);
        self.add_entity_to_tile(entity, tile)
    }

    pub fn move_entity_to_level(
        &mut self,
        entity: EntityId,
        level: LevelId,
        position: Position,
    ) -> Result<(), WorldError> {
        self.add_entity_to_level(entity, level, position)
    }

    /// Moves the entity within its current level.
    pub fn move_entity_to_position(
        &mut self,
        entity: EntityId,
        position: Position,
    ) -> Result<(), WorldError> {
        let record = self.entity(entity)?;
        let level = record
            .current_level()
            .ok_or(WorldError::NotInLevel(entity))?;
        let previous = record.position();

        let next_tile = self.find_tile_in_level(level, position)?;
        if let Some(previous) = previous {
            let current_tile = self.find_tile_in_level(level, previous)?;
            self.remove_entity_from_tile(entity, current_tile)?;
        }

        self.add_entity_to_tile(entity, next_tile)?;
        self.entity_mut(entity)?.set(attr::POSITION, position);
        Ok(())
    }

    /// Strips placement attributes and takes the entity off its tile.
    ///
    /// The entity stays in the store. Does nothing if it is not placed.
    pub fn remove_entity_from_level(&mut self, entity: EntityId) -> Result<(), WorldError> {
        let Some(tile) = self.tile_of_entity(entity)? else {
            return Ok(());
        };
        self.remove_entity_from_tile(entity, tile)?;

        let record = self.entity_mut(entity)?;
        record.remove(attr::CURRENT_LEVEL);
        record.remove(attr::POSITION);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bookkeeping
    // ------------------------------------------------------------------

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub(crate) fn advance_nonce(&mut self) {
        self.nonce = self.nonce.wrapping_add(1);
    }

    pub fn record(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        self.events.as_slice()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Builds a `width x height` level and makes it current if none is.
    pub fn create_grid_level(&mut self, width: u32, height: u32) -> LevelId {
        let level = self.create_level();
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                let tile = self.create_tile(Position::new(x, y));
                self.levels[level.0 as usize].insert_tile(Position::new(x, y), tile);
            }
        }
        if self.current_level.is_none() {
            self.current_level = Some(level);
        }
        level
    }
}
