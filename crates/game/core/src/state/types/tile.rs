use std::collections::BTreeMap;

use super::{EntityId, LevelId, Position, TileId};

/// A grid cell. Holds ids of the entities standing on it, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub id: TileId,
    pub position: Position,
    pub entities: Vec<EntityId>,
}

impl Tile {
    pub fn new(id: TileId, position: Position) -> Self {
        Self {
            id,
            position,
            entities: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.entities.contains(&entity)
    }
}

/// A level: a sparse `x -> y -> tile` map.
///
/// Columns and rows are ordered, so iterating the tile set visits tiles by
/// `x` first, then `y`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub id: LevelId,
    tile_set: BTreeMap<i32, BTreeMap<i32, TileId>>,
}

impl Level {
    pub fn new(id: LevelId) -> Self {
        Self {
            id,
            tile_set: BTreeMap::new(),
        }
    }

    /// Registers `tile` at `position`, replacing whatever was there.
    pub fn insert_tile(&mut self, position: Position, tile: TileId) {
        self.tile_set
            .entry(position.x)
            .or_default()
            .insert(position.y, tile);
    }

    pub fn tile_at(&self, position: Position) -> Option<TileId> {
        self.tile_set
            .get(&position.x)
            .and_then(|column| column.get(&position.y))
            .copied()
    }

    pub fn contains_position(&self, position: Position) -> bool {
        self.tile_at(position).is_some()
    }

    pub fn tile_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tile_set
            .values()
            .flat_map(|column| column.values().copied())
    }

    pub fn tile_count(&self) -> usize {
        self.tile_set.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_resolve_through_both_lookups() {
        let mut level = Level::new(LevelId(0));
        level.insert_tile(Position::new(2, 1), TileId(7));

        assert_eq!(level.tile_at(Position::new(2, 1)), Some(TileId(7)));
        assert!(!level.contains_position(Position::new(2, 0)));
        assert!(!level.contains_position(Position::new(1, 1)));
    }

    #[test]
    fn tiles_iterate_by_column() {
        let mut level = Level::new(LevelId(0));
        level.insert_tile(Position::new(1, 0), TileId(3));
        level.insert_tile(Position::new(0, 1), TileId(2));
        level.insert_tile(Position::new(0, 0), TileId(1));

        let ids: Vec<_> = level.tile_ids().collect();

        assert_eq!(ids, vec![TileId(1), TileId(2), TileId(3)]);
        assert_eq!(level.tile_count(), 3);
    }
}
