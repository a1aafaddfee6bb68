//! Graph snapshots derived from a level's tile layout.
//!
//! A [`LevelGraph`] is rebuilt whenever a decision needs one; it is never
//! kept in sync with the world incrementally.

use std::collections::HashMap;

use grid_graph::{Connectivity, Graph};

use crate::state::{Entity, LevelId, Position, TileId, World, WorldError};

/// Tile graph of one level plus the tile positions the heuristic needs.
#[derive(Clone, Debug)]
pub struct LevelGraph {
    level: LevelId,
    graph: Graph<TileId>,
    positions: HashMap<TileId, Position>,
}

impl LevelGraph {
    /// Connects every tile of `level` to the neighbours `connectivity` allows.
    ///
    /// All tiles are added as nodes before any edge, in `x` then `y` order.
    pub fn build(
        world: &World,
        level: LevelId,
        connectivity: Connectivity,
    ) -> Result<Self, WorldError> {
        let layout = world.level(level)?;
        let mut graph = Graph::new();
        let mut positions = HashMap::with_capacity(layout.tile_count());

        for tile in layout.tile_ids() {
            graph.add_node(tile);
            positions.insert(tile, world.tile(tile)?.position);
        }

        for tile in layout.tile_ids() {
            let position = positions[&tile];
            for &direction in connectivity.directions() {
                if let Some(neighbour) = layout.tile_at(position + direction) {
                    graph.add_edge(tile, neighbour, grid_graph::DEFAULT_WEIGHT);
                }
            }
        }

        Ok(Self {
            level,
            graph,
            positions,
        })
    }

    /// Like [`build`](Self::build), then drops every tile holding an entity
    /// for which `blocks` returns true.
    pub fn build_excluding(
        world: &World,
        level: LevelId,
        connectivity: Connectivity,
        blocks: impl Fn(&Entity) -> bool,
    ) -> Result<Self, WorldError> {
        let mut built = Self::build(world, level, connectivity)?;

        let mut blocked = Vec::new();
        for &tile in built.graph.nodes() {
            if world.entities_on_tile(tile, &[])?.into_iter().any(&blocks) {
                blocked.push(tile);
            }
        }
        for tile in blocked {
            built.graph.remove_node(tile);
            built.positions.remove(&tile);
        }

        Ok(built)
    }

    /// The live graph used for AI decisions: tiles with solid non-actors are
    /// removed, tiles with actors stay so they can be targeted.
    pub fn playable(
        world: &World,
        level: LevelId,
        connectivity: Connectivity,
    ) -> Result<Self, WorldError> {
        Self::build_excluding(world, level, connectivity, Entity::is_obstacle)
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    pub fn graph(&self) -> &Graph<TileId> {
        &self.graph
    }

    pub fn contains(&self, tile: TileId) -> bool {
        self.graph.has_node(tile)
    }

    pub fn position(&self, tile: TileId) -> Option<Position> {
        self.positions.get(&tile).copied()
    }

    /// Manhattan distance between two tiles of this graph.
    pub fn manhattan(&self, from: TileId, to: TileId) -> f64 {
        match (self.position(from), self.position(to)) {
            (Some(a), Some(b)) => f64::from(a.manhattan_distance(b)),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Attributes, attr};

    fn wall(world: &mut World, level: LevelId, x: i32, y: i32) {
        let id = world.create_entity(Attributes::new().with(attr::IS_SOLID, true));
        world
            .add_entity_to_level(id, level, Position::new(x, y))
            .unwrap();
    }

    #[test]
    fn full_grid_matches_layout() {
        let mut world = World::new();
        let level = world.create_grid_level(3, 3);

        let graph = LevelGraph::build(&world, level, Connectivity::Cardinal).unwrap();

        assert_eq!(graph.graph().node_count(), 9);
        assert_eq!(graph.graph().edge_count(), 24);
    }

    #[test]
    fn walls_are_removed_but_actors_stay() {
        let mut world = World::new();
        let level = world.create_grid_level(3, 3);
        wall(&mut world, level, 1, 1);
        let actor = world.create_entity(
            Attributes::new()
                .with(attr::IS_SOLID, true)
                .with(attr::IS_ACTOR, true),
        );
        world
            .add_entity_to_level(actor, level, Position::new(2, 2))
            .unwrap();

        let graph = LevelGraph::playable(&world, level, Connectivity::Cardinal).unwrap();
        let centre = world.find_tile_in_level(level, Position::new(1, 1)).unwrap();
        let corner = world.find_tile_in_level(level, Position::new(2, 2)).unwrap();

        assert!(!graph.contains(centre));
        assert!(graph.contains(corner));
        assert!(graph.graph().edges().iter().all(|edge| edge.to != centre));
    }

    #[test]
    fn manhattan_uses_tile_positions() {
        let mut world = World::new();
        let level = world.create_grid_level(4, 4);
        let graph = LevelGraph::build(&world, level, Connectivity::Principal).unwrap();
        let a = world.find_tile_in_level(level, Position::new(0, 0)).unwrap();
        let b = world.find_tile_in_level(level, Position::new(3, 2)).unwrap();

        assert_eq!(graph.manhattan(a, b), 5.0);
    }
}
