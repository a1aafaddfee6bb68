//! Directed weighted graph and search algorithms for tile-based games.
//!
//! Nodes are opaque handles: the graph never looks inside them, it only
//! compares them for identity. In a tactics game a node is usually a tile
//! id, but anything `Copy + Eq + Hash` works.
//!
//! - [`Graph`]: node set plus an ordered edge list
//! - [`PriorityQueue`]: stable min-priority frontier
//! - [`grid`]: helpers for building 4- and 8-connected grids
//! - [`search`]: flood fill, breadth-first search, Dijkstra and A*
//! - [`path`]: path reconstruction and descent along a distance field

pub mod error;
pub mod graph;
pub mod grid;
pub mod path;
pub mod queue;
pub mod search;

pub use error::GraphError;
pub use graph::{DEFAULT_WEIGHT, Edge, Graph};
pub use grid::{Connectivity, Direction, GridPoint, create_grid_graph};
pub use path::{resolve_path, roll_downhill};
pub use queue::PriorityQueue;
pub use search::{
    A_STAR_INFLATION, Goal, SearchResult, SearchResults, a_star, a_star_with_inflation,
    breadth_first_search, dijkstra, flood_fill,
};
