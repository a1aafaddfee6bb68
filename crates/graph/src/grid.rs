//! Grid helpers: compass directions and grid graph construction.

use crate::graph::{DEFAULT_WEIGHT, Graph};

/// Integer cell coordinate used by [`create_grid_graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one step in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The eight compass directions. North points towards smaller `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// North, east, south, west.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// All eight directions, clockwise from north.
    pub const PRINCIPAL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction whose delta equals `(dx, dy)`, if any.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        Self::PRINCIPAL
            .into_iter()
            .find(|direction| direction.delta() == (dx, dy))
    }
}

/// Which neighbours a grid cell connects to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Connectivity {
    /// Four neighbours (N, E, S, W).
    #[default]
    Cardinal,
    /// Eight neighbours including diagonals.
    Principal,
}

impl Connectivity {
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Connectivity::Cardinal => &Direction::CARDINAL,
            Connectivity::Principal => &Direction::PRINCIPAL,
        }
    }
}

/// Builds a `width × height` grid with unit-weight edges between neighbours.
///
/// Every cell becomes a node before any edge is added. Cells are added
/// column by column (all `y` for `x = 0`, then `x = 1`, ...).
pub fn create_grid_graph(width: u32, height: u32, connectivity: Connectivity) -> Graph<GridPoint> {
    let mut graph = Graph::new();
    let contains = |point: GridPoint| {
        point.x >= 0 && point.y >= 0 && (point.x as u32) < width && (point.y as u32) < height
    };

    for x in 0..width as i32 {
        for y in 0..height as i32 {
            graph.add_node(GridPoint::new(x, y));
        }
    }

    for x in 0..width as i32 {
        for y in 0..height as i32 {
            let point = GridPoint::new(x, y);
            for &direction in connectivity.directions() {
                let neighbour = point.step(direction);
                if contains(neighbour) {
                    graph.add_edge(point, neighbour, DEFAULT_WEIGHT);
                }
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_grid_edge_count() {
        let graph = create_grid_graph(3, 3, Connectivity::Cardinal);

        assert_eq!(graph.node_count(), 9);
        // 12 undirected adjacencies, two edges each
        assert_eq!(graph.edge_count(), 24);
    }

    #[test]
    fn principal_grid_connects_diagonals() {
        let graph = create_grid_graph(3, 3, Connectivity::Principal);
        let centre = GridPoint::new(1, 1);

        assert_eq!(graph.neighbours(centre).count(), 8);
        assert!(graph.find_edge(GridPoint::new(0, 0), centre).is_some());
        assert_eq!(graph.neighbours(GridPoint::new(0, 0)).count(), 3);
    }

    #[test]
    fn corner_neighbours_follow_direction_order() {
        let graph = create_grid_graph(2, 2, Connectivity::Cardinal);
        let neighbours: Vec<_> = graph.neighbours(GridPoint::new(0, 0)).collect();

        assert_eq!(neighbours, vec![GridPoint::new(1, 0), GridPoint::new(0, 1)]);
    }

    #[test]
    fn direction_round_trips_through_delta() {
        for direction in Direction::PRINCIPAL {
            let (dx, dy) = direction.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(direction));
        }
        assert_eq!(Direction::from_delta(2, 0), None);
    }
}
