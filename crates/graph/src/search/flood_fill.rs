use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::Graph;

/// Collects every node reachable from `start`, ignoring edge weights.
///
/// Nodes are returned in breadth-first discovery order, starting with `start`.
///
/// # Errors
///
/// Returns [`GraphError::StartNotFound`] if `start` is not part of the graph.
pub fn flood_fill<N, D>(graph: &Graph<N, D>, start: N) -> Result<Vec<N>, GraphError>
where
    N: Copy + Eq + Hash,
{
    if !graph.has_node(start) {
        return Err(GraphError::StartNotFound);
    }

    let mut frontier = VecDeque::from([start]);
    let mut seen = HashSet::from([start]);
    let mut visited = vec![start];

    while let Some(current) = frontier.pop_front() {
        for neighbour in graph.neighbours(current) {
            if seen.insert(neighbour) {
                frontier.push_back(neighbour);
                visited.push(neighbour);
            }
        }
    }

    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Connectivity, GridPoint, create_grid_graph};

    #[test]
    fn reaches_whole_connected_grid() {
        let graph = create_grid_graph(4, 3, Connectivity::Cardinal);
        let visited = flood_fill(&graph, GridPoint::new(0, 0)).unwrap();

        assert_eq!(visited.len(), 12);
        assert_eq!(visited[0], GridPoint::new(0, 0));
    }

    #[test]
    fn skips_isolated_node() {
        let mut graph = create_grid_graph(3, 3, Connectivity::Cardinal);
        let isolated = GridPoint::new(1, 1);
        let touching: Vec<_> = graph
            .edges()
            .iter()
            .filter(|edge| edge.from == isolated || edge.to == isolated)
            .map(|edge| (edge.from, edge.to))
            .collect();
        for (from, to) in touching {
            graph.remove_edge(from, to);
        }

        let visited = flood_fill(&graph, GridPoint::new(0, 0)).unwrap();

        assert_eq!(visited.len(), 8);
        assert!(!visited.contains(&isolated));
    }

    #[test]
    fn fails_for_unknown_start() {
        let graph = create_grid_graph(2, 2, Connectivity::Cardinal);

        assert_eq!(
            flood_fill(&graph, GridPoint::new(5, 5)),
            Err(GraphError::StartNotFound)
        );
    }
}
