use std::hash::Hash;

use super::{SearchResult, SearchResults};
use crate::error::GraphError;
use crate::graph::Graph;
use crate::queue::PriorityQueue;

/// Weight applied to the heuristic when ordering the A* frontier.
///
/// Values above 1.0 make the heuristic inadmissible: the search expands
/// fewer nodes and may return a slightly longer path.
pub const A_STAR_INFLATION: f64 = 1.1;

/// Heuristic-guided shortest path from `start` to `goal`.
///
/// Uses [`A_STAR_INFLATION`]. See [`a_star_with_inflation`].
///
/// # Errors
///
/// Returns [`GraphError::StartNotFound`] if `start` is not part of the graph.
pub fn a_star<N, D, H>(
    graph: &Graph<N, D>,
    start: N,
    goal: N,
    heuristic: H,
) -> Result<SearchResults<N>, GraphError>
where
    N: Copy + Eq + Hash,
    H: Fn(N, N) -> f64,
{
    a_star_with_inflation(graph, start, goal, heuristic, A_STAR_INFLATION)
}

/// A* with an explicit heuristic weight.
///
/// Frontier priority is `distance + inflation * heuristic(node, goal)`. The
/// search stops the moment `goal` is popped. With `inflation = 1.0` and an
/// admissible heuristic the resulting path cost is optimal.
///
/// # Errors
///
/// Returns [`GraphError::StartNotFound`] if `start` is not part of the graph.
pub fn a_star_with_inflation<N, D, H>(
    graph: &Graph<N, D>,
    start: N,
    goal: N,
    heuristic: H,
    inflation: f64,
) -> Result<SearchResults<N>, GraphError>
where
    N: Copy + Eq + Hash,
    H: Fn(N, N) -> f64,
{
    if !graph.has_node(start) {
        return Err(GraphError::StartNotFound);
    }

    let mut frontier = PriorityQueue::new();
    let mut results = SearchResults::new();
    frontier.enqueue(start, 0.0);
    results.insert(start, SearchResult::root());

    while let Some(current) = frontier.dequeue() {
        if current == goal {
            break;
        }

        let current_distance = results.distance(current).unwrap_or_default();
        for edge in graph.edges_from(current) {
            let distance = current_distance + edge.weight;
            if results.improves(edge.to, distance) {
                let priority = distance + inflation * heuristic(edge.to, goal);
                frontier.enqueue(edge.to, priority);
                results.insert(
                    edge.to,
                    SearchResult {
                        distance,
                        parent: Some(current),
                    },
                );
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Connectivity, GridPoint, create_grid_graph};

    fn manhattan(a: GridPoint, b: GridPoint) -> f64 {
        f64::from((a.x - b.x).abs() + (a.y - b.y).abs())
    }

    #[test]
    fn finds_goal_on_open_grid() {
        let graph = create_grid_graph(6, 6, Connectivity::Cardinal);
        let goal = GridPoint::new(5, 3);
        let results = a_star(&graph, GridPoint::new(0, 0), goal, manhattan).unwrap();

        assert_eq!(results.distance(goal), Some(8.0));
    }

    #[test]
    fn explores_less_than_full_grid() {
        let graph = create_grid_graph(20, 20, Connectivity::Cardinal);
        let results = a_star(
            &graph,
            GridPoint::new(0, 0),
            GridPoint::new(3, 0),
            manhattan,
        )
        .unwrap();

        assert!(results.len() < 400);
    }

    #[test]
    fn routes_around_removed_nodes() {
        let mut graph = create_grid_graph(3, 3, Connectivity::Cardinal);
        graph.remove_node(GridPoint::new(1, 0));
        graph.remove_node(GridPoint::new(1, 1));
        let goal = GridPoint::new(2, 0);

        let results = a_star(&graph, GridPoint::new(0, 0), goal, manhattan).unwrap();

        assert_eq!(results.distance(goal), Some(6.0));
    }
}
