use std::hash::Hash;

use super::{SearchResult, SearchResults};
use crate::error::GraphError;
use crate::graph::Graph;
use crate::queue::PriorityQueue;

/// Weighted shortest paths from one or more start nodes.
///
/// Each start is seeded with distance 0 and no parent, so the result is a
/// distance field towards the nearest start. When `goal` is given the search
/// stops as soon as it is popped from the frontier.
///
/// # Errors
///
/// Returns [`GraphError::StartNotFound`] if any start is not part of the graph.
pub fn dijkstra<N, D, I>(
    graph: &Graph<N, D>,
    starts: I,
    goal: Option<N>,
) -> Result<SearchResults<N>, GraphError>
where
    N: Copy + Eq + Hash,
    I: IntoIterator<Item = N>,
{
    let mut frontier = PriorityQueue::new();
    let mut results = SearchResults::new();

    for start in starts {
        if !graph.has_node(start) {
            return Err(GraphError::StartNotFound);
        }
        frontier.enqueue(start, 0.0);
        results.insert(start, SearchResult::root());
    }

    while let Some(current) = frontier.dequeue() {
        if goal == Some(current) {
            break;
        }

        let current_distance = results.distance(current).unwrap_or_default();
        for edge in graph.edges_from(current) {
            let distance = current_distance + edge.weight;
            if results.improves(edge.to, distance) {
                frontier.enqueue(edge.to, distance);
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
