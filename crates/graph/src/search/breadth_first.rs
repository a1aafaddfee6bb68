use std::collections::VecDeque;
use std::hash::Hash;

use super::{Goal, SearchResult, SearchResults};
use crate::error::GraphError;
use crate::graph::Graph;

/// Unweighted shortest-path search from `start`.
///
/// Every hop counts as distance 1. The search stops as soon as the popped
/// node satisfies `goal`, so the results only cover nodes discovered up to
/// that point.
///
/// # Errors
///
/// Returns [`GraphError::StartNotFound`] if `start` is not part of the graph.
pub fn breadth_first_search<N, D>(
    graph: &Graph<N, D>,
    start: N,
    goal: Goal<'_, N>,
) -> Result<SearchResults<N>, GraphError>
where
    N: Copy + Eq + Hash,
{
    if !graph.has_node(start) {
        return Err(GraphError::StartNotFound);
    }

    let mut frontier = VecDeque::from([start]);
    let mut results = SearchResults::new();
    results.insert(start, SearchResult::root());

    while let Some(current) = frontier.pop_front() {
        if goal.is_reached(current) {
            break;
        }

        let distance = results.distance(current).unwrap_or_default() + 1.0;
        for neighbour in graph.neighbours(current) {
            if !results.contains(neighbour) {
                frontier.push_back(neighbour);
                results.insert(
                    neighbour,
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
