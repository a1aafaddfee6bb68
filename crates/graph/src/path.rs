//! Turning search results into routes.

use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::search::SearchResults;

/// Walks parent links back from `goal` to `start`.
///
/// The returned path excludes `start` and ends with `goal`; it is empty when
/// `start == goal`.
///
/// # Errors
///
/// - [`GraphError::MissingResult`] if a node on the way has no entry (for
///   example `goal` was never discovered).
/// - [`GraphError::MissingParent`] if a root other than `start` is reached.
pub fn resolve_path<N>(start: N, goal: N, results: &SearchResults<N>) -> Result<Vec<N>, GraphError>
where
    N: Copy + Eq + Hash,
{
    let mut path = Vec::new();
    let mut current = goal;

    while current != start {
        path.push(current);
        let result = results.get(current).ok_or(GraphError::MissingResult)?;
        current = result.parent.ok_or(GraphError::MissingParent)?;
    }

    path.reverse();
    Ok(path)
}

/// Greedy descent along a precomputed distance field.
///
/// Starting at `start`, repeatedly steps to the first neighbour whose
/// distance is strictly smaller than the current one. Stops at a local
/// minimum or once the path holds `maximum_length` nodes. The returned path
/// includes `start`.
///
/// # Errors
///
/// Returns [`GraphError::MissingResult`] if a visited node has no distance.
pub fn roll_downhill<N, D>(
    graph: &Graph<N, D>,
    results: &SearchResults<N>,
    start: N,
    maximum_length: Option<usize>,
) -> Result<Vec<N>, GraphError>
where
    N: Copy + Eq + Hash,
{
    let limit = maximum_length.unwrap_or(usize::MAX);
    let mut path = vec![start];
    let mut current = start;

    while path.len() < limit {
        let current_distance = results
            .distance(current)
            .ok_or(GraphError::MissingResult)?;

        let next = graph.neighbours(current).find(|&neighbour| {
            results
                .distance(neighbour)
                .is_some_and(|distance| distance < current_distance)
        });

        match next {
            Some(node) => {
                path.push(node);
                current = node;
            }
            None => break,
        }
    }

    Ok(path)
}
