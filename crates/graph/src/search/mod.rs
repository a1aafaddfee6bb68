//! Graph search algorithms and their shared result types.
//!
//! Every search returns a [`SearchResults`] map: for each discovered node the
//! cumulative distance from the nearest start and the node it was reached
//! from. Start nodes have no parent. Feed the map to
//! [`resolve_path`](crate::resolve_path) to turn it into a route.

mod a_star;
mod breadth_first;
mod dijkstra;
mod flood_fill;

pub use a_star::{A_STAR_INFLATION, a_star, a_star_with_inflation};
pub use breadth_first::breadth_first_search;
pub use dijkstra::dijkstra;
pub use flood_fill::flood_fill;

use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;

/// Search outcome for a single node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult<N> {
    /// Cumulative edge weight from the nearest start node.
    pub distance: f64,
    /// Node this one was reached from; `None` for a start node.
    pub parent: Option<N>,
}

impl<N> SearchResult<N> {
    pub const fn root() -> Self {
        Self {
            distance: 0.0,
            parent: None,
        }
    }

    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Search results keyed by node.
///
/// Partial by design: a search that stops early only holds entries for the
/// nodes it discovered before stopping.
#[derive(Clone, Debug)]
pub struct SearchResults<N> {
    entries: HashMap<N, SearchResult<N>>,
}

impl<N> Default for SearchResults<N> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<N> SearchResults<N>
where
    N: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node: N) -> Option<&SearchResult<N>> {
        self.entries.get(&node)
    }

    pub fn contains(&self, node: N) -> bool {
        self.entries.contains_key(&node)
    }

    pub fn distance(&self, node: N) -> Option<f64> {
        self.entries.get(&node).map(|result| result.distance)
    }

    pub fn parent(&self, node: N) -> Option<N> {
        self.entries.get(&node).and_then(|result| result.parent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, N, SearchResult<N>> {
        self.entries.iter()
    }

    /// Records `result` for `node`, replacing any previous entry.
    pub fn insert(&mut self, node: N, result: SearchResult<N>) {
        self.entries.insert(node, result);
    }

    /// True when `node` has no entry yet or `distance` is strictly shorter.
    ///
    /// Ties keep the earlier result.
    pub fn improves(&self, node: N, distance: f64) -> bool {
        self.entries
            .get(&node)
            .is_none_or(|existing| distance < existing.distance)
    }
}

/// Termination condition for [`breadth_first_search`].
pub enum Goal<'a, N> {
    /// Stop once this node is popped from the frontier.
    Node(N),
    /// Stop at the first popped node satisfying the predicate.
    Matching(&'a dyn Fn(N) -> bool),
    /// Explore everything reachable.
    Exhaustive,
}

impl<N: Copy + Eq> Goal<'_, N> {
    fn is_reached(&self, node: N) -> bool {
        match self {
            Goal::Node(goal) => *goal == node,
            Goal::Matching(predicate) => predicate(node),
            Goal::Exhaustive => false,
        }
    }
}
