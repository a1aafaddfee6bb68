//! Directed weighted graph over opaque node handles.
//!
//! The graph keeps an explicit node set next to an ordered edge list. Edge
//! lookups are linear scans over that list, which is plenty for the small,
//! fixed-size grids a level produces.

use std::collections::HashSet;
use std::hash::Hash;

/// Default weight used by [`Graph::add_edge`].
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A directed, weighted connection between two nodes.
///
/// Undirected adjacency is modelled as two edges, one in each direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N, D = ()> {
    pub from: N,
    pub to: N,
    pub weight: f64,
    pub data: Option<D>,
}

/// Directed weighted graph.
///
/// # Invariants
///
/// - Removing a node also removes every edge that starts or ends at it, so no
///   edge ever references a removed node.
/// - Duplicate `(from, to)` pairs are not rejected; lookups return the first
///   match in insertion order, so callers should not add the same pair twice.
#[derive(Clone, Debug)]
pub struct Graph<N, D = ()> {
    nodes: Vec<N>,
    members: HashSet<N>,
    edges: Vec<Edge<N, D>>,
}

impl<N, D> Default for Graph<N, D> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            members: HashSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<N, D> Graph<N, D>
where
    N: Copy + Eq + Hash,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the node set. Adding a node twice has no effect.
    pub fn add_node(&mut self, node: N) {
        if self.members.insert(node) {
            self.nodes.push(node);
        }
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, node: N) {
        if self.members.remove(&node) {
            self.nodes.retain(|candidate| *candidate != node);
        }
        self.edges
            .retain(|edge| edge.from != node && edge.to != node);
    }

    /// Returns true if the node was added explicitly or is the endpoint of an edge.
    pub fn has_node(&self, node: N) -> bool {
        self.members.contains(&node)
            || self
                .edges
                .iter()
                .any(|edge| edge.from == node || edge.to == node)
    }

    /// Appends an edge carrying no data.
    ///
    /// Endpoints are not validated; builders add all nodes before any edges.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) {
        self.push_edge(from, to, weight, None);
    }

    /// Appends an edge with an attached payload.
    pub fn add_edge_with_data(&mut self, from: N, to: N, weight: f64, data: D) {
        self.push_edge(from, to, weight, Some(data));
    }

    fn push_edge(&mut self, from: N, to: N, weight: f64, data: Option<D>) {
        debug_assert!(
            weight.is_finite() && weight >= 0.0,
            "edge weights must be finite and non-negative"
        );
        self.edges.push(Edge {
            from,
            to,
            weight,
            data,
        });
    }

    /// Removes the first edge matching `(from, to)` and returns it.
    pub fn remove_edge(&mut self, from: N, to: N) -> Option<Edge<N, D>> {
        let index = self
            .edges
            .iter()
            .position(|edge| edge.from == from && edge.to == to)?;
        Some(self.edges.remove(index))
    }

    /// Returns the first edge matching `(from, to)`.
    pub fn find_edge(&self, from: N, to: N) -> Option<&Edge<N, D>> {
        self.edges
            .iter()
            .find(|edge| edge.from == from && edge.to == to)
    }

    /// Outgoing edges of `node`, in insertion order.
    pub fn edges_from(&self, node: N) -> impl Iterator<Item = &Edge<N, D>> + '_ {
        self.edges.iter().filter(move |edge| edge.from == node)
    }

    /// Incoming edges of `node`, in insertion order.
    pub fn edges_to(&self, node: N) -> impl Iterator<Item = &Edge<N, D>> + '_ {
        self.edges.iter().filter(move |edge| edge.to == node)
    }

    /// Targets of every outgoing edge of `node`.
    pub fn neighbours(&self, node: N) -> impl Iterator<Item = N> + '_ {
        self.edges_from(node).map(|edge| edge.to)
    }

    /// Explicitly added nodes, in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge<N, D>] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
