//! Errors raised by graph searches and path reconstruction.

/// Failures of the graph layer.
///
/// All variants signal a caller bug (a stale node handle or a result map
/// that does not belong to the queried start). None of them are retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The node a search was asked to start from is not part of the graph.
    #[error("starting node was not found in the graph")]
    StartNotFound,

    /// A node on the walked path has no entry in the search results.
    #[error("missing graph search result for a node on the path")]
    MissingResult,

    /// A root was reached before arriving at the requested start node.
    #[error("search result has no parent link before reaching the start node")]
    MissingParent,
}
