//! Request/response boundary for hosting the search behind an API.
//!
//! The HTTP layer deserializes a [`ShortestPathRequest`], calls
//! [`shortest_path`] and turns a [`ServiceError`] into a client-visible
//! failure using its `status` and `detail`.

use std::fmt;

use crate::aco::{AcoConfig, AcoRunner, PathResult};
use crate::error::HamPathError;
use crate::graph::Graph;

/// Message returned when no complete route exists within the budget.
pub const NO_PATH_DETAIL: &str = "No Hamiltonian path found";

/// Graph payload as received from clients.
///
/// `edges` are 1-based positions into `nodes`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathRequest<L> {
    pub nodes: Vec<L>,
    pub edges: Vec<(usize, usize)>,
}

/// Opaque node label: JSON integers and strings both work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NodeLabel {
    Int(i64),
    Text(String),
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Int(v) => write!(f, "{v}"),
            NodeLabel::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeLabel {
    fn from(v: i64) -> Self {
        NodeLabel::Int(v)
    }
}

impl From<&str> for NodeLabel {
    fn from(s: &str) -> Self {
        NodeLabel::Text(s.to_owned())
    }
}

/// A failure ready to be sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceError {
    /// HTTP status code.
    pub status: u16,
    /// Human-readable detail.
    pub detail: String,
}

impl From<HamPathError> for ServiceError {
    fn from(err: HamPathError) -> Self {
        match err {
            HamPathError::NoCompleteRoute { .. } => ServiceError {
                status: 400,
                detail: NO_PATH_DETAIL.to_owned(),
            },
            HamPathError::InvalidGraph { .. } => ServiceError {
                status: 422,
                detail: err.to_string(),
            },
            HamPathError::SearchInterrupted { .. } => ServiceError {
                status: 503,
                detail: err.to_string(),
            },
            HamPathError::InvalidConfig(_) => ServiceError {
                status: 500,
                detail: err.to_string(),
            },
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.detail)
    }
}

impl std::error::Error for ServiceError {}

/// Validates the payload, runs the search and returns the best path.
///
/// # Errors
///
/// - 400 with [`NO_PATH_DETAIL`] when no complete route was found
/// - 422 when an edge does not address a node
/// - 503 when the time limit stopped the search before any route was found
/// - 500 when `config` is invalid
pub fn shortest_path<L: Clone + fmt::Debug>(
    request: ShortestPathRequest<L>,
    config: &AcoConfig,
) -> Result<PathResult<L>, ServiceError> {
    tracing::info!(
        nodes = request.nodes.len(),
        edges = request.edges.len(),
        "shortest path requested"
    );

    let graph = Graph::new(request.nodes, &request.edges).map_err(|err| {
        tracing::warn!(error = %err, "rejected graph payload");
        err
    })?;
    let result = AcoRunner::search(&graph, config)?;

    Ok(result.into_path()?)
}
