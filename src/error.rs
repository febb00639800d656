//! Error types for Hamiltonian path search.

use thiserror::Error;

/// Result alias used across the crate.
pub type HamPathResult<T> = Result<T, HamPathError>;

/// Everything that can go wrong between receiving a graph and reporting
/// a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HamPathError {
    /// An edge endpoint does not address a node of the graph.
    #[error("invalid graph: edge #{edge} {reason}")]
    InvalidGraph {
        /// Zero-based position of the offending edge in the input list.
        edge: usize,
        /// What is wrong with the endpoint.
        reason: String,
    },

    /// Every attempt in the search budget produced an incomplete route.
    #[error("no Hamiltonian path found after {attempts} attempts")]
    NoCompleteRoute {
        /// Number of route constructions that were evaluated.
        attempts: usize,
    },

    /// Cancellation or the time limit stopped the run before any complete
    /// route was found. Says nothing about whether a path exists.
    #[error("search interrupted after {attempts} attempts without a complete route")]
    SearchInterrupted {
        /// Number of route constructions evaluated before the stop.
        attempts: usize,
    },

    /// The search configuration was rejected by [`AcoConfig::validate`].
    ///
    /// [`AcoConfig::validate`]: crate::aco::AcoConfig::validate
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
