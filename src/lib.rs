//! Hamiltonian path search on undirected, unweighted graphs.
//!
//! - **Graph**: validated node/edge model and its unit-cost distance matrix.
//! - **Ant search (ACO)**: randomized nearest-neighbour walks restarted
//!   `iterations × ants` times, keeping the best complete route.
//! - **Service**: request/response types and HTTP-style error mapping for
//!   hosting the search behind an API.
//!
//! # Architecture
//!
//! The search is a pure function of the graph and a seedable random
//! source. It performs no I/O and keeps no state between runs. Logging
//! goes through `tracing`; install a subscriber in the host to see it.
//!
//! # Example
//!
//! ```
//! use u_hampath::prelude::*;
//!
//! let graph = Graph::new(vec![1, 2, 3], &[(1, 2)]).unwrap();
//! let result = AcoRunner::search(&graph, &AcoConfig::default()).unwrap();
//! assert_eq!(result.outcome, SearchOutcome::NotFound);
//! ```

pub mod aco;
pub mod error;
pub mod graph;
pub mod service;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{HamPathError, HamPathResult};

/// Common imports.
pub mod prelude {
    pub use crate::aco::{AcoConfig, AcoResult, AcoRunner, PathResult, SearchOutcome};
    pub use crate::error::{HamPathError, HamPathResult};
    pub use crate::graph::{DistanceMatrix, Graph};
}
