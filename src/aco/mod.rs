//! Ant search for Hamiltonian paths.
//!
//! Each ant is an independent nearest-neighbour walk from a random start
//! over a unit-cost [`DistanceMatrix`](crate::graph::DistanceMatrix). A run
//! sends `num_iterations * num_ants` ants and keeps the shortest complete
//! route. No pheromone is laid or read, so the search is a random-restart
//! greedy heuristic: it may miss a Hamiltonian path that exists.
//!
//! # References
//!
//! - Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant system: optimization
//!   by a colony of cooperating agents", *IEEE Trans. SMC-B* 26(1), 29-41.
//! - Rosenkrantz, Stearns & Lewis (1977), nearest-neighbour construction for
//!   the TSP.

mod config;
mod construct;
mod runner;
mod types;

pub use config::AcoConfig;
pub use construct::construct_route;
pub use runner::{AcoResult, AcoRunner};
pub use types::{PathResult, Route, SearchOutcome};
