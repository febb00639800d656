//! Graph input model and the distance matrix derived from it.
//!
//! A [`Graph`] is validated on construction, so every edge addresses a
//! real node. [`DistanceMatrix`] turns it into the unit-cost reachability
//! table that drives route construction.

mod matrix;
mod types;

pub use matrix::DistanceMatrix;
pub use types::Graph;
