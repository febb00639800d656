//! Multi-restart ant search loop.
//!
//! # Algorithm
//!
//! 1. Build the distance matrix once
//! 2. For each iteration, let every ant construct a route from a random start
//! 3. Keep the first complete route that is strictly shorter than the best so far
//! 4. After the full budget, map the best route back to node labels
//!
//! Ants do not share pheromone or any other state; the colony is a
//! best-of-many random restart of a nearest-neighbour walk.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::AcoConfig;
use super::construct::construct_route;
use super::types::{PathResult, Route, SearchOutcome};
use crate::error::{HamPathError, HamPathResult};
use crate::graph::{DistanceMatrix, Graph};

/// Result of an ant search run.
#[derive(Debug, Clone)]
pub struct AcoResult<L> {
    /// `Found` with the best path, or `NotFound`.
    pub outcome: SearchOutcome<L>,

    /// Number of routes constructed and evaluated.
    pub attempts: usize,

    /// How many of those routes visited every node.
    pub complete_attempts: usize,

    /// Iterations executed.
    pub iterations: usize,

    /// Iteration in which the best route was found.
    pub best_iteration: Option<usize>,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Whether the time limit stopped the run.
    pub timed_out: bool,

    /// Best distance after each iteration (`INFINITY` until a route is found).
    pub distance_history: Vec<f64>,
}

impl<L> AcoResult<L> {
    /// Converts the run into the path or an error.
    ///
    /// A run that exhausted its budget without a complete route yields
    /// [`HamPathError::NoCompleteRoute`]. A run stopped early by
    /// cancellation or the time limit yields
    /// [`HamPathError::SearchInterrupted`] instead, since the unused budget
    /// might still have found a path.
    pub fn into_path(self) -> HamPathResult<PathResult<L>> {
        if (self.cancelled || self.timed_out) && !self.outcome.is_found() {
            return Err(HamPathError::SearchInterrupted {
                attempts: self.attempts,
            });
        }
        self.outcome.into_result(self.attempts)
    }
}

/// Executes the ant search.
pub struct AcoRunner;

impl AcoRunner {
    /// Searches `graph` for a Hamiltonian path.
    ///
    /// # Errors
    ///
    /// Returns [`HamPathError::InvalidConfig`] if `config` fails validation.
    /// Not finding a path is reported through [`SearchOutcome::NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_hampath::aco::{AcoConfig, AcoRunner};
    /// use u_hampath::graph::Graph;
    ///
    /// let cycle = Graph::new(vec![1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
    /// let result = AcoRunner::search(&cycle, &AcoConfig::default().with_seed(42)).unwrap();
    /// let path = result.outcome.path().unwrap();
    /// assert_eq!(path.total_distance, 4.0);
    /// ```
    pub fn search<L: Clone>(graph: &Graph<L>, config: &AcoConfig) -> HamPathResult<AcoResult<L>> {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked before each iteration; a cancelled run still
    /// reports the best route found so far.
    pub fn run_with_cancel<L: Clone>(
        graph: &Graph<L>,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> HamPathResult<AcoResult<L>> {
        config.validate().map_err(HamPathError::InvalidConfig)?;

        let matrix = DistanceMatrix::from_graph(graph);
        let n = matrix.len();

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let deadline = config.time_limit.map(|limit| Instant::now() + limit);

        tracing::debug!(
            nodes = n,
            edges = graph.edges().len(),
            iterations = config.num_iterations,
            ants = config.num_ants,
            seed,
            "starting ant search"
        );

        let mut best: Option<Route> = None;
        let mut best_distance = f64::INFINITY;
        let mut best_iteration = None;
        let mut attempts = 0usize;
        let mut complete_attempts = 0usize;
        let mut iterations = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;
        let mut distance_history = Vec::with_capacity(config.num_iterations);

        for iteration in 0..config.num_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    tracing::warn!(iteration, "ant search cancelled");
                    cancelled = true;
                    break;
                }
            }

            // One seed per ant, drawn in ant order, keeps seeded runs
            // identical with and without the thread pool.
            let seeds: Vec<u64> = (0..config.num_ants).map(|_| rng.random()).collect();

            for route in build_ants(&matrix, &seeds, config.parallel) {
                attempts += 1;
                if !route.is_complete(n) {
                    continue;
                }
                complete_attempts += 1;

                let distance = route.distance();
                if distance < best_distance {
                    tracing::trace!(iteration, distance, "new best route");
                    best_distance = distance;
                    best = Some(route);
                    best_iteration = Some(iteration);
                }
            }

            iterations += 1;
            distance_history.push(best_distance);

            if let Some(deadline) = deadline {
                if iteration + 1 < config.num_iterations && Instant::now() >= deadline {
                    tracing::warn!(iterations, "ant search hit its time limit");
                    timed_out = true;
                    break;
                }
            }
        }

        let outcome = match best {
            Some(route) => SearchOutcome::Found(PathResult {
                path: route
                    .indices()
                    .iter()
                    .filter_map(|&i| graph.label(i).cloned())
                    .collect(),
                total_distance: best_distance,
            }),
            None => SearchOutcome::NotFound,
        };

        tracing::debug!(
            found = outcome.is_found(),
            attempts,
            complete_attempts,
            "ant search finished"
        );

        Ok(AcoResult {
            outcome,
            attempts,
            complete_attempts,
            iterations,
            best_iteration,
            cancelled,
            timed_out,
            distance_history,
        })
    }
}

#[cfg(feature = "parallel")]
fn build_ants(matrix: &DistanceMatrix, seeds: &[u64], parallel: bool) -> Vec<Route> {
    if parallel {
        seeds
            .par_iter()
            .map(|&s| construct_route(matrix, &mut StdRng::seed_from_u64(s)))
            .collect()
    } else {
        build_ants_sequential(matrix, seeds)
    }
}

#[cfg(not(feature = "parallel"))]
fn build_ants(matrix: &DistanceMatrix, seeds: &[u64], _parallel: bool) -> Vec<Route> {
    build_ants_sequential(matrix, seeds)
}

fn build_ants_sequential(matrix: &DistanceMatrix, seeds: &[u64]) -> Vec<Route> {
    seeds
        .iter()
        .map(|&s| construct_route(matrix, &mut StdRng::seed_from_u64(s)))
        .collect()
}
