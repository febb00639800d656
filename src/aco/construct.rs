//! Single-ant route construction.

use super::types::Route;
use crate::graph::DistanceMatrix;
use rand::Rng;

/// Builds one candidate route with a nearest-neighbour walk from a
/// uniformly random start.
///
/// At each step the unvisited node closest to the current one is
/// appended. Candidates are scanned in ascending index order and only a
/// strictly closer one replaces the current choice, so ties go to the
/// lowest index. The walk stops early when no unvisited node is reachable;
/// the returned route is then shorter than `matrix.len()`.
///
/// An empty matrix yields an empty route and consumes no randomness.
pub fn construct_route<R: Rng>(matrix: &DistanceMatrix, rng: &mut R) -> Route {
    let n = matrix.len();
    let mut route = Route::with_capacity(n);
    if n == 0 {
        return route;
    }

    let start = rng.random_range(0..n);
    let mut visited = vec![false; n];
    visited[start] = true;
    route.push(start);
    let mut remaining = n - 1;

    let mut current = start;
    while remaining > 0 {
        let mut next = None;
        let mut min_dist = f64::INFINITY;

        for (candidate, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = matrix.get(current, candidate);
            if d < min_dist {
                min_dist = d;
                next = Some(candidate);
            }
        }

        let Some(next) = next else {
            break;
        };
        visited[next] = true;
        route.push(next);
        remaining -= 1;
        current = next;
    }

    route
}
