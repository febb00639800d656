//! Routes and search outcomes.

use crate::error::HamPathError;

/// An ordered sequence of distinct node positions built by one ant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    indices: Vec<usize>,
}

impl Route {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            indices: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Node positions in visiting order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Route length as counted by the search: the number of nodes.
    pub fn distance(&self) -> f64 {
        self.indices.len() as f64
    }

    /// Whether the route visits all `n` nodes exactly once.
    pub fn is_complete(&self, n: usize) -> bool {
        if n == 0 || self.indices.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.indices {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

/// A Hamiltonian path expressed in node labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult<L> {
    /// Node labels in visiting order.
    pub path: Vec<L>,
    /// Node count of `path`, as a float.
    pub total_distance: f64,
}

/// Terminal state of a search.
///
/// `NotFound` is deliberately distinct from a `Found` path so that "no
/// route" can never be confused with a degenerate one.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<L> {
    Found(PathResult<L>),
    NotFound,
}

impl<L> SearchOutcome<L> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Borrow the path, if one was found.
    pub fn path(&self) -> Option<&PathResult<L>> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            SearchOutcome::NotFound => None,
        }
    }

    /// Converts `NotFound` into [`HamPathError::NoCompleteRoute`].
    pub fn into_result(self, attempts: usize) -> Result<PathResult<L>, HamPathError> {
        match self {
            SearchOutcome::Found(p) => Ok(p),
            SearchOutcome::NotFound => Err(HamPathError::NoCompleteRoute { attempts }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(ix: &[usize]) -> Route {
        let mut r = Route::with_capacity(ix.len());
        for &i in ix {
            r.push(i);
        }
        r
    }

    #[test]
    fn test_complete_route() {
        let r = route(&[2, 0, 1]);
        assert!(r.is_complete(3));
        assert_eq!(r.distance(), 3.0);
        assert_eq!(r.indices(), &[2, 0, 1]);
    }

    #[test]
    fn test_incomplete_routes() {
        assert!(!route(&[0, 1]).is_complete(3));
        assert!(!route(&[0, 0, 1]).is_complete(3));
        assert!(!route(&[0, 1, 5]).is_complete(3));
        assert!(!route(&[]).is_complete(0));
    }

    #[test]
    fn test_outcome_into_result() {
        let found = SearchOutcome::Found(PathResult {
            path: vec!["a"],
            total_distance: 1.0,
        });
        assert!(found.is_found());
        assert_eq!(found.into_result(10).unwrap().path, vec!["a"]);

        let missing: SearchOutcome<&str> = SearchOutcome::NotFound;
        assert!(missing.path().is_none());
        assert_eq!(
            missing.into_result(10),
            Err(HamPathError::NoCompleteRoute { attempts: 10 })
        );
    }
}
