//! Pairwise hop-distance matrix.

use super::types::Graph;

/// Dense symmetric distance matrix over node positions.
///
/// `get(i, i) == 0.0`, `get(i, j) == 1.0` when an edge joins `i` and `j`,
/// and `f64::INFINITY` otherwise. Built once per search and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix for `graph`.
    ///
    /// Duplicate edges overwrite idempotently. A self-loop is absorbed by
    /// the diagonal, which is written last.
    pub fn from_graph<L>(graph: &Graph<L>) -> Self {
        let n = graph.node_count();
        let mut data = vec![f64::INFINITY; n * n];

        for &(i, j) in graph.edges() {
            data[i * n + j] = 1.0;
            data[j * n + i] = 1.0;
        }
        for i in 0..n {
            data[i * n + i] = 0.0;
        }

        Self { n, data }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` for the 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from `i` to `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range");
        self.data[i * self.n + j]
    }

    /// Whether `j` can be reached from `i` in at most one hop.
    #[inline]
    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(n: usize, edges: &[(usize, usize)]) -> DistanceMatrix {
        let g = Graph::new((1..=n).collect(), edges).unwrap();
        DistanceMatrix::from_graph(&g)
    }

    #[test]
    fn test_diagonal_edges_and_infinity() {
        let m = matrix(3, &[(1, 2)]);
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
        }
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 1.0);
        assert!(m.get(0, 2).is_infinite());
        assert!(!m.is_reachable(2, 1));
    }

    #[test]
    fn test_symmetric() {
        let m = matrix(5, &[(1, 3), (5, 2), (4, 1), (2, 3)]);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_self_loop_keeps_zero_diagonal() {
        let m = matrix(2, &[(1, 1), (1, 2), (1, 2)]);
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(0, 1), 1.0);
    }

    #[test]
    fn test_empty() {
        let m = matrix(0, &[]);
        assert!(m.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        matrix(2, &[]).get(0, 2);
    }
}
