//! Validated undirected graph.

use crate::error::{HamPathError, HamPathResult};

/// An undirected, unweighted graph with opaque node labels.
///
/// Nodes are addressed internally by their position in the label
/// sequence. Edges are stored as 0-based position pairs and are
/// guaranteed to be in range once the graph has been constructed.
///
/// # Examples
///
/// ```
/// use u_hampath::graph::Graph;
///
/// // 1-based positions, as sent by clients.
/// let g = Graph::new(vec!["a", "b", "c"], &[(1, 2), (2, 3)]).unwrap();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<L> {
    nodes: Vec<L>,
    edges: Vec<(usize, usize)>,
}

impl<L> Graph<L> {
    /// Builds a graph from labels and edges given as 1-based positions
    /// into `nodes`.
    ///
    /// # Errors
    ///
    /// Returns [`HamPathError::InvalidGraph`] if an endpoint is 0 or
    /// greater than the number of nodes.
    pub fn new(nodes: Vec<L>, edges: &[(usize, usize)]) -> HamPathResult<Self> {
        let n = nodes.len();
        let mut resolved = Vec::with_capacity(edges.len());

        for (k, &(a, b)) in edges.iter().enumerate() {
            for endpoint in [a, b] {
                if endpoint == 0 || endpoint > n {
                    return Err(HamPathError::InvalidGraph {
                        edge: k,
                        reason: format!(
                            "references position {endpoint} but the graph has {n} nodes (positions are 1-based)"
                        ),
                    });
                }
            }
            resolved.push((a - 1, b - 1));
        }

        Ok(Self {
            nodes,
            edges: resolved,
        })
    }

    /// Node labels in input order.
    pub fn nodes(&self) -> &[L] {
        &self.nodes
    }

    /// Edges as 0-based position pairs.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Label at 0-based position `index`, if any.
    pub fn label(&self, index: usize) -> Option<&L> {
        self.nodes.get(index)
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<L: PartialEq + std::fmt::Debug> Graph<L> {
    /// Builds a graph whose edges name their endpoints by label.
    ///
    /// Each label is resolved to its first occurrence in `nodes`.
    ///
    /// # Errors
    ///
    /// Returns [`HamPathError::InvalidGraph`] if an endpoint label is not
    /// present in `nodes`.
    pub fn from_label_edges(nodes: Vec<L>, edges: &[(L, L)]) -> HamPathResult<Self> {
        let mut resolved = Vec::with_capacity(edges.len());

        for (k, (a, b)) in edges.iter().enumerate() {
            let position = |label: &L| {
                nodes
                    .iter()
                    .position(|x| x == label)
                    .ok_or_else(|| HamPathError::InvalidGraph {
                        edge: k,
                        reason: format!("references unknown node {label:?}"),
                    })
            };
            resolved.push((position(a)?, position(b)?));
        }

        Ok(Self {
            nodes,
            edges: resolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_edges_are_converted() {
        let g = Graph::new(vec![10, 20, 30, 40], &[(1, 2), (4, 1)]).unwrap();
        assert_eq!(g.edges(), &[(0, 1), (3, 0)]);
        assert_eq!(g.label(3), Some(&40));
        assert_eq!(g.label(4), None);
    }

    #[test]
    fn test_zero_position_rejected() {
        let err = Graph::new(vec![1, 2], &[(0, 1)]).unwrap_err();
        assert!(matches!(err, HamPathError::InvalidGraph { edge: 0, .. }));
    }

    #[test]
    fn test_out_of_range_position_rejected() {
        let err = Graph::new(vec![1, 2, 3], &[(1, 2), (3, 4)]).unwrap_err();
        assert!(matches!(err, HamPathError::InvalidGraph { edge: 1, .. }));
    }

    #[test]
    fn test_duplicate_and_self_edges_accepted() {
        let g = Graph::new(vec!['a', 'b'], &[(1, 2), (2, 1), (1, 1)]).unwrap();
        assert_eq!(g.edges().len(), 3);
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<u32> = Graph::new(vec![], &[]).unwrap();
        assert!(g.is_empty());
        assert!(Graph::<u32>::new(vec![], &[(1, 1)]).is_err());
    }

    #[test]
    fn test_label_edges_resolve_first_occurrence() {
        let g = Graph::from_label_edges(vec!["x", "y", "z"], &[("x", "z"), ("z", "y")]).unwrap();
        assert_eq!(g.edges(), &[(0, 2), (2, 1)]);
    }

    #[test]
    fn test_label_edges_unknown_label() {
        let err = Graph::from_label_edges(vec!["x", "y"], &[("x", "q")]).unwrap_err();
        match err {
            HamPathError::InvalidGraph { edge, reason } => {
                assert_eq!(edge, 0);
                assert!(reason.contains("\"q\""), "reason was {reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
