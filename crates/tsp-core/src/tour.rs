use thiserror::Error;

use crate::graph::Graph;
use crate::node::Node;
use crate::weight::EdgeWeight;

/// A closed Hamiltonian tour: `path` has length `N + 1`, its first and last entries are
/// equal, and its first `N` entries are a permutation of `0..N`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub path: Vec<Node>,
    pub cost: f64,
}

/// Out-of-range sentinel a freshly allocated [`Tour`] is filled with before a solver writes
/// its actual path into it.
const UNSET: Node = Node(usize::MAX);

/// Why a [`Tour`] failed [`Tour::check_shape`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeViolation {
    #[error("path has length {actual}, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("path does not close: first vertex {first} != last vertex {last}")]
    NotClosed { first: Node, last: Node },
    #[error("path is not a permutation of 0..{n}")]
    NotAPermutation { n: usize },
    #[error("cost {0} is negative")]
    NegativeCost(f64),
}

impl Tour {
    /// Allocates a tour for `n` vertices with every path entry set to an out-of-range
    /// sentinel and zero cost. Callers overwrite `path` once the actual tour is known.
    pub fn new(n: usize) -> Self {
        Tour {
            path: vec![UNSET; n + 1],
            cost: 0.0,
        }
    }

    /// Builds a tour directly from a closed path and a precomputed cost.
    pub fn from_path(path: Vec<Node>, cost: f64) -> Self {
        Tour { path, cost }
    }

    pub fn num_vertices(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Checks the tour's shape invariants: correct length, closure, and permutation-ness.
    /// Does *not* recompute cost from the graph — see [`Tour::recomputed_cost`] for that,
    /// which is deliberately a test-suite obligation rather than a constructor check.
    pub fn check_shape(&self, n: usize) -> Result<(), ShapeViolation> {
        if self.path.len() != n + 1 {
            return Err(ShapeViolation::WrongLength {
                expected: n + 1,
                actual: self.path.len(),
            });
        }
        if self.path[0] != self.path[n] {
            return Err(ShapeViolation::NotClosed {
                first: self.path[0],
                last: self.path[n],
            });
        }
        let mut seen = vec![false; n];
        for &vertex in &self.path[0..n] {
            if vertex.0 >= n || seen[vertex.0] {
                return Err(ShapeViolation::NotAPermutation { n });
            }
            seen[vertex.0] = true;
        }
        if self.cost < 0.0 {
            return Err(ShapeViolation::NegativeCost(self.cost));
        }
        Ok(())
    }

    /// Recomputes the tour's cost from the graph by summing the weight of every edge the
    /// path traverses. Used by the test suite to enforce `cost == Σ edge_weight(...)`,
    /// which is deliberately not enforced by any constructor.
    pub fn recomputed_cost(&self, graph: &impl Graph) -> EdgeWeight {
        self.path
            .windows(2)
            .map(|pair| graph.edge_weight(pair[0], pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DenseGraph;

    fn square() -> DenseGraph {
        let w = [[0.0, 1.0, 2.0, 1.0], [1.0, 0.0, 1.0, 2.0], [2.0, 1.0, 0.0, 1.0], [1.0, 2.0, 1.0, 0.0]];
        DenseGraph::from_fn(4, |u, v| EdgeWeight::finite(w[u.0][v.0]))
    }

    #[test]
    fn fresh_tour_has_sentinel_path() {
        let tour = Tour::new(5);
        assert_eq!(tour.path.len(), 6);
        assert!(tour.path.iter().all(|&n| n == UNSET));
        assert_eq!(tour.cost, 0.0);
    }

    #[test]
    fn valid_tour_passes_shape_check() {
        let tour = Tour::from_path(vec![Node(0), Node(1), Node(2), Node(3), Node(0)], 4.0);
        assert!(tour.check_shape(4).is_ok());
    }

    #[test]
    fn open_path_fails_shape_check() {
        let tour = Tour::from_path(vec![Node(0), Node(1), Node(2), Node(3), Node(1)], 4.0);
        assert_eq!(
            tour.check_shape(4),
            Err(ShapeViolation::NotClosed {
                first: Node(0),
                last: Node(1)
            })
        );
    }

    #[test]
    fn repeated_vertex_fails_permutation_check() {
        let tour = Tour::from_path(vec![Node(0), Node(1), Node(1), Node(3), Node(0)], 4.0);
        assert_eq!(tour.check_shape(4), Err(ShapeViolation::NotAPermutation { n: 4 }));
    }

    #[test]
    fn recomputed_cost_matches_manual_sum() {
        let tour = Tour::from_path(vec![Node(0), Node(1), Node(2), Node(3), Node(0)], 4.0);
        assert_eq!(tour.recomputed_cost(&square()), EdgeWeight::finite(4.0));
    }
}
