use crate::node::Node;
use crate::weight::EdgeWeight;

/// A read-only view over a complete, undirected, weighted graph of `N` vertices indexed
/// `0..N`. No solver in this workbench ever mutates a `Graph`; implementers are free to
/// cache whatever internal representation makes `edge_weight` and `neighbours` fast, since
/// complexity is not part of the contract.
pub trait Graph {
    fn num_vertices(&self) -> usize;

    /// The weight of edge `(u, v)`, or [`EdgeWeight::Missing`] if no edge joins them.
    ///
    /// Implementations must be symmetric: `edge_weight(u, v) == edge_weight(v, u)`.
    fn edge_weight(&self, u: Node, v: Node) -> EdgeWeight;

    /// Every vertex `v` with a finite edge to `u`, paired with that edge's weight.
    ///
    /// The default implementation scans every vertex; implementations backed by an
    /// adjacency list should override this for speed.
    fn neighbours(&self, u: Node) -> Vec<(Node, f64)> {
        (0..self.num_vertices())
            .filter(|&v| v != u.0)
            .filter_map(|v| {
                let v = Node(v);
                self.edge_weight(u, v).value().map(|w| (v, w))
            })
            .collect()
    }
}

/// A dense `Graph` backed by a flattened row-major `N x N` weight matrix.
///
/// This is the representation every solver that needs `O(1)` edge lookups (Held-Karp, the
/// 1-tree, 2-opt) should build once on entry rather than repeatedly querying a sparser
/// `Graph` implementation.
#[derive(Debug, Clone)]
pub struct DenseGraph {
    weights: Vec<EdgeWeight>,
    dimension: usize,
}

impl DenseGraph {
    /// Builds a dense graph from a symmetric weight function.
    ///
    /// Panics if `weight_fn(u, v) != weight_fn(v, u)` for some pair (checked via debug
    /// assertion) or if `dimension` is zero.
    pub fn from_fn(dimension: usize, mut weight_fn: impl FnMut(Node, Node) -> EdgeWeight) -> Self {
        assert!(dimension > 0, "a graph must have at least one vertex");
        let mut weights = vec![EdgeWeight::Finite(0.0); dimension * dimension];
        for row in 0..dimension {
            for col in 0..dimension {
                let w = if row == col {
                    EdgeWeight::Finite(0.0)
                } else {
                    weight_fn(Node(row), Node(col))
                };
                weights[row * dimension + col] = w;
            }
        }
        DenseGraph { weights, dimension }
    }

    /// Builds a dense graph from a row-major flattened matrix of `dimension * dimension`
    /// entries. `matrix[i * dimension + j]` is the weight of edge `(i, j)`.
    pub fn from_matrix(matrix: Vec<EdgeWeight>, dimension: usize) -> Self {
        assert_eq!(
            matrix.len(),
            dimension * dimension,
            "matrix must have dimension * dimension entries"
        );
        DenseGraph {
            weights: matrix,
            dimension,
        }
    }

    /// Builds a dense graph from any other `Graph`, materialising all `O(N^2)` lookups.
    pub fn from_graph(graph: &impl Graph) -> Self {
        let n = graph.num_vertices();
        DenseGraph::from_fn(n, |u, v| graph.edge_weight(u, v))
    }

    #[inline(always)]
    fn index(&self, u: Node, v: Node) -> usize {
        u.0 * self.dimension + v.0
    }
}

impl Graph for DenseGraph {
    fn num_vertices(&self) -> usize {
        self.dimension
    }

    fn edge_weight(&self, u: Node, v: Node) -> EdgeWeight {
        self.weights[self.index(u, v)]
    }

    fn neighbours(&self, u: Node) -> Vec<(Node, f64)> {
        (0..self.dimension)
            .filter(|&v| v != u.0)
            .filter_map(|v| {
                let v = Node(v);
                self.weights[self.index(u, v)].value().map(|w| (v, w))
            })
            .collect()
    }
}
