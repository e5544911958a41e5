//! 1-tree construction over reduced weights.
//!
//! A 1-tree rooted at `r` is an MST of `V \ {r}` plus the two cheapest edges incident to
//! `r`. The Held-Karp Lagrangian lower bound repeatedly builds one of these under a
//! changing potential vector, so this module takes the potentials as an explicit input
//! rather than hard-coding unreduced weights, built on [`crate::mst::prim_mst_over`].

use tsp_core::{EdgeWeight, Graph, Node, SolveError};

use crate::mst::prim_mst_over;

/// A 1-tree: its edge set, total cost under reduced weights, and the degree of every vertex
/// within it, needed by the Lagrangian subgradient's update step.
#[derive(Debug, Clone)]
pub struct OneTree {
    pub edges: Vec<(Node, Node)>,
    pub cost: f64,
    pub degree: Vec<u32>,
}

/// Builds a minimum 1-tree rooted at vertex `root`, under reduced weights
/// `w'(u, v) = w(u, v) + pi[u] + pi[v]`.
///
/// `pi` must have one entry per vertex of `graph`.
pub fn min_one_tree(graph: &impl Graph, root: Node, pi: &[f64]) -> Result<OneTree, SolveError> {
    let n = graph.num_vertices();
    debug_assert_eq!(pi.len(), n);

    let reduced = |u: Node, v: Node| -> EdgeWeight {
        match graph.edge_weight(u, v) {
            EdgeWeight::Finite(w) => EdgeWeight::Finite(w + pi[u.0] + pi[v.0]),
            EdgeWeight::Missing => EdgeWeight::Missing,
        }
    };

    let rest: Vec<Node> = (0..n).filter(|&v| v != root.0).map(Node).collect();
    let mst = prim_mst_over(&rest, reduced)?;

    let mut degree = vec![0u32; n];
    for &(a, b) in &mst.edges {
        degree[a.0] += 1;
        degree[b.0] += 1;
    }

    // Two cheapest edges from root to the rest, by reduced weight.
    let mut root_edges: Vec<(Node, f64)> = rest
        .iter()
        .filter_map(|&v| reduced(root, v).value().map(|w| (v, w)))
        .collect();
    if root_edges.len() < 2 {
        return Err(SolveError::Disconnected(root, Node(usize::MAX)));
    }
    root_edges.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut edges = mst.edges;
    let mut cost = mst.cost;
    for &(v, w) in &root_edges[0..2] {
        edges.push((root, v));
        cost += w;
        degree[root.0] += 1;
        degree[v.0] += 1;
    }

    Ok(OneTree { edges, cost, degree })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::DenseGraph;

    fn cycle_graph(n: usize) -> DenseGraph {
        DenseGraph::from_fn(n, |u, v| {
            let d = u.0.abs_diff(v.0).min(n - u.0.abs_diff(v.0));
            EdgeWeight::finite(d as f64)
        })
    }

    #[test]
    fn one_tree_of_a_cycle_under_zero_potentials_has_every_degree_two() {
        let g = cycle_graph(6);
        let pi = vec![0.0; 6];
        let ot = min_one_tree(&g, Node(0), &pi).unwrap();
        assert!(ot.degree.iter().all(|&d| d == 2));
        assert_eq!(ot.cost, 6.0);
    }

    #[test]
    fn one_tree_has_n_edges() {
        let g = cycle_graph(5);
        let pi = vec![0.0; 5];
        let ot = min_one_tree(&g, Node(0), &pi).unwrap();
        assert_eq!(ot.edges.len(), 5); // N-2 spanning-tree edges over the rest, plus 2 from root
    }
}
