//! Branch-and-bound pruned exhaustive search: the same permutation traversal as
//! [`crate::exact::exhaustive`], but carrying a running partial-cost accumulator so whole
//! subtrees are skipped once they can no longer beat the incumbent. Same O(N!) worst case,
//! typically much faster in practice.

use tsp_core::{DenseGraph, EdgeWeight, Graph, Node, SolveError, Tour};

pub fn solve(graph: &impl Graph) -> Result<Tour, SolveError> {
    let n = graph.num_vertices();
    let dense = DenseGraph::from_graph(graph);

    if n <= 1 {
        return Ok(Tour::from_path(vec![Node(0); n + 1], 0.0));
    }

    let mut rest: Vec<Node> = (1..n).map(Node).collect();
    let mut best_path: Option<Vec<Node>> = None;
    let mut best_cost = f64::INFINITY;

    branch(&mut rest, 0, Node(0), 0.0, &dense, &mut best_path, &mut best_cost);

    let Some(best_path) = best_path else {
        return Err(SolveError::Disconnected(Node(0), Node(0)));
    };

    let mut path = Vec::with_capacity(n + 1);
    path.push(Node(0));
    path.extend(best_path);
    path.push(Node(0));
    Ok(Tour::from_path(path, best_cost))
}

fn branch(
    rest: &mut Vec<Node>,
    k: usize,
    last: Node,
    partial_cost: f64,
    dense: &DenseGraph,
    best_path: &mut Option<Vec<Node>>,
    best_cost: &mut f64,
) {
    // Prune: this branch's accumulated cost already meets or exceeds the incumbent.
    if partial_cost >= *best_cost {
        return;
    }

    if k == rest.len() {
        if let Some(closing) = dense.edge_weight(last, Node(0)).value() {
            let total = partial_cost + closing;
            if total < *best_cost {
                *best_cost = total;
                *best_path = Some(rest.clone());
            }
        }
        return;
    }

    for i in k..rest.len() {
        rest.swap(k, i);
        let next = rest[k];
        if let Some(edge) = dense.edge_weight(last, next).value() {
            branch(rest, k + 1, next, partial_cost + edge, dense, best_path, best_cost);
        }
        rest.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::exhaustive;

    fn square() -> DenseGraph {
        let w = [[0.0, 1.0, 2.0, 1.0], [1.0, 0.0, 1.0, 2.0], [2.0, 1.0, 0.0, 1.0], [1.0, 2.0, 1.0, 0.0]];
        DenseGraph::from_fn(4, |u, v| EdgeWeight::finite(w[u.0][v.0]))
    }

    #[test]
    fn matches_plain_exhaustive_search() {
        let g = square();
        let plain = exhaustive::solve(&g).unwrap();
        let pruned = solve(&g).unwrap();
        assert_eq!(plain.cost, pruned.cost);
    }

    #[test]
    fn is_deterministic() {
        let g = square();
        let a = solve(&g).unwrap();
        let b = solve(&g).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn prunes_on_missing_edges_without_panicking() {
        let g = DenseGraph::from_fn(5, |u, v| {
            if (u.0, v.0) == (0, 4) || (u.0, v.0) == (4, 0) {
                EdgeWeight::Missing
            } else {
                EdgeWeight::finite((u.0 as f64 - v.0 as f64).abs())
            }
        });
        let tour = solve(&g).unwrap();
        tour.check_shape(5).unwrap();
    }
}
