//! Plain exhaustive search: fix vertex 0, enumerate every permutation of the rest by
//! recursive swap, track the cheapest closed cycle. Correct but infeasible past ~10 vertices.

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

    permute(&mut rest, 0, &dense, &mut best_path, &mut best_cost);

    let Some(best_path) = best_path else {
        return Err(SolveError::Disconnected(Node(0), Node(0)));
    };

    let mut path = Vec::with_capacity(n + 1);
    path.push(Node(0));
    path.extend(best_path);
    path.push(Node(0));
    Ok(Tour::from_path(path, best_cost))
}

fn permute(
    rest: &mut Vec<Node>,
    k: usize,
    dense: &DenseGraph,
    best_path: &mut Option<Vec<Node>>,
    best_cost: &mut f64,
) {
    if k == rest.len() {
        let cost = cycle_cost(rest, dense);
        if let Some(cost) = cost {
            if cost < *best_cost {
                *best_cost = cost;
                *best_path = Some(rest.clone());
            }
        }
        return;
    }
    for i in k..rest.len() {
        rest.swap(k, i);
        permute(rest, k + 1, dense, best_path, best_cost);
        rest.swap(k, i);
    }
}

fn cycle_cost(rest: &[Node], dense: &DenseGraph) -> Option<f64> {
    let mut total = EdgeWeight::Finite(0.0);
    let mut prev = Node(0);
    for &v in rest {
        total = total + dense.edge_weight(prev, v);
        prev = v;
    }
    total = total + dense.edge_weight(prev, Node(0));
    total.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DenseGraph {
        let w = [[0.0, 1.0, 2.0, 1.0], [1.0, 0.0, 1.0, 2.0], [2.0, 1.0, 0.0, 1.0], [1.0, 2.0, 1.0, 0.0]];
        DenseGraph::from_fn(4, |u, v| EdgeWeight::finite(w[u.0][v.0]))
    }

    #[test]
    fn finds_known_optimum_on_the_square() {
        let tour = solve(&square()).unwrap();
        assert_eq!(tour.cost, 4.0);
        tour.check_shape(4).unwrap();
    }

    #[test]
    fn is_deterministic() {
        let g = square();
        let a = solve(&g).unwrap();
        let b = solve(&g).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn isolated_vertex_fails() {
        let g = DenseGraph::from_fn(4, |u, v| {
            if u.0 == 3 || v.0 == 3 {
                EdgeWeight::Missing
            } else {
                EdgeWeight::finite(1.0)
            }
        });
        assert!(matches!(solve(&g), Err(SolveError::Disconnected(_, _))));
    }
}
