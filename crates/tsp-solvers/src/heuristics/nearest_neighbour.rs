//! Nearest neighbour: seeded at a start vertex, always step to the closest unvisited
//! vertex, close the cycle back to the seed.

use tsp_core::{Graph, Node, SolveError, Tour};

pub fn solve(graph: &impl Graph, seed: Node) -> Result<Tour, SolveError> {
    let n = graph.num_vertices();
    if n <= 1 {
        return Ok(Tour::from_path(vec![seed; n + 1], 0.0));
    }

    let mut visited = vec![false; n];
    visited[seed.0] = true;
    let mut path = Vec::with_capacity(n + 1);
    path.push(seed);
    let mut cost = 0.0;
    let mut current = seed;

    for _ in 1..n {
        let mut best: Option<(Node, f64)> = None;
        for v in 0..n {
            if visited[v] {
                continue;
            }
            let v = Node(v);
            if let Some(w) = graph.edge_weight(current, v).value() {
                // Deterministic tie-break: lowest index wins.
                if best.map(|(_, bw)| w < bw).unwrap_or(true) {
                    best = Some((v, w));
                }
            }
        }
        let Some((next, w)) = best else {
            return Err(SolveError::Disconnected(current, current));
        };
        visited[next.0] = true;
        path.push(next);
        cost += w;
        current = next;
    }

    let closing = graph
        .edge_weight(current, seed)
        .value()
        .ok_or(SolveError::Disconnected(current, seed))?;
    cost += closing;
    path.push(seed);

    Ok(Tour::from_path(path, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::{DenseGraph, EdgeWeight};

    fn square() -> DenseGraph {
        let w = [[0.0, 1.0, 2.0, 1.0], [1.0, 0.0, 1.0, 2.0], [2.0, 1.0, 0.0, 1.0], [1.0, 2.0, 1.0, 0.0]];
        DenseGraph::from_fn(4, |u, v| EdgeWeight::finite(w[u.0][v.0]))
    }

    #[test]
    fn produces_a_valid_tour() {
        let g = square();
        let tour = solve(&g, Node(0)).unwrap();
        tour.check_shape(4).unwrap();
        assert_eq!(tour.recomputed_cost(&g).value(), Some(tour.cost));
    }

    #[test]
    fn is_deterministic() {
        let g = square();
        let a = solve(&g, Node(0)).unwrap();
        let b = solve(&g, Node(0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn isolated_vertex_causes_failure() {
        let g = DenseGraph::from_fn(5, |u, v| {
            if u.0 == 4 || v.0 == 4 {
                EdgeWeight::Missing
            } else {
                EdgeWeight::finite(1.0)
            }
        });
        assert!(matches!(solve(&g, Node(0)), Err(SolveError::Disconnected(_, _))));
    }
}
