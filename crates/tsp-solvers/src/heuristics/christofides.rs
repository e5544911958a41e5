//! Christofides: MST, minimum-weight perfect matching on the odd-degree vertices,
//! Eulerian circuit via Hierholzer's algorithm over a symmetric edge-count matrix (the only
//! correct bookkeeping scheme for the edge removal Hierholzer's algorithm needs), then
//! shortcut.

use tsp_core::{EdgeWeight, Graph, Node, SolveError, Tour};

use crate::matching::{self, Matching};
use crate::mst::prim_mst;

/// Which matching routine to use for the odd-degree vertices. `Exact` is required for the
/// 1.5x bound to hold on metric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingMode {
    Greedy,
    Exact,
}

pub fn solve(graph: &impl Graph) -> Result<Tour, SolveError> {
    solve_with(graph, MatchingMode::Greedy)
}

pub fn solve_with(graph: &impl Graph, mode: MatchingMode) -> Result<Tour, SolveError> {
    let n = graph.num_vertices();
    if n <= 2 {
        return crate::heuristics::nearest_neighbour(graph, Node(0));
    }

    // 1. MST.
    let mst = prim_mst(graph)?;

    // 2. Odd-degree vertices of the MST.
    let mut degree = vec![0u32; n];
    for &(a, b) in &mst.edges {
        degree[a.0] += 1;
        degree[b.0] += 1;
    }
    let odd: Vec<Node> = (0..n).filter(|&v| degree[v] % 2 == 1).map(Node).collect();

    // 3. MWPM on the odd-degree set, using the original graph's weights.
    let weight = |a: Node, b: Node| graph.edge_weight(a, b).value().unwrap_or(f64::INFINITY);
    let matching: Matching = match mode {
        MatchingMode::Greedy => matching::greedy_mwpm(&odd, weight)?,
        MatchingMode::Exact => matching::exact_mwpm(&odd, weight)?,
    };

    // 4. H = MST ∪ matching, as a symmetric edge-count matrix indexed by (min(u,v), max(u,v))
    //    — the only correct bookkeeping scheme for Hierholzer's edge consumption.
    let mut edge_count = vec![0u32; n * n];
    let key = |a: Node, b: Node| {
        let (lo, hi) = (a.0.min(b.0), a.0.max(b.0));
        lo * n + hi
    };
    for &(a, b) in mst.edges.iter().chain(matching.pairs.iter()) {
        edge_count[key(a, b)] += 1;
    }

    // 5. Hierholzer's algorithm from vertex 0.
    let circuit = hierholzer(n, &mut edge_count, Node(0))?;

    // 6. Shortcut: skip repeated vertices, close back to the start.
    let mut seen = vec![false; n];
    let mut shortcut = Vec::with_capacity(n + 1);
    for v in circuit {
        if !seen[v.0] {
            seen[v.0] = true;
            shortcut.push(v);
        }
    }
    shortcut.push(shortcut[0]);

    if shortcut.len() != n + 1 {
        return Err(SolveError::InvariantViolation(
            "Eulerian shortcut did not visit every vertex".into(),
        ));
    }

    // Cost MUST be recomputed from the shortcut path, never summed from the Eulerian walk.
    let cost = shortcut
        .windows(2)
        .map(|pair| graph.edge_weight(pair[0], pair[1]))
        .sum::<EdgeWeight>()
        .value()
        .ok_or_else(|| SolveError::Disconnected(shortcut[0], shortcut[1]))?;

    Ok(Tour::from_path(shortcut, cost))
}

fn hierholzer(n: usize, edge_count: &mut [u32], start: Node) -> Result<Vec<Node>, SolveError> {
    let key = |a: Node, b: Node| {
        let (lo, hi) = (a.0.min(b.0), a.0.max(b.0));
        lo * n + hi
    };

    let mut stack = vec![start];
    let mut circuit = Vec::new();

    while let Some(&current) = stack.last() {
        let next = (0..n).map(Node).find(|&v| edge_count[key(current, v)] > 0);
        match next {
            Some(v) => {
                edge_count[key(current, v)] -= 1;
                stack.push(v);
            }
            None => {
                circuit.push(stack.pop().expect("stack is non-empty in this branch"));
            }
        }
    }

    if edge_count.iter().any(|&c| c != 0) {
        return Err(SolveError::InvariantViolation(
            "Hierholzer's algorithm finished with unconsumed edges".into(),
        ));
    }

    circuit.reverse();
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::DenseGraph;

    fn euclidean_square() -> DenseGraph {
        // Points forming a metric square; triangle inequality holds.
        let points: [(f64, f64); 5] = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.5, 0.5)];
        DenseGraph::from_fn(points.len(), |u, v| {
            let (x1, y1) = points[u.0];
            let (x2, y2) = points[v.0];
            EdgeWeight::finite(((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
        })
    }

    #[test]
    fn produces_a_valid_tour_on_a_metric_instance() {
        let g = euclidean_square();
        let tour = solve(&g).unwrap();
        tour.check_shape(5).unwrap();
    }

    #[test]
    fn respects_the_1_5x_bound_with_an_exact_matching() {
        let g = euclidean_square();
        let tour = solve_with(&g, MatchingMode::Exact).unwrap();
        let optimum = crate::exact::exhaustive_search(&g).unwrap();
        assert!(tour.cost <= 1.5 * optimum.cost + 1e-9);
    }

    #[test]
    fn still_returns_a_valid_tour_when_triangle_inequality_is_violated() {
        // w(0,2) dominates w(0,1) + w(1,2), per S6.
        let w = [
            [0.0, 1.0, 100.0, 1.0],
            [1.0, 0.0, 1.0, 2.0],
            [100.0, 1.0, 0.0, 1.0],
            [1.0, 2.0, 1.0, 0.0],
        ];
        let g = DenseGraph::from_fn(4, |u, v| EdgeWeight::finite(w[u.0][v.0]));
        let tour = solve(&g).unwrap();
        tour.check_shape(4).unwrap();
    }
}
