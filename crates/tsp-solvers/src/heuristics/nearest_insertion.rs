//! Nearest-insertion: seed with the two globally closest vertices, then repeatedly pull in
//! whichever unvisited vertex is nearest to the current cycle and insert it at the position
//! with the smallest cost delta (the same delta rule as cheapest-insertion).

use tsp_core::{Graph, Node, SolveError, Tour};

use super::cheapest_insertion::close_cycle;

pub fn solve(graph: &impl Graph) -> Result<Tour, SolveError> {
    let n = graph.num_vertices();
    if n <= 2 {
        return super::nearest_neighbour::solve(graph, Node(0));
    }

    let (a, b) = closest_pair(graph, n)?;
    let mut cycle = vec![a, b];
    let mut in_cycle = vec![false; n];
    in_cycle[a.0] = true;
    in_cycle[b.0] = true;

    for _ in 2..n {
        // Selection: the unvisited vertex with smallest minimum distance to any cycle vertex.
        // Tie-break: lowest index.
        let mut chosen: Option<(Node, f64)> = None;
        for k in 0..n {
            if in_cycle[k] {
                continue;
            }
            let k = Node(k);
            let min_dist = cycle
                .iter()
                .filter_map(|&c| graph.edge_weight(c, k).value())
                .fold(f64::INFINITY, f64::min);
            if min_dist.is_finite() && chosen.map(|(_, bd)| min_dist < bd).unwrap_or(true) {
                chosen = Some((k, min_dist));
            }
        }
        let Some((k, _)) = chosen else {
            let unreached = (0..n).find(|&v| !in_cycle[v]).unwrap_or(0);
            return Err(SolveError::Disconnected(Node(0), Node(unreached)));
        };

        // Placement: insert at whichever cycle edge yields the smallest delta, same rule as
        // cheapest-insertion.
        let mut best_pos = None;
        let mut best_delta = f64::INFINITY;
        for pos in 0..cycle.len() {
            let i = cycle[pos];
            let j = cycle[(pos + 1) % cycle.len()];
            let (Some(wik), Some(wkj), Some(wij)) = (
                graph.edge_weight(i, k).value(),
                graph.edge_weight(k, j).value(),
                graph.edge_weight(i, j).value(),
            ) else {
                continue;
            };
            let delta = wik + wkj - wij;
            if delta < best_delta {
                best_delta = delta;
                best_pos = Some(pos);
            }
        }
        let Some(pos) = best_pos else {
            return Err(SolveError::Disconnected(Node(0), k));
        };
        cycle.insert(pos + 1, k);
        in_cycle[k.0] = true;
    }

    close_cycle(cycle, graph)
}

fn closest_pair(graph: &impl Graph, n: usize) -> Result<(Node, Node), SolveError> {
    let mut best: Option<(Node, Node, f64)> = None;
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(w) = graph.edge_weight(Node(i), Node(j)).value() {
                if best.map(|(_, _, bw)| w < bw).unwrap_or(true) {
                    best = Some((Node(i), Node(j), w));
                }
            }
        }
    }
    best.map(|(a, b, _)| (a, b))
        .ok_or(SolveError::Disconnected(Node(0), Node(n.saturating_sub(1))))
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
        let tour = solve(&g).unwrap();
        tour.check_shape(4).unwrap();
    }

    #[test]
    fn is_deterministic() {
        let g = square();
        let a = solve(&g).unwrap();
        let b = solve(&g).unwrap();
        assert_eq!(a, b);
    }
}
