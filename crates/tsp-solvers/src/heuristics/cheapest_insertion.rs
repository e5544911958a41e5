//! Cheapest-insertion greedy: grow a cycle one vertex at a time, each time inserting
//! wherever the cost delta is smallest.

use tsp_core::{Graph, Node, SolveError, Tour};

pub fn solve(graph: &impl Graph) -> Result<Tour, SolveError> {
    let n = graph.num_vertices();
    if n <= 2 {
        return super::nearest_neighbour::solve(graph, Node(0));
    }

    let mut cycle = vec![Node(0), Node(1), Node(2)];
    for w in [
        graph.edge_weight(Node(0), Node(1)),
        graph.edge_weight(Node(1), Node(2)),
        graph.edge_weight(Node(2), Node(0)),
    ] {
        if w.is_missing() {
            return Err(SolveError::Disconnected(Node(0), Node(2)));
        }
    }
    let mut in_cycle = vec![false; n];
    in_cycle[0] = true;
    in_cycle[1] = true;
    in_cycle[2] = true;

    for _ in 3..n {
        let mut best: Option<(usize, Node, f64)> = None; // (position after which to insert, vertex, delta)

        for k in 0..n {
            if in_cycle[k] {
                continue;
            }
            let k = Node(k);
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
                if best.map(|(_, bk, bd)| delta < bd || (delta == bd && k < bk)).unwrap_or(true) {
                    best = Some((pos, k, delta));
                }
            }
        }

        let Some((pos, k, _)) = best else {
            return Err(SolveError::Disconnected(Node(0), k_placeholder(n, &in_cycle)));
        };
        cycle.insert(pos + 1, k);
        in_cycle[k.0] = true;
    }

    close_cycle(cycle, graph)
}

fn k_placeholder(n: usize, in_cycle: &[bool]) -> Node {
    Node((0..n).find(|&v| !in_cycle[v]).unwrap_or(0))
}

pub(super) fn close_cycle(cycle: Vec<Node>, graph: &impl Graph) -> Result<Tour, SolveError> {
    let mut path = cycle;
    let first = path[0];
    path.push(first);
    let cost = path
        .windows(2)
        .map(|pair| graph.edge_weight(pair[0], pair[1]))
        .sum::<tsp_core::EdgeWeight>()
        .value()
        .ok_or(SolveError::Disconnected(first, first))?;
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
