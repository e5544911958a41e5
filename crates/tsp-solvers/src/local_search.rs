//! 2-opt local search: repeatedly replace two non-adjacent tour edges with two others that
//! reverse the segment between them, whenever that strictly lowers cost.

use tsp_core::{Graph, Tour};

/// Deltas smaller than this are treated as zero, so equal-cost swaps don't thrash forever.
const EPSILON: f64 = 1e-9;

/// Runs 2-opt to a fixpoint on `tour`, first-improvement policy: apply the first improving
/// move found and restart the scan from the top.
///
/// Returns the improved tour. Termination is guaranteed by strict monotone cost descent.
pub fn two_opt(graph: &impl Graph, tour: &Tour) -> Tour {
    let n = tour.num_vertices();
    let mut path = tour.path.clone();
    let mut cost = tour.cost;

    if n < 4 {
        return Tour::from_path(path, cost);
    }

    loop {
        let mut improved = false;

        'scan: for i in 1..n {
            for j in (i + 1)..n {
                // (i-1,i) and (j,j+1) must be non-adjacent edges: excludes the wraparound
                // case where j is the last index and i is the first, which would make the
                // two edges share the closing vertex.
                if i == 1 && j == n - 1 {
                    continue;
                }

                let a = path[i - 1];
                let b = path[i];
                let c = path[j];
                let d = path[j + 1];

                let (Some(wab), Some(wcd), Some(wac), Some(wbd)) = (
                    graph.edge_weight(a, b).value(),
                    graph.edge_weight(c, d).value(),
                    graph.edge_weight(a, c).value(),
                    graph.edge_weight(b, d).value(),
                ) else {
                    continue;
                };

                let gain = (wab + wcd) - (wac + wbd);
                if gain > EPSILON {
                    path[i..=j].reverse();
                    cost -= gain;
                    improved = true;
                    break 'scan;
                }
            }
        }

        if !improved {
            break;
        }
    }

    Tour::from_path(path, cost)
}

/// Delta of applying the 2-opt move that reverses `path[i..=j]`, from the four edges it
/// changes, without touching any other edge's cost. Exposed for simulated annealing's
/// incremental acceptance rule, which must never recompute a tour's full cost.
pub fn two_opt_delta(graph: &impl Graph, path: &[tsp_core::Node], i: usize, j: usize) -> Option<f64> {
    let n = path.len() - 1;
    let a = path[i - 1];
    let b = path[i];
    let c = path[j];
    let d = path[(j + 1) % (n + 1)];

    let wab = graph.edge_weight(a, b).value()?;
    let wcd = graph.edge_weight(c, d).value()?;
    let wac = graph.edge_weight(a, c).value()?;
    let wbd = graph.edge_weight(b, d).value()?;

    Some((wac + wbd) - (wab + wcd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::{DenseGraph, EdgeWeight, Node};

    fn crossed_square() -> DenseGraph {
        let w = [[0.0, 1.0, 2.0, 1.0], [1.0, 0.0, 1.0, 2.0], [2.0, 1.0, 0.0, 1.0], [1.0, 2.0, 1.0, 0.0]];
        DenseGraph::from_fn(4, |u, v| EdgeWeight::finite(w[u.0][v.0]))
    }

    #[test]
    fn never_increases_cost() {
        let g = crossed_square();
        let bad_tour = Tour::from_path(vec![Node(0), Node(2), Node(1), Node(3), Node(0)], 6.0);
        let improved = two_opt(&g, &bad_tour);
        assert!(improved.cost <= bad_tour.cost + 1e-9);
        improved.check_shape(4).unwrap();
    }

    #[test]
    fn reaches_a_fixpoint_with_no_further_improving_move() {
        let g = crossed_square();
        let bad_tour = Tour::from_path(vec![Node(0), Node(2), Node(1), Node(3), Node(0)], 6.0);
        let once = two_opt(&g, &bad_tour);
        let twice = two_opt(&g, &once);
        assert_eq!(once.cost, twice.cost);
    }
}
