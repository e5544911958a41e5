//! Held-Karp bitmask dynamic programming, grounded on `original_source/HeldKarp.c` for the
//! exact recurrence and base case.
//!
//! `dp[S][j]` is the minimum cost of a path `0 -> ... -> j` visiting exactly the vertices of
//! `S` (with `0 in S`, `j in S`); `dp[{0}][0] = 0` and every other `dp[S][0]` stays
//! unreachable, which lets the general recurrence `dp[S][j] = min_{k in S\{j}} dp[S\{j}][k] +
//! w(k,j)` subsume the `S = {0,j}` base case without a special branch.

use tsp_core::bitset::{check_capacity, subsets_containing_zero_by_popcount};
use tsp_core::{DenseGraph, Graph, Node, SolveError, Tour, VertexSubset};

/// Table entries beyond this count are refused as an allocation failure rather than
/// attempted: `2^N * N` grows far faster than any practical cap before `N` nears the
/// bitmask's 64-bit width.
const MAX_TABLE_ENTRIES: usize = 1 << 26;

pub fn solve(graph: &impl Graph) -> Result<Tour, SolveError> {
    let n = graph.num_vertices();
    check_capacity(n)?;

    if n <= 1 {
        return Ok(Tour::from_path(vec![Node(0); n + 1], 0.0));
    }

    // Guard the shift itself before it's computed: any N this large blows the allocation
    // cap below regardless, so there is no correct instance this rejects that the cap check
    // wouldn't have rejected anyway.
    const MAX_SHIFT: usize = 30;
    if n > MAX_SHIFT {
        return Err(SolveError::Allocation(format!(
            "Held-Karp DP table for N={n} exceeds the practical cap of {MAX_TABLE_ENTRIES} entries"
        )));
    }

    let table_entries = (1usize << n).saturating_mul(n);
    if table_entries > MAX_TABLE_ENTRIES {
        return Err(SolveError::Allocation(format!(
            "Held-Karp DP table of {table_entries} entries exceeds the practical cap of {MAX_TABLE_ENTRIES}"
        )));
    }

    let dense = DenseGraph::from_graph(graph);
    let num_masks = 1usize << n;
    let mut dp = vec![f64::INFINITY; num_masks * n];
    let mut parent = vec![Node(usize::MAX); num_masks * n];

    let idx = |mask: u64, j: usize| mask as usize * n + j;

    dp[idx(VertexSubset::singleton(Node(0)).bits(), 0)] = 0.0;

    for group in subsets_containing_zero_by_popcount(n).into_iter().skip(1) {
        for subset in group {
            for j in subset.iter() {
                if j == Node(0) {
                    continue;
                }
                let without_j = subset.without(j);
                let mut best = f64::INFINITY;
                let mut best_k = Node(usize::MAX);
                for k in without_j.iter() {
                    let base = dp[idx(without_j.bits(), k.0)];
                    if !base.is_finite() {
                        continue;
                    }
                    if let Some(w) = dense.edge_weight(k, j).value() {
                        let candidate = base + w;
                        if candidate < best {
                            best = candidate;
                            best_k = k;
                        }
                    }
                }
                dp[idx(subset.bits(), j.0)] = best;
                parent[idx(subset.bits(), j.0)] = best_k;
            }
        }
    }

    let full = VertexSubset::full(n)?;
    let mut best_total = f64::INFINITY;
    let mut best_last = Node(usize::MAX);
    for j in 1..n {
        let j = Node(j);
        let cost = dp[idx(full.bits(), j.0)];
        if !cost.is_finite() {
            continue;
        }
        if let Some(closing) = dense.edge_weight(j, Node(0)).value() {
            let total = cost + closing;
            if total < best_total {
                best_total = total;
                best_last = j;
            }
        }
    }

    if best_last.0 == usize::MAX {
        return Err(SolveError::Disconnected(Node(0), Node(0)));
    }

    // Trace back predecessors from best_last to reconstruct the path.
    let mut path_rev = Vec::with_capacity(n);
    let mut mask = full;
    let mut cur = best_last;
    loop {
        path_rev.push(cur);
        let prev = parent[idx(mask.bits(), cur.0)];
        if cur == Node(0) {
            break;
        }
        mask = mask.without(cur);
        cur = prev;
    }
    path_rev.reverse();
    path_rev.push(Node(0));

    let tour = Tour::from_path(path_rev, best_total);
    tour.check_shape(n)
        .map_err(|e| SolveError::InvariantViolation(e.to_string()))?;
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::exhaustive;
    use tsp_core::EdgeWeight;

    fn square() -> DenseGraph {
        let w = [[0.0, 1.0, 2.0, 1.0], [1.0, 0.0, 1.0, 2.0], [2.0, 1.0, 0.0, 1.0], [1.0, 2.0, 1.0, 0.0]];
        DenseGraph::from_fn(4, |u, v| EdgeWeight::finite(w[u.0][v.0]))
    }

    #[test]
    fn matches_exhaustive_search_on_the_square() {
        let g = square();
        let exhaustive = exhaustive::solve(&g).unwrap();
        let hk = solve(&g).unwrap();
        assert_eq!(exhaustive.cost, hk.cost);
        assert_eq!(hk.cost, 4.0);
    }

    #[test]
    fn is_deterministic() {
        let g = square();
        let a = solve(&g).unwrap();
        let b = solve(&g).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn disconnected_instance_reports_failure_or_valid_tour() {
        let g = DenseGraph::from_fn(5, |u, v| {
            if u.0 == 4 || v.0 == 4 {
                EdgeWeight::Missing
            } else {
                EdgeWeight::finite(1.0)
            }
        });
        assert!(matches!(solve(&g), Err(SolveError::Disconnected(_, _))));
    }
}
