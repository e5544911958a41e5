//! Minimum-weight perfect matching over an even-sized vertex set.
//!
//! Christofides needs this to pair the odd-degree vertices of its MST. Two modes are
//! offered: a greedy fallback (default, fast, no optimality guarantee) and a small exact
//! solver used when the caller wants Christofides' 1.5x bound to actually hold.

use tsp_core::{Node, SolveError};

/// A perfect matching on a vertex set: `partner[i]` is `i`'s paired vertex, with
/// `partner(partner(i)) == i` and `partner(i) != i` for every `i` in the set.
#[derive(Debug, Clone)]
pub struct Matching {
    pub pairs: Vec<(Node, Node)>,
}

impl Matching {
    pub fn cost(&self, weight: impl Fn(Node, Node) -> f64) -> f64 {
        self.pairs.iter().map(|&(a, b)| weight(a, b)).sum()
    }
}

/// Iteratively pairs the cheapest remaining unmatched pair until none remain.
///
/// O(k^3) in the set size `k`. Documented trade-off: this does not guarantee the
/// no-improving-swap optimality condition, so a Christofides tour built on a greedy matching
/// is not guaranteed to stay within 1.5x of the optimum.
pub fn greedy_mwpm(vertices: &[Node], weight: impl Fn(Node, Node) -> f64) -> Result<Matching, SolveError> {
    if vertices.len() % 2 != 0 {
        return Err(SolveError::InvariantViolation(format!(
            "minimum-weight perfect matching requires an even vertex count, got {}",
            vertices.len()
        )));
    }

    let mut remaining: Vec<Node> = vertices.to_vec();
    let mut pairs = Vec::with_capacity(vertices.len() / 2);

    while !remaining.is_empty() {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..remaining.len() {
            for j in (i + 1)..remaining.len() {
                let w = weight(remaining[i], remaining[j]);
                if best.map(|(_, _, bw)| w < bw).unwrap_or(true) {
                    best = Some((i, j, w));
                }
            }
        }
        let (i, j, _) = best.expect("remaining is non-empty and has at least two elements");
        let (hi, lo) = (j.max(i), j.min(i));
        let b = remaining.remove(hi);
        let a = remaining.remove(lo);
        pairs.push((a, b));
    }

    Ok(Matching { pairs })
}

/// Exact minimum-weight perfect matching by recursive backtracking: pair the first
/// remaining vertex with every candidate partner, recurse, keep the cheapest total.
///
/// O(k!!) — double factorial — so this is only viable on the small odd-degree sets typical
/// of Christofides on modest instances; it stands in as the "exact mode" alternative to
/// Edmonds' blossom algorithm, which this workbench does not implement.
pub fn exact_mwpm(vertices: &[Node], weight: impl Fn(Node, Node) -> f64) -> Result<Matching, SolveError> {
    if vertices.len() % 2 != 0 {
        return Err(SolveError::InvariantViolation(format!(
            "minimum-weight perfect matching requires an even vertex count, got {}",
            vertices.len()
        )));
    }
    if vertices.is_empty() {
        return Ok(Matching { pairs: Vec::new() });
    }

    let mut best_pairs = None;
    let mut best_cost = f64::INFINITY;
    let mut current = Vec::with_capacity(vertices.len() / 2);
    recurse(vertices, &weight, &mut current, 0.0, &mut best_cost, &mut best_pairs);

    best_pairs
        .map(|pairs| Matching { pairs })
        .ok_or_else(|| SolveError::InvariantViolation("exact matching search found no matching".into()))
}

fn recurse(
    remaining: &[Node],
    weight: &impl Fn(Node, Node) -> f64,
    current: &mut Vec<(Node, Node)>,
    cost_so_far: f64,
    best_cost: &mut f64,
    best_pairs: &mut Option<Vec<(Node, Node)>>,
) {
    if cost_so_far >= *best_cost {
        return;
    }
    if remaining.is_empty() {
        *best_cost = cost_so_far;
        *best_pairs = Some(current.clone());
        return;
    }

    let first = remaining[0];
    for i in 1..remaining.len() {
        let partner = remaining[i];
        let mut rest = remaining[1..].to_vec();
        rest.remove(i - 1);

        current.push((first, partner));
        recurse(&rest, weight, current, cost_so_far + weight(first, partner), best_cost, best_pairs);
        current.pop();
    }
}
