//! Minimum spanning tree construction via Prim's algorithm.
//!
//! The dense `O(N^2)` variant is used throughout the workbench: directly as the MST lower
//! bound, as a building block of Christofides, and — via [`prim_mst_over`] — as the
//! spanning-tree half of the 1-tree lower bound, which needs Prim's algorithm over an
//! arbitrary vertex subset and an arbitrary (reduced) weight function rather than the
//! graph's own edges.

use tsp_core::{Graph, Node, SolveError};

/// An MST represented as its edge set. Always has `vertices.len() - 1` edges and no cycle.
#[derive(Debug, Clone)]
pub struct MstEdges {
    pub edges: Vec<(Node, Node)>,
    pub cost: f64,
}

/// Builds a minimum spanning tree of the whole graph, starting from vertex 0.
///
/// Returns [`SolveError::Disconnected`] if some vertex is unreachable from the rest.
pub fn prim_mst(graph: &impl Graph) -> Result<MstEdges, SolveError> {
    let n = graph.num_vertices();
    let vertices: Vec<Node> = (0..n).map(Node).collect();
    prim_mst_over(&vertices, |u, v| graph.edge_weight(u, v))
}

/// Convenience wrapper returning just the MST's total cost (the MST lower bound).
pub fn prim_mst_cost(graph: &impl Graph) -> Result<f64, SolveError> {
    prim_mst(graph).map(|mst| mst.cost)
}

/// Prim's algorithm generalised to an explicit vertex list and weight function.
///
/// `vertices` need not be `0..n`; this is what lets the 1-tree lower bound build a spanning
/// tree over `V \ {root}` using reduced weights without first remapping indices. Ties in
/// `key` are broken deterministically in favour of the lowest-indexed candidate vertex.
pub fn prim_mst_over<F>(vertices: &[Node], weight: F) -> Result<MstEdges, SolveError>
where
    F: Fn(Node, Node) -> tsp_core::EdgeWeight,
{
    let k = vertices.len();
    if k <= 1 {
        return Ok(MstEdges {
            edges: Vec::new(),
            cost: 0.0,
        });
    }

    let mut in_tree = vec![false; k];
    let mut key = vec![f64::INFINITY; k];
    let mut parent = vec![usize::MAX; k];

    key[0] = 0.0;
    in_tree[0] = true;
    for j in 1..k {
        if let Some(w) = weight(vertices[0], vertices[j]).value() {
            key[j] = w;
            parent[j] = 0;
        }
    }

    let mut edges = Vec::with_capacity(k - 1);
    let mut cost = 0.0;

    for _ in 1..k {
        let mut best: Option<usize> = None;
        for j in 0..k {
            if in_tree[j] || key[j].is_infinite() {
                continue;
            }
            match best {
                None => best = Some(j),
                Some(b) => {
                    if key[j] < key[b] || (key[j] == key[b] && vertices[j] < vertices[b]) {
                        best = Some(j);
                    }
                }
            }
        }

        let Some(picked) = best else {
            let unreached = (0..k).find(|&j| !in_tree[j]).expect("loop invariant: some vertex remains");
            return Err(SolveError::Disconnected(vertices[0], vertices[unreached]));
        };

        in_tree[picked] = true;
        cost += key[picked];
        edges.push((vertices[parent[picked]], vertices[picked]));

        for j in 0..k {
            if in_tree[j] {
                continue;
            }
            if let Some(w) = weight(vertices[picked], vertices[j]).value() {
                if w < key[j] {
                    key[j] = w;
                    parent[j] = picked;
                }
            }
        }
    }

    Ok(MstEdges { edges, cost })
}
