//! The two lower bounds the workbench compares solver quality against.

use tsp_core::{Graph, Node, SolveError};

use crate::mst::prim_mst_cost;
use crate::one_tree::min_one_tree;

/// MST lower bound: any Hamiltonian tour contains a spanning tree, so its cost can never be
/// less than the graph's minimum spanning tree.
pub fn mst_lower_bound(graph: &impl Graph) -> Result<f64, SolveError> {
    prim_mst_cost(graph)
}

/// Tunables for the Held-Karp Lagrangian subgradient ascent, grounded on
/// `original_source`'s `LowerBound_HeldKarp.c` constants.
#[derive(Debug, Clone, Copy)]
pub struct HeldKarpLagrangianConfig {
    pub root: Node,
    pub max_iterations: usize,
    pub initial_step: f64,
}

impl Default for HeldKarpLagrangianConfig {
    fn default() -> Self {
        HeldKarpLagrangianConfig {
            root: Node(0),
            max_iterations: 200,
            initial_step: 0.1,
        }
    }
}

/// Held-Karp Lagrangian lower bound via subgradient ascent on vertex potentials.
///
/// Returns the best dual value `L(pi)` observed across iterations, or
/// [`SolveError::NumericalDegeneracy`] if no finite value was ever obtained.
pub fn held_karp_lagrangian(graph: &impl Graph, config: HeldKarpLagrangianConfig) -> Result<f64, SolveError> {
    let n = graph.num_vertices();
    let mut pi = vec![0.0f64; n];
    let mut best_l = f64::NEG_INFINITY;

    for iter in 0..config.max_iterations {
        let one_tree = match min_one_tree(graph, config.root, &pi) {
            Ok(t) => t,
            Err(_) => {
                // Perturb and continue rather than abort the whole ascent.
                perturb(&mut pi, iter);
                continue;
            }
        };

        let l = one_tree.cost - 2.0 * pi.iter().sum::<f64>();
        if l > best_l {
            best_l = l;
        }

        let subgradient: Vec<f64> = one_tree.degree.iter().map(|&d| d as f64 - 2.0).collect();
        let norm_sq: f64 = subgradient.iter().map(|s| s * s).sum();
        if norm_sq == 0.0 {
            // The 1-tree is already a tour: the bound is tight, nothing more to gain.
            break;
        }

        let step = config.initial_step / ((iter + 1) as f64).sqrt();
        for i in 0..n {
            pi[i] += step * subgradient[i] / (1.0 + norm_sq);
        }
    }

    if best_l.is_finite() {
        Ok(best_l)
    } else {
        Err(SolveError::NumericalDegeneracy(
            "subgradient ascent never produced a finite 1-tree value".into(),
        ))
    }
}

fn perturb(pi: &mut [f64], iter: usize) {
    // Deterministic pseudo-perturbation keyed on iteration index, so the ascent still makes
    // progress after a failed 1-tree build without pulling in randomness for a lower bound
    // the test suite expects to be stable across repeated computation.
    for (i, p) in pi.iter_mut().enumerate() {
        let wobble = ((iter * 7 + i * 13 + 1) % 11) as f64 - 5.0;
        *p += wobble * 1e-6;
    }
}
