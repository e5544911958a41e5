//! Ant colony optimisation: a colony of ants builds tours guided by pheromone and heuristic
//! visibility, reinforcing whichever edges the colony's tours used. Grounded on
//! `original_source/AntColony.c` for the α/β/ρ/Q update rule.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use tsp_core::{DenseGraph, Graph, Node, SolveError, Tour};

#[derive(Debug, Clone, Copy)]
pub struct AntColonyConfig {
    pub alpha: f64,
    pub beta: f64,
    pub evaporation_rate: f64,
    pub deposit_factor: f64,
    pub iterations: usize,
    /// `None` defaults to one ant per vertex.
    pub num_ants: Option<usize>,
}

impl Default for AntColonyConfig {
    fn default() -> Self {
        AntColonyConfig {
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.5,
            deposit_factor: 100.0,
            iterations: 100,
            num_ants: None,
        }
    }
}

pub fn solve(graph: &impl Graph, config: AntColonyConfig, rng: &mut StdRng) -> Result<Tour, SolveError> {
    let n = graph.num_vertices();
    if n < 2 {
        return Ok(Tour::from_path(vec![Node(0); n + 1], 0.0));
    }

    let dense = DenseGraph::from_graph(graph);
    let num_ants = config.num_ants.unwrap_or(n);

    // Pheromone matrix, initialised uniform: other implementations sometimes normalise this,
    // but this workbench keeps the source's flat 1.0 initialisation.
    let mut pheromone = vec![1.0f64; n * n];
    // Heuristic visibility eta = 1/w, zero on missing edges.
    let eta = |u: Node, v: Node| -> f64 {
        match dense.edge_weight(u, v).value() {
            Some(w) if w > 0.0 => 1.0 / w,
            _ => 0.0,
        }
    };

    let mut best_path: Option<Vec<Node>> = None;
    let mut best_cost = f64::INFINITY;

    for _iteration in 0..config.iterations {
        let mut ant_tours: Vec<(Vec<Node>, f64)> = Vec::with_capacity(num_ants);

        for _ in 0..num_ants {
            let start = Node(rng.random_range(0..n));
            if let Some((path, cost)) = build_ant_tour(&dense, &pheromone, &eta, start, config, rng) {
                if cost < best_cost {
                    best_cost = cost;
                    best_path = Some(path.clone());
                }
                ant_tours.push((path, cost));
            }
        }

        // Evaporate.
        for p in pheromone.iter_mut() {
            *p *= 1.0 - config.evaporation_rate;
        }
        // Deposit, both directions, for every edge of every ant's completed tour.
        for (path, cost) in &ant_tours {
            if *cost <= 0.0 {
                continue;
            }
            let deposit = config.deposit_factor / cost;
            for pair in path.windows(2) {
                let (u, v) = (pair[0], pair[1]);
                pheromone[u.0 * n + v.0] += deposit;
                pheromone[v.0 * n + u.0] += deposit;
            }
        }
    }

    let Some(path) = best_path else {
        return Err(SolveError::Disconnected(Node(0), Node(0)));
    };

    debug!("ant colony optimisation converged to cost {best_cost}");
    let tour = Tour::from_path(path, best_cost);
    tour.check_shape(n)
        .map_err(|e| SolveError::InvariantViolation(e.to_string()))?;
    Ok(tour)
}

fn build_ant_tour(
    graph: &DenseGraph,
    pheromone: &[f64],
    eta: &impl Fn(Node, Node) -> f64,
    start: Node,
    config: AntColonyConfig,
    rng: &mut StdRng,
) -> Option<(Vec<Node>, f64)> {
    let n = graph.num_vertices();
    let mut visited = vec![false; n];
    visited[start.0] = true;
    let mut path = vec![start];
    let mut cost = 0.0;
    let mut current = start;

    for _ in 1..n {
        let mut weights = Vec::new();
        let mut candidates = Vec::new();
        for v in 0..n {
            if visited[v] {
                continue;
            }
            let v = Node(v);
            let visibility = eta(current, v);
            if visibility <= 0.0 {
                continue;
            }
            let tau = pheromone[current.0 * n + v.0].max(1e-12);
            let weight = tau.powf(config.alpha) * visibility.powf(config.beta);
            weights.push(weight);
            candidates.push(v);
        }
        if candidates.is_empty() {
            return None;
        }

        let total: f64 = weights.iter().sum();
        let next = if total <= 0.0 {
            candidates[0]
        } else {
            let mut roll = rng.random_range(0.0..total);
            let mut chosen = candidates[candidates.len() - 1];
            for (candidate, weight) in candidates.iter().zip(weights.iter()) {
                if roll < *weight {
                    chosen = *candidate;
                    break;
                }
                roll -= weight;
            }
            chosen
        };

        let edge_cost = graph.edge_weight(current, next).value()?;
        cost += edge_cost;
        visited[next.0] = true;
        path.push(next);
        current = next;
    }

    let closing = graph.edge_weight(current, start).value()?;
    cost += closing;
    path.push(start);

    Some((path, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use tsp_core::EdgeWeight;

    fn square() -> DenseGraph {
        let w = [[0.0, 1.0, 2.0, 1.0], [1.0, 0.0, 1.0, 2.0], [2.0, 1.0, 0.0, 1.0], [1.0, 2.0, 1.0, 0.0]];
        DenseGraph::from_fn(4, |u, v| EdgeWeight::finite(w[u.0][v.0]))
    }

    #[test]
    fn produces_a_valid_tour() {
        let g = square();
        let mut rng = StdRng::seed_from_u64(1);
        let tour = solve(&g, AntColonyConfig::default(), &mut rng).unwrap();
        tour.check_shape(4).unwrap();
    }

    #[test]
    fn same_seed_produces_the_same_result() {
        let g = square();
        let mut rng_a = StdRng::seed_from_u64(3);
        let mut rng_b = StdRng::seed_from_u64(3);
        let a = solve(&g, AntColonyConfig::default(), &mut rng_a).unwrap();
        let b = solve(&g, AntColonyConfig::default(), &mut rng_b).unwrap();
        assert_eq!(a, b);
    }
}
