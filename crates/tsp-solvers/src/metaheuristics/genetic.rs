//! Genetic algorithm: order crossover (OX), tournament selection, swap mutation, elitism.
//! Grounded on `original_source/GeneticAlgorithm.c` for the generation loop shape.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use tsp_core::{DenseGraph, Graph, Node, SolveError, Tour};

/// Advisory cap above which the algorithm refuses to run, matching the driver's GA cap.
pub const MAX_VERTICES: usize = 55;

#[derive(Debug, Clone, Copy)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub elitism_count: usize,
    pub tournament_size: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        GeneticConfig {
            population_size: 100,
            generations: 200,
            mutation_rate: 0.02,
            elitism_count: 4,
            tournament_size: 5,
        }
    }
}

#[derive(Debug, Clone)]
struct Individual {
    permutation: Vec<Node>,
    cost: f64,
}

pub fn solve(graph: &impl Graph, config: GeneticConfig, rng: &mut StdRng) -> Result<Tour, SolveError> {
    let n = graph.num_vertices();
    if n > MAX_VERTICES {
        return Err(SolveError::SizeCap { size: n, cap: MAX_VERTICES });
    }
    if n < 4 {
        return crate::heuristics::nearest_neighbour(graph, Node(0));
    }

    let dense = DenseGraph::from_graph(graph);
    let mut population = initial_population(n, config.population_size, &dense, rng);
    population.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    for _generation in 0..config.generations {
        let mut next_generation = Vec::with_capacity(config.population_size);
        next_generation.extend(population.iter().take(config.elitism_count).cloned());

        while next_generation.len() < config.population_size {
            let parent1 = tournament_select(&population, config.tournament_size, rng);
            let parent2 = tournament_select(&population, config.tournament_size, rng);
            let mut child = order_crossover(parent1, parent2, rng);
            mutate(&mut child, config.mutation_rate, rng);
            let cost = tour_cost(&child, &dense);
            next_generation.push(Individual { permutation: child, cost });
        }

        population = next_generation;
        population.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    }

    let best = &population[0];
    debug!("genetic algorithm converged to cost {}", best.cost);

    let mut path = best.permutation.clone();
    path.push(path[0]);
    let tour = Tour::from_path(path, best.cost);
    tour.check_shape(n)
        .map_err(|e| SolveError::InvariantViolation(e.to_string()))?;
    Ok(tour)
}

fn tour_cost(permutation: &[Node], graph: &DenseGraph) -> f64 {
    let mut total = 0.0;
    for pair in permutation.windows(2) {
        match graph.edge_weight(pair[0], pair[1]).value() {
            Some(w) => total += w,
            None => return f64::INFINITY,
        }
    }
    match graph
        .edge_weight(permutation[permutation.len() - 1], permutation[0])
        .value()
    {
        Some(w) => total + w,
        None => f64::INFINITY,
    }
}

fn initial_population(n: usize, size: usize, graph: &DenseGraph, rng: &mut StdRng) -> Vec<Individual> {
    (0..size)
        .map(|_| {
            let mut permutation: Vec<Node> = (0..n).map(Node).collect();
            // Fisher-Yates shuffle.
            for i in (1..n).rev() {
                let j = rng.random_range(0..=i);
                permutation.swap(i, j);
            }
            let cost = tour_cost(&permutation, graph);
            Individual { permutation, cost }
        })
        .collect()
}

fn tournament_select<'a>(population: &'a [Individual], k: usize, rng: &mut StdRng) -> &'a Individual {
    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..k {
        let candidate = &population[rng.random_range(0..population.len())];
        if candidate.cost < best.cost {
            best = candidate;
        }
    }
    best
}

/// Order Crossover (OX): copy `parent1[p1..p2]` verbatim, fill the rest in
/// left-to-right order of `parent2`'s sequence starting just past `p2`, wrapping, skipping
/// cities already placed.
fn order_crossover(parent1: &Individual, parent2: &Individual, rng: &mut StdRng) -> Vec<Node> {
    let n = parent1.permutation.len();
    let mut p1 = rng.random_range(0..n);
    let mut p2 = rng.random_range(0..n);
    if p1 > p2 {
        std::mem::swap(&mut p1, &mut p2);
    }

    let mut child = vec![None; n];
    let mut used = vec![false; n];
    for i in p1..=p2 {
        child[i] = Some(parent1.permutation[i]);
        used[parent1.permutation[i].0] = true;
    }

    let mut fill_pos = (p2 + 1) % n;
    let mut source_pos = (p2 + 1) % n;
    for _ in 0..n {
        let candidate = parent2.permutation[source_pos];
        if !used[candidate.0] {
            child[fill_pos] = Some(candidate);
            used[candidate.0] = true;
            fill_pos = (fill_pos + 1) % n;
        }
        source_pos = (source_pos + 1) % n;
    }

    child.into_iter().map(|v| v.expect("every position is filled by construction")).collect()
}

fn mutate(permutation: &mut [Node], mutation_rate: f64, rng: &mut StdRng) {
    if rng.random_bool(mutation_rate) {
        let n = permutation.len();
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        permutation.swap(i, j);
    }
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
        let mut rng = StdRng::seed_from_u64(2);
        let tour = solve(&g, GeneticConfig::default(), &mut rng).unwrap();
        tour.check_shape(4).unwrap();
    }

    #[test]
    fn same_seed_produces_the_same_result() {
        let g = square();
        let mut rng_a = StdRng::seed_from_u64(9);
        let mut rng_b = StdRng::seed_from_u64(9);
        let a = solve(&g, GeneticConfig::default(), &mut rng_a).unwrap();
        let b = solve(&g, GeneticConfig::default(), &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn refuses_instances_above_the_vertex_cap() {
        let g = DenseGraph::from_fn(MAX_VERTICES + 1, |u, v| EdgeWeight::finite(u.0.abs_diff(v.0) as f64));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            solve(&g, GeneticConfig::default(), &mut rng),
            Err(SolveError::SizeCap { .. })
        ));
    }
}
