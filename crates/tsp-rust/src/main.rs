//! Command-line driver: for a handful of built-in instances, compute both lower bounds,
//! optionally the exact optimum, and run every solver whose vertex-count cap permits it.
//! This binary is the workbench's external collaborator, not part of the core: it owns
//! process-level concerns (logging setup, random seeding) the core never touches.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tsp_core::{Graph, Node, SolveError, Tour};
use tsp_instances::{from_matrix, random_euclidean_instance};
use tsp_solvers::metaheuristics::{AntColonyConfig, GeneticConfig, SimulatedAnnealingConfig};

const EXHAUSTIVE_CAP: usize = 10;
const PRUNED_EXHAUSTIVE_CAP: usize = 12;
const HELD_KARP_CAP: usize = 20;
const GENETIC_CAP: usize = tsp_solvers::metaheuristics::genetic::MAX_VERTICES;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    let square = from_matrix(&[
        vec![0.0, 1.0, 2.0, 1.0],
        vec![1.0, 0.0, 1.0, 2.0],
        vec![2.0, 1.0, 0.0, 1.0],
        vec![1.0, 2.0, 1.0, 0.0],
    ])
    .expect("built-in square instance is well-formed");
    run_instance("square (S1)", &square, &mut rng);

    let euclidean = random_euclidean_instance(30, 1000.0, 30).to_graph();
    run_instance("random Euclidean, 30 points", &euclidean, &mut rng);
}

fn run_instance(name: &str, graph: &impl Graph, rng: &mut StdRng) {
    let n = graph.num_vertices();
    info!("=== {name} (N={n}) ===");

    report_lower_bound("MST lower bound", tsp_solvers::mst_lower_bound(graph));
    report_lower_bound(
        "Held-Karp Lagrangian lower bound",
        tsp_solvers::held_karp_lagrangian(graph, Default::default()),
    );

    let optimum = if n <= HELD_KARP_CAP {
        match tsp_solvers::held_karp_exact(graph) {
            Ok(tour) => {
                report_tour("Held-Karp exact", &tour, None);
                Some(tour.cost)
            }
            Err(e) => {
                warn!("Held-Karp exact: {e}");
                None
            }
        }
    } else {
        info!("Held-Karp exact: disabled (N > {HELD_KARP_CAP})");
        None
    };

    if n <= EXHAUSTIVE_CAP {
        report_result("exhaustive search", tsp_solvers::exhaustive_search(graph), optimum);
    } else {
        info!("exhaustive search: disabled (N > {EXHAUSTIVE_CAP})");
    }

    if n <= PRUNED_EXHAUSTIVE_CAP {
        report_result("pruned exhaustive search", tsp_solvers::pruned_exhaustive_search(graph), optimum);
    } else {
        info!("pruned exhaustive search: disabled (N > {PRUNED_EXHAUSTIVE_CAP})");
    }

    let nearest_neighbour = tsp_solvers::nearest_neighbour(graph, Node(0));
    report_result("nearest neighbour", nearest_neighbour.clone(), optimum);
    report_result("cheapest-insertion greedy", tsp_solvers::cheapest_insertion(graph), optimum);
    report_result("nearest insertion", tsp_solvers::nearest_insertion(graph), optimum);
    report_result("Christofides", tsp_solvers::christofides(graph), optimum);

    if let Ok(seed) = &nearest_neighbour {
        let improved = tsp_solvers::two_opt(graph, seed);
        report_tour("2-opt (seeded from nearest neighbour)", &improved, optimum);

        match tsp_solvers::simulated_annealing(graph, seed, SimulatedAnnealingConfig::default(), rng) {
            Ok(tour) => report_tour("simulated annealing", &tour, optimum),
            Err(e) => warn!("simulated annealing: {e}"),
        }
    } else {
        warn!("2-opt and simulated annealing skipped: no seed tour available");
    }

    match tsp_solvers::ant_colony_optimisation(graph, AntColonyConfig::default(), rng) {
        Ok(tour) => report_tour("ant colony optimisation", &tour, optimum),
        Err(e) => warn!("ant colony optimisation: {e}"),
    }

    if n <= GENETIC_CAP {
        match tsp_solvers::genetic_algorithm(graph, GeneticConfig::default(), rng) {
            Ok(tour) => report_tour("genetic algorithm", &tour, optimum),
            Err(e) => warn!("genetic algorithm: {e}"),
        }
    } else {
        info!("genetic algorithm: disabled (N > {GENETIC_CAP})");
    }
}

fn report_lower_bound(label: &str, result: Result<f64, SolveError>) {
    match result {
        Ok(bound) => info!("{label}: {bound:.3}"),
        Err(e) => warn!("{label}: {e}"),
    }
}

fn report_result(label: &str, result: Result<Tour, SolveError>, optimum: Option<f64>) {
    match result {
        Ok(tour) => report_tour(label, &tour, optimum),
        Err(e) => warn!("{label}: {e}"),
    }
}

fn report_tour(label: &str, tour: &Tour, optimum: Option<f64>) {
    match optimum {
        Some(opt) if opt > 0.0 => {
            info!("{label}: cost {:.3} ({:.1}% above optimum), path {:?}", tour.cost, (tour.cost / opt - 1.0) * 100.0, tour.path);
        }
        _ => info!("{label}: cost {:.3}, path {:?}", tour.cost, tour.path),
    }
}
