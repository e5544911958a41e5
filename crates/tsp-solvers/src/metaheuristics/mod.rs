//! Metaheuristics. All randomness in this module is drawn from an explicit `&mut StdRng`
//! passed in by the caller, never a process-global source, so runs are reproducible under a
//! fixed seed.

pub mod ant_colony;
pub mod genetic;
pub mod simulated_annealing;

pub use ant_colony::{solve as ant_colony_optimisation, AntColonyConfig};
pub use genetic::{solve as genetic_algorithm, GeneticConfig};
pub use simulated_annealing::{solve as simulated_annealing, SimulatedAnnealingConfig};
