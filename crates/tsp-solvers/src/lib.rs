/*!
Exact solvers, constructive heuristics, local search, metaheuristics and the two lower
bounds that make up the comparative TSP workbench, plus the MST / MWPM / 1-tree
infrastructure they share.

Every solver entry point takes a [`tsp_core::Graph`] (and, where the design calls for a
seed tour, an owned [`tsp_core::Tour`]) and returns `Result<Tour, SolveError>` rather than
panicking: a solver that cannot proceed reports why and lets the driver move on to the next
one.
*/

pub mod exact;
pub mod heuristics;
pub mod local_search;
pub mod lower_bounds;
pub mod matching;
pub mod metaheuristics;
pub mod mst;
pub mod one_tree;

pub use exact::{exhaustive_search, held_karp_exact, pruned_exhaustive_search};
pub use heuristics::{cheapest_insertion, christofides, nearest_insertion, nearest_neighbour};
pub use local_search::two_opt;
pub use lower_bounds::{held_karp_lagrangian, mst_lower_bound, HeldKarpLagrangianConfig};
pub use metaheuristics::{ant_colony_optimisation, genetic_algorithm, simulated_annealing};
