//! Constructive heuristics: each builds a complete tour from scratch without ever
//! backtracking on a placement decision, trading optimality for speed.

pub mod cheapest_insertion;
pub mod christofides;
pub mod nearest_insertion;
pub mod nearest_neighbour;

pub use cheapest_insertion::solve as cheapest_insertion;
pub use christofides::solve as christofides;
pub use nearest_insertion::solve as nearest_insertion;
pub use nearest_neighbour::solve as nearest_neighbour;
