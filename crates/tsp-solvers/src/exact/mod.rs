//! Exact solvers: exhaustive permutation search, branch-and-bound pruning, and Held-Karp
//! dynamic programming. All three agree on every small instance, which is exercised in
//! `tests/`.

pub mod exhaustive;
pub mod held_karp;
pub mod pruned;

pub use exhaustive::solve as exhaustive_search;
pub use held_karp::solve as held_karp_exact;
pub use pruned::solve as pruned_exhaustive_search;
