/*!
Core types shared by every TSP solver in the workbench: the [`Graph`] view, the
[`EdgeWeight`] sum type used for "missing edge" arithmetic, the [`Tour`] ADT, the
[`VertexSubset`] bitmask used by Held-Karp, and the [`SolveError`] failure marker that
every solver entry point returns instead of panicking.
*/

pub mod bitset;
pub mod error;
pub mod graph;
pub mod node;
pub mod tour;
pub mod weight;

pub use bitset::VertexSubset;
pub use error::SolveError;
pub use graph::{DenseGraph, Graph};
pub use node::Node;
pub use tour::Tour;
pub use weight::EdgeWeight;
