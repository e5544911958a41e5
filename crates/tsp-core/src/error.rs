use thiserror::Error;

use crate::node::Node;

/// The failure marker every solver entry point returns instead of a [`crate::Tour`].
///
/// Mirrors the error-kind table of the workbench's error handling design: each variant is a
/// *kind*, not a distinct exception hierarchy, and no solver retries or propagates another
/// solver's failure. The driver treats any `Err` the same way ("solver disabled" or "no tour
/// found") and moves on to the next solver; the variant only affects what gets logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A table, matrix, or tour allocation could not be made (or would not fit in memory).
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// The instance is larger than this solver can handle, e.g. Held-Karp's subset mask
    /// running out of bits, or a solver's advisory vertex cap.
    #[error("instance of size {size} exceeds this solver's cap of {cap}")]
    SizeCap { size: usize, cap: usize },

    /// A required edge is the missing-edge sentinel, so no Hamiltonian tour (or spanning
    /// structure) exists under the current constraints.
    #[error("graph is disconnected: no usable edge between {0} and {1}")]
    Disconnected(Node, Node),

    /// A solver internally produced a tour that failed the shape invariant. This is
    /// always a bug, never user error, but is still reported rather than panicking.
    #[error("solver produced an invalid tour: {0}")]
    InvariantViolation(String),

    /// A lower bound's iterative refinement degenerated, e.g. Held-Karp's Lagrangian
    /// subgradient search never observed a finite dual value.
    #[error("numerical degeneracy in lower bound computation: {0}")]
    NumericalDegeneracy(String),
}
