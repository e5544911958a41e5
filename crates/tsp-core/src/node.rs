use std::ops::{Add, Sub};

/// A vertex index into a [`crate::Graph`] of `N` vertices, indexed `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(pub usize);

impl Add<usize> for Node {
    type Output = Node;

    fn add(self, rhs: usize) -> Self::Output {
        Node(self.0 + rhs)
    }
}

impl Sub<usize> for Node {
    type Output = Node;

    fn sub(self, rhs: usize) -> Self::Output {
        Node(self.0 - rhs)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
