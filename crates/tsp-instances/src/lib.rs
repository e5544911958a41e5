/*!
Graph-instance factories for the TSP workbench's test and benchmark suites: hand-coded
matrix literals, Euclidean point-set generators, and a TSPLIB-style parser subset covering
the `NODE_COORD_SECTION` / `EDGE_WEIGHT_TYPE: EUC_2D` format used by the instances this
workbench is compared against.

This crate is deliberately outside the core's contract: the core only ever consumes a
[`tsp_core::Graph`], never knows this crate exists, and nothing here is on the solving hot
path.
*/

use thiserror::Error;
use tsp_core::{DenseGraph, EdgeWeight, Node};

#[derive(Error, Debug)]
pub enum InstanceError {
    #[error("matrix must be square, got {rows} rows and {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("TSPLIB file is missing required header field {0}")]
    MissingHeader(&'static str),

    #[error("TSPLIB file declares an unsupported EDGE_WEIGHT_TYPE: {0}")]
    UnsupportedWeightType(String),

    #[error("TSPLIB file's NODE_COORD_SECTION has {found} entries, expected {expected}")]
    WrongCoordinateCount { found: usize, expected: usize },

    #[error("malformed TSPLIB line: {0}")]
    Malformed(String),
}

/// Builds a graph from a hand-coded, row-major, symmetric N x N distance matrix.
pub fn from_matrix(matrix: &[Vec<f64>]) -> Result<DenseGraph, InstanceError> {
    let n = matrix.len();
    for (row_idx, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(InstanceError::NotSquare {
                rows: n,
                cols: row.len(),
            });
        }
    }

    let flattened: Vec<EdgeWeight> = matrix
        .iter()
        .flat_map(|row| row.iter().map(|&w| EdgeWeight::finite(w)))
        .collect();
    Ok(DenseGraph::from_matrix(flattened, n))
}

/// A 2-D Euclidean point set; `weight(u, v)` is the Euclidean distance, as TSPLIB's
/// `EDGE_WEIGHT_TYPE: EUC_2D` defines it.
#[derive(Debug, Clone)]
pub struct EuclideanInstance {
    pub points: Vec<(f64, f64)>,
}

impl EuclideanInstance {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        EuclideanInstance { points }
    }

    pub fn to_graph(&self) -> DenseGraph {
        let points = &self.points;
        DenseGraph::from_fn(points.len(), |u, v| {
            let (x1, y1) = points[u.0];
            let (x2, y2) = points[v.0];
            EdgeWeight::finite(((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
        })
    }
}

/// Deterministic pseudo-random Euclidean point set on `[0, scale) x [0, scale)`, using a
/// linear congruential generator rather than pulling in a dependency on `rand` purely to
/// place points for a fixture (the solvers' own randomised moves go through `rand`
/// properly, see `tsp-solvers::metaheuristics`).
pub fn random_euclidean_instance(n: usize, scale: f64, seed: u64) -> EuclideanInstance {
    let mut state = seed.max(1);
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as f64) / (u32::MAX as f64)
    };
    let points = (0..n).map(|_| (next() * scale, next() * scale)).collect();
    EuclideanInstance::new(points)
}

/// Parses the subset of the TSPLIB format this workbench's test fixtures use: a header with
/// `DIMENSION` and `EDGE_WEIGHT_TYPE: EUC_2D`, followed by `NODE_COORD_SECTION`.
pub fn parse_tsplib_euc_2d(contents: &str) -> Result<DenseGraph, InstanceError> {
    let mut dimension: Option<usize> = None;
    let mut weight_type: Option<String> = None;
    let mut coordinates: Vec<(f64, f64)> = Vec::new();
    let mut in_coord_section = false;

    for raw_line in contents.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line == "EOF" {
            continue;
        }

        if in_coord_section {
            if line == "NODE_COORD_SECTION" {
                continue;
            }
            let mut fields = line.split_whitespace();
            let _index = fields.next().ok_or_else(|| InstanceError::Malformed(raw_line.to_string()))?;
            let x: f64 = fields
                .next()
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| InstanceError::Malformed(raw_line.to_string()))?;
            let y: f64 = fields
                .next()
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| InstanceError::Malformed(raw_line.to_string()))?;
            coordinates.push((x, y));
            continue;
        }

        if line == "NODE_COORD_SECTION" {
            in_coord_section = true;
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            let value = value.trim();
            match key {
                "DIMENSION" => {
                    dimension = value.parse().ok();
                }
                "EDGE_WEIGHT_TYPE" => {
                    weight_type = Some(value.to_string());
                }
                _ => {}
            }
        }
    }

    let dimension = dimension.ok_or(InstanceError::MissingHeader("DIMENSION"))?;
    let weight_type = weight_type.ok_or(InstanceError::MissingHeader("EDGE_WEIGHT_TYPE"))?;
    if weight_type != "EUC_2D" {
        return Err(InstanceError::UnsupportedWeightType(weight_type));
    }
    if coordinates.len() != dimension {
        return Err(InstanceError::WrongCoordinateCount {
            found: coordinates.len(),
            expected: dimension,
        });
    }

    Ok(EuclideanInstance::new(coordinates).to_graph())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::Graph;

    #[test]
    fn matrix_literal_round_trips_into_a_graph() {
        let matrix = vec![
            vec![0.0, 1.0, 2.0, 1.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![1.0, 2.0, 1.0, 0.0],
        ];
        let graph = from_matrix(&matrix).unwrap();
        assert_eq!(graph.edge_weight(Node(0), Node(2)).value(), Some(2.0));
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(from_matrix(&matrix).is_err());
    }

    #[test]
    fn non_square_error_reports_the_offending_rows_actual_length() {
        let matrix = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0], vec![2.0]];
        match from_matrix(&matrix) {
            Err(InstanceError::NotSquare { rows, cols }) => {
                assert_eq!(rows, 3);
                assert_eq!(cols, 1);
            }
            other => panic!("expected NotSquare, got {other:?}"),
        }
    }

    #[test]
    fn random_euclidean_instance_is_deterministic_under_the_same_seed() {
        let a = random_euclidean_instance(10, 100.0, 42);
        let b = random_euclidean_instance(10, 100.0, 42);
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn parses_a_minimal_euc_2d_instance() {
        let text = "NAME: demo\nDIMENSION: 3\nEDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n1 0.0 0.0\n2 3.0 0.0\n3 0.0 4.0\nEOF\n";
        let graph = parse_tsplib_euc_2d(text).unwrap();
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.edge_weight(Node(0), Node(1)).value(), Some(3.0));
        assert_eq!(graph.edge_weight(Node(0), Node(2)).value(), Some(4.0));
    }

    #[test]
    fn rejects_unsupported_weight_types() {
        let text = "DIMENSION: 2\nEDGE_WEIGHT_TYPE: ATT\nNODE_COORD_SECTION\n1 0 0\n2 1 1\nEOF\n";
        assert!(matches!(
            parse_tsplib_euc_2d(text),
            Err(InstanceError::UnsupportedWeightType(_))
        ));
    }
}
