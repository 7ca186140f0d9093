//! # Linear algebra primitives
//!
//! Dense vectors and matrices, and a solver for systems of linear equations. Only what the tableau
//! needs is provided: matrix inversion, matrix-vector multiplication and solving a square system.
use thiserror::Error;

pub mod matrix;
pub mod slae;
pub mod vector;

/// Relative tolerance. A value is treated as zero when its absolute value is at most this number
/// times the magnitude of the terms it was computed from.
pub const EPSILON: f64 = 1e-10;

/// A square matrix could not be inverted, or a system of equations has no unique solution.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("matrix of size {size} x {size} is singular (no pivot found in column {column})")]
pub struct SingularMatrix {
    /// Number of rows (and columns) of the matrix.
    pub size: usize,
    /// Column in which elimination failed to find a nonzero pivot.
    pub column: usize,
}
