//! # Errors of the simplex method
//!
//! Every way in which solving can end without an optimum, plus rejection of malformed input.
use thiserror::Error;

/// Describes why no optimal tableau was produced.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SimplexError {
    /// The problem description has inconsistent dimensions or indices.
    ///
    /// Returned before any tableau is built.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[allow(missing_docs)]
    #[error(transparent)]
    SingularBasis(#[from] SingularBasis),
    #[allow(missing_docs)]
    #[error(transparent)]
    Unbounded(#[from] Unbounded),
    /// No optimum was found within the configured number of basis changes.
    #[error("no optimum found within {iterations} iterations")]
    IterationLimitReached {
        /// Number of basis changes that were made.
        iterations: usize,
    },
}

/// The columns of a basis form a singular matrix, so no tableau can be built for it.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("the columns of basis {basis:?} form a singular matrix")]
pub struct SingularBasis {
    /// Variable indices of the basis, sorted.
    pub basis: Vec<usize>,
}

/// An improving column has no positive entry, so the ratio test is empty.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("the problem is unbounded: x{entering} can increase without limit from basis {basis:?}")]
pub struct Unbounded {
    /// The improving variable that could not be brought into the basis.
    pub entering: usize,
    /// Variable indices of the basis in which this was found, sorted.
    pub basis: Vec<usize>,
}
