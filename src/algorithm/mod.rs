//! # Algorithms
use crate::error::{SingularBasis, Unbounded};

pub mod simplex;

/// The reason a run of the simplex method stopped.
///
/// Only `Optimal` means that the last tableau holds a solution of the problem.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Termination {
    /// No variable improves the objective in the last tableau.
    Optimal,
    /// The last tableau has an improving column without a positive entry.
    Unbounded(Unbounded),
    /// The maximum number of basis changes was made. The last tableau might not be optimal.
    IterationLimitReached,
    /// A basis was encountered for which no tableau could be built. The last tableau, if any, is
    /// the one that led to that basis.
    SingularBasis(SingularBasis),
}
