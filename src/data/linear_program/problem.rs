//! # Problem definition
//!
//! A linear program in equality form, `optimize c x s.t. A x = b, x >= 0`, together with a basis
//! to start the simplex method from. The constraint matrix is stored column-wise: the tableau only
//! ever needs whole columns.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

use crate::data::linear_algebra::vector::Dense;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::Real;
use crate::error::SimplexError;

/// A validated linear program with an initial basis.
///
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<F> {
    /// Column `j` of the constraint matrix, one for each variable, each of length `m`.
    activity_vectors: Vec<Dense<F>>,
    /// Constraint right-hand side `b`, length `m`.
    rhs: Dense<F>,
    /// Cost coefficients `c`, length `n`.
    objective: Dense<F>,
    direction: Objective,
    /// `m` distinct variable indices, in the order provided by the caller.
    start_basis: Vec<usize>,
}

impl<F: Real> Problem<F> {
    /// Create a new problem from a row-major constraint matrix.
    ///
    /// # Arguments
    ///
    /// * `constraints`: `m` rows, each with the `n` coefficients of a constraint followed by its
    /// right-hand side.
    /// * `objective`: `n` cost coefficients.
    /// * `start_basis`: `m` distinct variable indices in range `0` until `n`.
    /// * `direction`: Whether to maximize or minimize.
    ///
    /// # Errors
    ///
    /// `SimplexError::InvalidInput` when the dimensions don't match, the basis contains an index
    /// out of range or twice, or a value is not finite. Whether the basis columns are independent
    /// is only discovered once a tableau is built.
    pub fn new(
        constraints: Vec<Vec<F>>,
        objective: Vec<F>,
        start_basis: Vec<usize>,
        direction: Objective,
    ) -> Result<Self, SimplexError> {
        let nr_variables = objective.len();
        let nr_constraints = constraints.len();

        if nr_variables == 0 {
            return Err(invalid("there should be at least one variable"));
        }
        if nr_constraints == 0 {
            return Err(invalid("there should be at least one constraint"));
        }
        if let Some((i, row)) = constraints.iter().find_position(|row| row.len() != nr_variables + 1) {
            return Err(invalid(format!(
                "constraint {} has {} values, expected {} coefficients and a right-hand side",
                i, row.len(), nr_variables,
            )));
        }
        if constraints.iter().flatten().chain(objective.iter()).any(|value| !value.is_finite()) {
            return Err(invalid("all coefficients should be finite"));
        }
        if start_basis.len() != nr_constraints {
            return Err(invalid(format!(
                "basis has {} indices, expected one for each of the {} constraints",
                start_basis.len(), nr_constraints,
            )));
        }
        if let Some(&index) = start_basis.iter().find(|&&index| index >= nr_variables) {
            return Err(invalid(format!(
                "basis index {} is out of range, there are {} variables",
                index, nr_variables,
            )));
        }
        if let Some(index) = start_basis.iter().duplicates().next() {
            return Err(invalid(format!("basis index {} appears more than once", index)));
        }

        let activity_vectors = (0..nr_variables)
            .map(|j| Dense::new(constraints.iter().map(|row| row[j]).collect(), nr_constraints))
            .collect();
        let rhs = Dense::new(
            constraints.iter().map(|row| row[nr_variables]).collect(),
            nr_constraints,
        );

        Ok(Self {
            activity_vectors,
            rhs,
            objective: Dense::new(objective, nr_variables),
            direction,
            start_basis,
        })
    }

    /// All columns of the constraint matrix.
    pub fn activity_vectors(&self) -> &[Dense<F>] {
        &self.activity_vectors
    }

    /// Constraint right-hand side.
    pub fn rhs(&self) -> &Dense<F> {
        &self.rhs
    }

    /// Cost coefficients.
    pub fn objective(&self) -> &Dense<F> {
        &self.objective
    }

    #[allow(missing_docs)]
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// The basis as provided by the caller.
    pub fn start_basis(&self) -> &[usize] {
        &self.start_basis
    }

    /// Number of variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.activity_vectors.len()
    }

    /// Number of constraints `m`, equal to the size of a basis.
    pub fn nr_constraints(&self) -> usize {
        self.rhs.len()
    }
}

fn invalid(description: impl Into<String>) -> SimplexError {
    SimplexError::InvalidInput(description.into())
}

/// Sum of the nonzero terms `c * xj`, or `0` if there are none.
fn linear_combination<'a, F: Real + 'a>(coefficients: impl Iterator<Item = &'a F>) -> String {
    let terms = coefficients
        .enumerate()
        .filter(|(_, value)| **value != F::zero())
        .map(|(j, value)| format!("{} * x{}", value, j))
        .join(" + ");

    if terms.is_empty() { "0".to_string() } else { terms }
}

/// Human readable description of the problem.
///
/// ```text
/// F(X) = max(3 * x0 + 2 * x1)
/// Conditions:
/// 1 * x0 + 1 * x1 = 4
/// ```
impl<F: Real> Display for Problem<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "F(X) = {}({})", self.direction, linear_combination(self.objective.iter_values()))?;
        writeln!(f, "Conditions:")?;
        for i in 0..self.nr_constraints() {
            let row = self.activity_vectors.iter().map(|column| &column[i]);
            writeln!(f, "{} = {}", linear_combination(row), self.rhs[i])?;
        }

        Ok(())
    }
}
