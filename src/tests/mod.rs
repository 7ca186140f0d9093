//! # Problems shared between the unit tests of different modules.
//!
//! Convention for function names:
//!
//! * `fn problem()`: the main problem, with a feasible starting basis.
//! * `fn <variant>_problem()`: a small modification showing a specific behavior.
//!
//! Also holds assertions that every tableau should satisfy.
use approx::assert_abs_diff_eq;

use crate::algorithm::simplex::logic::Trace;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_algebra::vector::Dense;

pub mod problem_2;

/// The decomposition columns of the basic variables form an identity matrix.
pub fn assert_identity_columns(tableau: &Tableau<f64>) {
    for (i, &j) in tableau.basis_indices().iter().enumerate() {
        for k in 0..tableau.nr_rows() {
            let expected = if k == i { 1f64 } else { 0f64 };
            assert_eq!(tableau.decomposition_value(k, j), expected);
        }
    }
}

/// The basic values solve the system formed by the basis columns.
pub fn assert_consistent_basic_values(tableau: &Tableau<f64>, rhs: &Dense<f64>) {
    let product = tableau.basis_matrix().mul_vector(tableau.basic_values());
    for i in 0..rhs.len() {
        assert_abs_diff_eq!(product[i], rhs[i], epsilon = 1e-9);
    }
}

/// Both of the above, for every tableau of a run.
pub fn assert_consistent_trace(trace: &Trace<f64>, rhs: &Dense<f64>) {
    for step in trace.steps() {
        assert_identity_columns(&step.tableau);
        assert_consistent_basic_values(&step.tableau, rhs);
    }
}
