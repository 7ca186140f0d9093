//! Three constraints with slack variables.
//!
//! ```text
//! max 3 x0 + 5 x1
//! s.t.   x0        + x2           =  4
//!             2 x1      + x3      = 12
//!        3 x0 + 2 x1           + x4 = 18
//! ```
//!
//! Starting from the slack basis, the largest coefficient rule brings in `x1`, then `x0`, reaching
//! the optimum `x0 = 2`, `x1 = 6`, `x2 = 2` with value `36`.
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;

fn constraints() -> Vec<Vec<f64>> {
    vec![
        vec![1f64, 0f64, 1f64, 0f64, 0f64, 4f64],
        vec![0f64, 2f64, 0f64, 1f64, 0f64, 12f64],
        vec![3f64, 2f64, 0f64, 0f64, 1f64, 18f64],
    ]
}

pub fn problem() -> Problem<f64> {
    Problem::new(
        constraints(),
        vec![3f64, 5f64, 0f64, 0f64, 0f64],
        vec![2, 3, 4],
        Objective::Maximize,
    ).unwrap()
}

/// The same problem, stated as minimizing the negated objective.
pub fn minimization_problem() -> Problem<f64> {
    Problem::new(
        constraints(),
        vec![-3f64, -5f64, 0f64, 0f64, 0f64],
        vec![2, 3, 4],
        Objective::Minimize,
    ).unwrap()
}
