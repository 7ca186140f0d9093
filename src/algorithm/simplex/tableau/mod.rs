//! # The simplex tableau
//!
//! A snapshot of one iteration of the simplex method: the basis, the decomposition of every column
//! of the problem in terms of the basis columns, and the values of the basic variables. A tableau
//! is immutable; changing the basis means building a new one.
use std::fmt;
use std::fmt::Display;

use itertools::repeat_n;

use crate::algorithm::simplex::strategy::pivot_rule::{LargestCoefficient, PivotRule};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::slae::{GaussianElimination, Slae};
use crate::data::linear_algebra::vector::Dense;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Real;
use crate::error::{SingularBasis, Unbounded};

/// A basis change: one variable enters the basis, another leaves it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Pivot {
    /// Index of the variable that enters the basis.
    pub entering: usize,
    /// Index of the variable that leaves the basis.
    pub leaving: usize,
}

/// The simplex tableau belonging to a single basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Variables in the basis, sorted. Row `i` of the tableau belongs to `basis_indices[i]`.
    basis_indices: Vec<usize>,
    /// Cost coefficient of every variable.
    costs: Dense<F>,
    /// The `m x m` matrix of basis columns, in the order of `basis_indices`.
    basis_matrix: DenseMatrix<F>,
    /// Of size `m x n`, column `j` expresses column `j` of the problem in the basis columns.
    decomposition: DenseMatrix<F>,
    /// Current values of the basic variables, in the order of `basis_indices`.
    basic_values: Dense<F>,
    /// Per column of `decomposition`, the magnitude of the terms its values were computed from.
    column_magnitudes: Dense<F>,
    /// Per basic variable, the magnitude of the terms its value was computed from.
    value_magnitudes: Dense<F>,
}

impl<F: Real> Tableau<F> {
    /// Create the tableau for a basis.
    ///
    /// # Arguments
    ///
    /// * `activity_vectors`: All `n` columns of the constraint matrix, each of length `m`.
    /// * `basis`: `m` distinct variable indices, in any order.
    /// * `costs`: Cost coefficients, length `n`.
    /// * `rhs`: Constraint right-hand side, length `m`.
    ///
    /// # Errors
    ///
    /// If the basis columns are linearly dependent.
    pub fn new(
        activity_vectors: &[Dense<F>],
        basis: &[usize],
        costs: &Dense<F>,
        rhs: &Dense<F>,
    ) -> Result<Self, SingularBasis> {
        let nr_rows = rhs.len();
        let nr_columns = activity_vectors.len();
        debug_assert_eq!(basis.len(), nr_rows);
        debug_assert_eq!(costs.len(), nr_columns);
        debug_assert!(activity_vectors.iter().all(|column| column.len() == nr_rows));
        debug_assert!(basis.iter().all(|&j| j < nr_columns));

        let mut basis_indices = basis.to_vec();
        basis_indices.sort_unstable();
        debug_assert!(basis_indices.windows(2).all(|w| w[0] < w[1]));

        let basis_matrix = DenseMatrix::from_columns(
            basis_indices.iter().map(|&j| &activity_vectors[j]),
            nr_rows,
        );
        let singular = || SingularBasis { basis: basis_indices.clone() };

        let inverse = basis_matrix.inverse().map_err(|_| singular())?;
        let mut decomposition = DenseMatrix::zeros(nr_rows, nr_columns);
        let mut column_magnitudes = Dense::constant(F::one(), nr_columns);
        for (j, column) in activity_vectors.iter().enumerate() {
            match basis_indices.binary_search(&j) {
                // Identity columns are written directly, computing them only introduces errors
                Ok(row) => decomposition.set_value(row, j, F::one()),
                Err(_) => {
                    let expressed = inverse.mul_vector(column);
                    for (i, &value) in expressed.iter_values().enumerate() {
                        decomposition.set_value(i, j, value);
                    }
                    column_magnitudes[j] = term_magnitudes(&inverse, column)
                        .iter_values()
                        .fold(F::zero(), |largest, &magnitude| largest.max(magnitude));
                },
            }
        }
        let value_magnitudes = term_magnitudes(&inverse, rhs);

        let system = Slae::new(basis_matrix.clone(), rhs.clone());
        let basic_values = GaussianElimination::solve(&system).map_err(|_| singular())?;

        Ok(Self {
            basis_indices,
            costs: costs.clone(),
            basis_matrix,
            decomposition,
            basic_values,
            column_magnitudes,
            value_magnitudes,
        })
    }

    /// Calculates the reduced cost ("delta") of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column to calculate the reduced cost for, in range `0` until
    /// `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// `sum_i c_B(i) * decomposition(i, j) - c_j`. Zero for basic variables.
    pub fn reduced_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        let basic_part = self.basis_indices.iter()
            .enumerate()
            .map(|(i, &basic)| self.costs[basic] * self.decomposition.get_value(i, j))
            .sum::<F>();

        basic_part - self.costs[j]
    }

    /// Whether bringing variable `j` into the basis would improve the objective.
    ///
    /// For maximization the reduced cost must be negative, for minimization positive. A reduced
    /// cost within tolerance of zero is never improving, where the tolerance is relative to the
    /// terms of the reduced cost.
    pub fn is_improving(&self, j: usize, direction: Objective) -> bool {
        let cost = self.reduced_cost(j);
        let magnitude = self.reduced_cost_magnitude(j);
        match direction {
            Objective::Maximize => cost.is_strictly_negative_relative_to(magnitude),
            Objective::Minimize => cost.is_strictly_positive_relative_to(magnitude),
        }
    }

    /// Sum of the absolute values of the terms of `reduced_cost(j)`.
    fn reduced_cost_magnitude(&self, j: usize) -> F {
        self.basis_indices.iter()
            .enumerate()
            .map(|(i, &basic)| (self.costs[basic] * self.decomposition.get_value(i, j)).abs())
            .sum::<F>() + self.costs[j].abs()
    }

    /// Whether all basic variables are nonnegative, within tolerance.
    pub fn is_primal_feasible(&self) -> bool {
        self.basic_values.iter_values()
            .zip(self.value_magnitudes.iter_values())
            .all(|(&value, &magnitude)| !value.is_strictly_negative_relative_to(magnitude))
    }

    /// Value of the objective function in the current basic solution.
    pub fn objective_function_value(&self) -> F {
        self.basis_indices.iter()
            .zip(self.basic_values.iter_values())
            .map(|(&j, &value)| self.costs[j] * value)
            .sum()
    }

    /// Determine the pivot using the largest coefficient rule.
    ///
    /// # Return value
    ///
    /// `None` if no variable improves the objective, which means that this tableau is optimal.
    ///
    /// # Errors
    ///
    /// When an improving column is found that has no positive value, the problem is unbounded.
    pub fn select_pivot(&self, direction: Objective) -> Result<Option<Pivot>, Unbounded> {
        self.select_pivot_with(&mut LargestCoefficient::new(), direction)
    }

    /// Determine the pivot, choosing the entering column using the provided rule.
    ///
    /// See `select_pivot`.
    pub fn select_pivot_with<PR: PivotRule>(
        &self,
        rule: &mut PR,
        direction: Objective,
    ) -> Result<Option<Pivot>, Unbounded> {
        let Some(entering) = rule.select_entering_column(self, direction) else {
            return Ok(None);
        };

        match self.select_leaving_row(entering) {
            Some(row) => Ok(Some(Pivot { entering, leaving: self.basis_indices[row] })),
            None => Err(Unbounded { entering, basis: self.basis_indices.clone() }),
        }
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the basic value and the column value, among
    /// the rows where the column value is positive. Ties go to the first such row. Positivity is
    /// judged relative to the magnitude of the column.
    ///
    /// # Arguments
    ///
    /// * `entering`: Index of the column that will enter the basis.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_leaving_row(&self, entering: usize) -> Option<usize> {
        debug_assert!(entering < self.nr_columns());

        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.decomposition.get_value(row, entering);
            if xij.is_strictly_positive_relative_to(self.column_magnitudes[entering]) {
                let ratio = self.basic_values[row] / xij;
                // Strict comparison, the first row wins a tie
                if min_values.as_ref().is_none_or(|(_, min_ratio)| ratio < *min_ratio) {
                    min_values = Some((row, ratio));
                }
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Variable index and its value for row `i` of the tableau.
    pub fn basis_row(&self, i: usize) -> (usize, F) {
        debug_assert!(i < self.nr_rows());

        (self.basis_indices[i], self.basic_values[i])
    }

    /// Variables in the basis, sorted.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_indices.binary_search(&column).is_ok()
    }

    /// Entry `(i, j)` of the decomposition.
    pub fn decomposition_value(&self, i: usize, j: usize) -> F {
        self.decomposition.get_value(i, j)
    }

    /// The matrix of basis columns.
    pub fn basis_matrix(&self) -> &DenseMatrix<F> {
        &self.basis_matrix
    }

    /// Values of the basic variables, in basis order.
    pub fn basic_values(&self) -> &Dense<F> {
        &self.basic_values
    }

    /// The full basic solution, in which non-basic variables are zero.
    pub fn current_solution(&self) -> Dense<F> {
        let mut solution = Dense::zeros(self.nr_columns());
        for (&j, &value) in self.basis_indices.iter().zip(self.basic_values.iter_values()) {
            solution[j] = value;
        }

        solution
    }

    /// The objective value and the values of the basic variables.
    pub fn solution(&self) -> Solution<F> {
        Solution::new(
            self.objective_function_value(),
            (0..self.nr_rows()).map(|i| self.basis_row(i)).collect(),
        )
    }

    /// Number of rows in the tableau, the size of the basis.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of variables in the problem.
    pub fn nr_columns(&self) -> usize {
        self.costs.len()
    }
}

/// Per row of `inverse * vector`, the sum of the absolute values of its terms.
///
/// Rounding errors in a row of the product are proportional to this value.
fn term_magnitudes<F: Real>(inverse: &DenseMatrix<F>, vector: &Dense<F>) -> Dense<F> {
    let magnitudes = (0..inverse.nr_rows())
        .map(|i| {
            inverse.row(i)
                .zip(vector.iter_values())
                .map(|(&a, &b)| (a * b).abs())
                .sum::<F>()
        })
        .collect::<Vec<_>>();

    magnitudes.into()
}

/// Fixed width rendering with values rounded to two decimals.
///
/// The columns are the row number, the basic variable, its cost, its value and the decomposition.
/// The last row holds the objective value and the reduced costs.
impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let counter_width = 2;
        let column_width = 5;
        let length = 2 * (counter_width + 1) + 2 * (column_width + 1) + 1
            + self.nr_columns() * (column_width + 1);
        let line = |c| repeat_n(c, length).collect::<String>();

        writeln!(f, "{}", line('*'))?;
        writeln!(f, "*{:^width$}*", "Simplex Table", width = length - 2)?;
        writeln!(f, "{}", line('*'))?;

        write!(f, "*{:>cw$}*{:>cw$}*{:>w$}*{:>w$}*", "#", "B", "CB", "A0", cw = counter_width, w = column_width)?;
        for j in 0..self.nr_columns() {
            write!(f, "{:>w$}*", j, w = column_width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", line('*'))?;

        for i in 0..self.nr_rows() {
            let (basic, value) = self.basis_row(i);
            write!(
                f, "|{:>cw$}|{:>cw$}|{:>w$}|{:>w$}|",
                i, basic, self.costs[basic].round_for_display(), value.round_for_display(),
                cw = counter_width, w = column_width,
            )?;
            for j in 0..self.nr_columns() {
                write!(f, "{:>w$}|", self.decomposition.get_value(i, j).round_for_display(), w = column_width)?;
            }
            writeln!(f)?;
            writeln!(f, "{}", line('-'))?;
        }

        write!(
            f, "|{:>cw$}|{:>cw$}|{:>w$}|{:>w$}|",
            "", "", "", self.objective_function_value().round_for_display(),
            cw = counter_width, w = column_width,
        )?;
        for j in 0..self.nr_columns() {
            write!(f, "{:>w$}|", self.reduced_cost(j).round_for_display(), w = column_width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", line('-'))
    }
}
