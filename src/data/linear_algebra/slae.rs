//! # Systems of linear algebraic equations
//!
//! A square system `A x = b` and a direct solver for it.
use crate::data::linear_algebra::SingularMatrix;
use crate::data::linear_algebra::matrix::{DenseMatrix, row_scaling};
use crate::data::linear_algebra::vector::Dense;
use crate::data::number_types::traits::Real;

/// A square matrix paired with a right-hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct Slae<F> {
    matrix: DenseMatrix<F>,
    rhs: Dense<F>,
}

impl<F: Real> Slae<F> {
    /// Create a new system.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Square coefficient matrix.
    /// * `rhs`: Right-hand side with a length equal to the size of the matrix.
    pub fn new(matrix: DenseMatrix<F>, rhs: Dense<F>) -> Self {
        debug_assert_eq!(matrix.nr_rows(), matrix.nr_columns());
        debug_assert_eq!(matrix.nr_rows(), rhs.len());

        Self { matrix, rhs }
    }

    /// Number of equations, equal to the number of unknowns.
    pub fn size(&self) -> usize {
        self.rhs.len()
    }
}

/// Gaussian elimination with partial pivoting, followed by back substitution.
pub struct GaussianElimination;

impl GaussianElimination {
    /// Solve a square system.
    ///
    /// Singularity is decided the same way as in `DenseMatrix::inverse`, relative to the scale of
    /// the rows and columns.
    ///
    /// # Return value
    ///
    /// The unique solution `x` of `A x = b`.
    ///
    /// # Errors
    ///
    /// If the coefficient matrix is singular, within tolerance.
    pub fn solve<F: Real>(system: &Slae<F>) -> Result<Dense<F>, SingularMatrix> {
        let size = system.size();
        // Augmented matrix [A | b], rows scaled by their largest coefficient
        let mut rows = (0..size)
            .map(|i| {
                let mut row = system.matrix.row(i).copied().collect::<Vec<_>>();
                let factor = row_scaling(&row);
                row.push(system.rhs[i]);
                row.iter_mut().for_each(|value| *value = *value * factor);
                row
            })
            .collect::<Vec<_>>();
        let column_scales = (0..size)
            .map(|j| rows.iter().map(|row| row[j].abs()).fold(F::zero(), F::max))
            .collect::<Vec<_>>();

        for k in 0..size {
            let mut pivot_row = k;
            for i in (k + 1)..size {
                if rows[i][k].abs() > rows[pivot_row][k].abs() {
                    pivot_row = i;
                }
            }
            if rows[pivot_row][k].is_approximately_zero_relative_to(column_scales[k]) {
                return Err(SingularMatrix { size, column: k });
            }
            rows.swap(pivot_row, k);

            for i in (k + 1)..size {
                let factor = rows[i][k] / rows[k][k];
                if factor != F::zero() {
                    for j in k..=size {
                        let subtract = factor * rows[k][j];
                        rows[i][j] = rows[i][j] - subtract;
                    }
                }
            }
        }

        let mut solution = Dense::zeros(size);
        for i in (0..size).rev() {
            let tail = ((i + 1)..size).map(|j| rows[i][j] * solution[j]).sum::<F>();
            solution[i] = (rows[i][size] - tail) / rows[i][i];
        }

        Ok(solution)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_algebra::slae::{GaussianElimination, Slae};
    use crate::data::linear_algebra::vector::Dense;

    #[test]
    fn solve() {
        let matrix = DenseMatrix::from_data(vec![
            vec![2f64, 1f64, -1f64],
            vec![-3f64, -1f64, 2f64],
            vec![-2f64, 1f64, 2f64],
        ], 3);
        let system = Slae::new(matrix, Dense::from(vec![8f64, -11f64, -3f64]));
        let x = GaussianElimination::solve(&system).unwrap();

        assert_relative_eq!(x[0], 2f64, epsilon = 1e-12);
        assert_relative_eq!(x[1], 3f64, epsilon = 1e-12);
        assert_relative_eq!(x[2], -1f64, epsilon = 1e-12);
    }

    #[test]
    fn singular() {
        let matrix = DenseMatrix::from_data(vec![vec![1f64, 1f64], vec![1f64, 1f64]], 2);
        let system = Slae::new(matrix, Dense::from(vec![1f64, 2f64]));
        assert!(GaussianElimination::solve(&system).is_err());
    }

    #[test]
    fn small_coefficients() {
        let matrix = DenseMatrix::from_data(vec![vec![1e-11f64, 0f64], vec![0f64, 1f64]], 2);
        let system = Slae::new(matrix, Dense::from(vec![1f64, 3f64]));
        let x = GaussianElimination::solve(&system).unwrap();

        assert_relative_eq!(x[0], 1e11f64, max_relative = 1e-12);
        assert_relative_eq!(x[1], 3f64);
    }
}
