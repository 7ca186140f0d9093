//! # Dense matrix
//!
//! A row-major matrix of fixed dimensions, supporting the few operations the simplex tableau
//! needs: assembly from columns, inversion and multiplication with a vector.
use std::fmt;
use std::fmt::Display;
use std::slice::Iter;

use itertools::Itertools;

use crate::data::linear_algebra::SingularMatrix;
use crate::data::linear_algebra::vector::Dense;
use crate::data::number_types::traits::Real;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Real> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same length.
    /// * `nr_columns`: Length of each row. Needed to describe matrices without rows.
    pub fn from_data(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        let nr_rows = data.len();
        Self { data, nr_rows, nr_columns }
    }

    /// Create a matrix by placing vectors of equal length side by side.
    ///
    /// # Arguments
    ///
    /// * `columns`: Columns of the new matrix, in order.
    /// * `nr_rows`: Length of each of the columns.
    pub fn from_columns<'a>(columns: impl IntoIterator<Item = &'a Dense<F>>, nr_rows: usize) -> Self
    where
        F: 'a,
    {
        let columns = columns.into_iter().collect::<Vec<_>>();
        debug_assert!(columns.iter().all(|column| column.len() == nr_rows));

        let data = (0..nr_rows)
            .map(|i| columns.iter().map(|column| column[i]).collect())
            .collect();

        Self::from_data(data, columns.len())
    }

    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::from_data(vec![vec![F::zero(); columns]; rows], columns)
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.data[i][i] = F::one();
        }

        matrix
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Dense<F> {
        debug_assert!(j < self.nr_columns);

        Dense::new(self.data.iter().map(|row| row[j]).collect(), self.nr_rows)
    }

    /// Multiply row `i` with a factor `factor`.
    fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] + factor * read;
        }
    }

    /// Compute the inverse of this square matrix.
    ///
    /// Gauss-Jordan elimination with partial pivoting. The rows are first scaled to a largest
    /// absolute value of one, and a pivot is zero when it is small relative to the largest value in
    /// its (scaled) column. Scaling a row or a column of the matrix therefore doesn't change whether
    /// it is considered singular.
    ///
    /// # Errors
    ///
    /// If, within tolerance, no nonzero pivot can be found for one of the columns.
    pub fn inverse(&self) -> Result<Self, SingularMatrix> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        let size = self.nr_rows;
        let mut work = self.clone();
        // Solving `D A X = D` for the row scaling `D` gives the inverse of `A`
        let mut inverse = Self::identity(size);
        for i in 0..size {
            let factor = row_scaling(&work.data[i]);
            work.multiply_row(i, factor);
            inverse.multiply_row(i, factor);
        }
        let column_scales = (0..size)
            .map(|j| work.data.iter().map(|row| row[j].abs()).fold(F::zero(), F::max))
            .collect::<Vec<_>>();

        for column in 0..size {
            let pivot_row = (column..size)
                .max_by(|&a, &b| {
                    work.data[a][column].abs()
                        .partial_cmp(&work.data[b][column].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .filter(|&row| {
                    !work.data[row][column].is_approximately_zero_relative_to(column_scales[column])
                })
                .ok_or(SingularMatrix { size, column })?;

            work.data.swap(pivot_row, column);
            inverse.data.swap(pivot_row, column);

            let factor = F::one() / work.data[column][column];
            work.multiply_row(column, factor);
            inverse.multiply_row(column, factor);

            for row in (0..size).filter(|&row| row != column) {
                let factor = -work.data[row][column];
                if factor != F::zero() {
                    work.mul_add_rows(column, row, factor);
                    inverse.mul_add_rows(column, row, factor);
                }
            }
        }

        Ok(inverse)
    }

    /// Matrix-vector product.
    ///
    /// # Arguments
    ///
    /// * `vector`: Vector of length `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// Vector of length `self.nr_rows()`.
    pub fn mul_vector(&self, vector: &Dense<F>) -> Dense<F> {
        debug_assert_eq!(vector.len(), self.nr_columns);

        let data = self.data.iter()
            .map(|row| row.iter().zip(vector.iter_values()).map(|(&a, &b)| a * b).sum())
            .collect();

        Dense::new(data, self.nr_rows)
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

/// Factor that scales a row to a largest absolute value of one.
///
/// A row of zeros is left as it is; elimination reports it.
pub(super) fn row_scaling<F: Real>(row: &[F]) -> F {
    let largest = row.iter().map(|value| value.abs()).fold(F::zero(), F::max);
    if largest > F::zero() {
        F::one() / largest
    } else {
        F::one()
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_algebra::SingularMatrix;
    use crate::data::linear_algebra::vector::Dense;

    fn matrix(data: Vec<Vec<f64>>) -> DenseMatrix<f64> {
        let nr_columns = data[0].len();
        DenseMatrix::from_data(data, nr_columns)
    }

    #[test]
    fn from_columns() {
        let columns = vec![Dense::from(vec![1f64, 2f64]), Dense::from(vec![3f64, 4f64])];
        let m = DenseMatrix::from_columns(&columns, 2);
        assert_eq!(m, matrix(vec![vec![1f64, 3f64], vec![2f64, 4f64]]));
        assert_eq!(m.column(1), columns[1]);
    }

    #[test]
    fn inverse() {
        let m = matrix(vec![
            vec![0f64, 2f64, 1f64],
            vec![1f64, 0f64, 0f64],
            vec![3f64, 1f64, 1f64],
        ]);
        let inverse = m.inverse().unwrap();

        for j in 0..3 {
            let product = m.mul_vector(&inverse.column(j));
            for i in 0..3 {
                let expected = if i == j { 1f64 } else { 0f64 };
                assert_abs_diff_eq!(product[i], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn inverse_needs_row_swap() {
        let m = matrix(vec![vec![0f64, 1f64], vec![1f64, 0f64]]);
        assert_eq!(m.inverse(), Ok(m.clone()));
    }

    #[test]
    fn singular() {
        let m = matrix(vec![vec![1f64, 2f64], vec![2f64, 4f64]]);
        assert_eq!(m.inverse(), Err(SingularMatrix { size: 2, column: 1 }));
    }

    #[test]
    fn scaled_rows_and_columns() {
        let m = matrix(vec![vec![1e-11f64, 2e-11f64], vec![3f64, 1f64]]);
        let inverse = m.inverse().unwrap();
        for j in 0..2 {
            let product = m.mul_vector(&inverse.column(j));
            for i in 0..2 {
                let expected = if i == j { 1f64 } else { 0f64 };
                assert_abs_diff_eq!(product[i], expected, epsilon = 1e-12);
            }
        }

        let m = matrix(vec![vec![1e-11f64]]);
        assert_relative_eq!(m.inverse().unwrap().get_value(0, 0), 1e11f64, max_relative = 1e-12);

        let m = matrix(vec![vec![1e-11f64, 2e-11f64], vec![2e-11f64, 4e-11f64]]);
        assert_eq!(m.inverse(), Err(SingularMatrix { size: 2, column: 1 }));
    }

    #[test]
    fn mul_vector() {
        let m = matrix(vec![vec![1f64, 2f64, 0f64], vec![0f64, -1f64, 3f64]]);
        let v = Dense::from(vec![1f64, 1f64, 2f64]);
        assert_eq!(m.mul_vector(&v), Dense::from(vec![3f64, 5f64]));
    }
}
