//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use crate::data::number_types::traits::Real;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F: Real> Dense<F> {
    /// Create a `Dense` vector from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Values of the vector.
    /// * `len`: Length of the vector, should equal the length of `data`.
    pub fn new(data: Vec<F>, len: usize) -> Self {
        debug_assert_eq!(data.len(), len);

        Self { data }
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: F, len: usize) -> Self {
        Self { data: vec![value; len] }
    }

    /// Vector of zeros.
    pub fn zeros(len: usize) -> Self {
        Self::constant(F::zero(), len)
    }

    /// Iterate over the values of this vector.
    pub fn iter_values(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<F: Real> From<Vec<F>> for Dense<F> {
    fn from(data: Vec<F>) -> Self {
        let len = data.len();
        Self::new(data, len)
    }
}

impl<F: Real> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl<F: Real> IndexMut<usize> for Dense<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len());

        &mut self.data[index]
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
