//! # Representation of solutions
//!
//! The values read off a tableau: the objective function value and the value of each basic
//! variable. Non-basic variables are zero and are not listed.
use std::fmt;
use std::fmt::Display;

use crate::data::number_types::traits::Real;

/// Basic solution of a linear program.
///
/// This struct would probably be used to print the optimal solution for the user.
#[derive(PartialEq, Debug, Clone)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    pub objective_value: F,
    /// (variable index, solution value) tuples for all basic variables, sorted by index.
    pub basic_values: Vec<(usize, F)>,
}

impl<F: Real> Solution<F> {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: F, basic_values: Vec<(usize, F)>) -> Self {
        debug_assert!(basic_values.windows(2).all(|w| w[0].0 < w[1].0));

        Self { objective_value, basic_values }
    }

    /// Value of a variable in this solution, zero if it is not basic.
    pub fn value(&self, variable: usize) -> F {
        self.basic_values.iter()
            .find(|&&(index, _)| index == variable)
            .map_or_else(F::zero, |&(_, value)| value)
    }
}

/// Rounded to two decimals.
impl<F: Real> Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "F(X) = {}", self.objective_value.round_for_display())?;
        for (index, value) in &self.basic_values {
            writeln!(f, "x{} = {}", index, value.round_for_display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::Solution;

    #[test]
    fn value_and_display() {
        let solution = Solution::new(12.004f64, vec![(0, 4f64), (3, 1f64 / 3f64)]);

        assert_eq!(solution.value(0), 4f64);
        assert_eq!(solution.value(1), 0f64);
        assert_eq!(solution.to_string(), "F(X) = 12\nx0 = 4\nx3 = 0.33\n");
    }
}
