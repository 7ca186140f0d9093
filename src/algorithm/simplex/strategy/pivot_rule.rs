//! # Pivot rules
//!
//! Strategies for choosing the variable that enters the basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::Real;

/// Deciding how to pivot.
///
/// During the simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the ratio
/// test on the tableau, independent of the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self
    where
        Self: Sized;

    /// Column selection rule.
    ///
    /// # Return value
    ///
    /// Index of the variable to bring into the basis, or `None` if no variable improves the
    /// objective (the tableau is optimal).
    fn select_entering_column<F: Real>(
        &mut self,
        tableau: &Tableau<F>,
        direction: Objective,
    ) -> Option<usize>;
}

/// Pivot on the column with the reduced cost that is largest in absolute value.
///
/// Only columns with an improving reduced cost are considered: negative when maximizing, positive
/// when minimizing. Of equally large candidates, the one with the lowest index is chosen.
pub struct LargestCoefficient;
impl PivotRule for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_entering_column<F: Real>(
        &mut self,
        tableau: &Tableau<F>,
        direction: Objective,
    ) -> Option<usize> {
        let mut largest: Option<(usize, F)> = None;
        for j in (0..tableau.nr_columns()).filter(|&j| tableau.is_improving(j, direction)) {
            let magnitude = tableau.reduced_cost(j).abs();
            // Strict comparison, the first column wins a tie
            if largest.as_ref().is_none_or(|(_, existing)| magnitude > *existing) {
                largest = Some((j, magnitude));
            }
        }

        largest.map(|(j, _)| j)
    }
}

/// Simply pivot on the first column which has an improving reduced cost.
///
/// Together with the ratio test this is Bland's rule: ties in the ratio test go to the first row,
/// which holds the smallest basis index.
pub struct FirstImproving;
impl PivotRule for FirstImproving {
    fn new() -> Self {
        Self
    }

    fn select_entering_column<F: Real>(
        &mut self,
        tableau: &Tableau<F>,
        direction: Objective,
    ) -> Option<usize> {
        (0..tableau.nr_columns()).find(|&j| tableau.is_improving(j, direction))
    }
}
