//! # Reports
//!
//! Rendering of a finished run as text: the problem, every tableau with the pivot taken from it,
//! and the outcome. Values are rounded to two decimals. Where the text goes is up to the caller.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

use crate::algorithm::Termination;
use crate::algorithm::simplex::logic::{SimplexEngine, Trace};
use crate::data::number_types::traits::Real;

/// A run of an engine, ready to be displayed.
pub struct Report<'a, F> {
    engine: &'a SimplexEngine<F>,
    trace: &'a Trace<F>,
}

impl<'a, F: Real> Report<'a, F> {
    /// Combine an engine with a trace of one of its runs.
    pub fn new(engine: &'a SimplexEngine<F>, trace: &'a Trace<F>) -> Self {
        Self { engine, trace }
    }
}

/// Render the report of a run as a `String`.
pub fn render<F: Real>(engine: &SimplexEngine<F>, trace: &Trace<F>) -> String {
    Report::new(engine, trace).to_string()
}

impl<F: Real> Display for Report<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.engine.problem())?;

        for step in self.trace.steps() {
            write!(f, "{}", step.tableau)?;
            if let Some(pivot) = step.pivot {
                writeln!(f, "Entering x{}. Leaving x{}.", pivot.entering, pivot.leaving)?;
            }
        }

        match self.trace.termination() {
            Termination::Optimal => {
                writeln!(f, "Optimum found!")?;
                if let Some(solution) = self.trace.solution() {
                    write!(f, "{}", solution)?;
                }
            },
            Termination::Unbounded(unbounded) => writeln!(
                f, "Problem is unbounded at iteration {}: x{} can increase without limit.",
                self.trace.iterations(), unbounded.entering,
            )?,
            Termination::IterationLimitReached => writeln!(
                f, "Iteration limit of {} reached; the last tableau is not final.",
                self.engine.config().max_iterations,
            )?,
            Termination::SingularBasis(singular) => writeln!(
                f, "Basis {{{}}} at iteration {} is singular, no tableau can be built.",
                singular.basis.iter().join(", "), self.trace.iterations(),
            )?,
        }

        Ok(())
    }
}
