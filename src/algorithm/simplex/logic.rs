//! # High-level simplex logic
//!
//! The driver loop that moves from basis to basis until no improving pivot remains. The details of
//! each step are hidden away in the `Tableau` type.
use log::{debug, info, warn};

use crate::algorithm::Termination;
use crate::algorithm::simplex::strategy::pivot_rule::{LargestCoefficient, PivotRule};
use crate::algorithm::simplex::tableau::{Pivot, Tableau};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Real;
use crate::error::{SimplexError, SingularBasis};

/// Number of basis changes after which a run is stopped if it hasn't reached an optimum.
///
/// Guards against cycling on degenerate problems. It is not derived from the problem size.
pub const MAX_ITERATIONS: usize = 10;

/// Settings of a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of basis changes before the run stops.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_iterations: MAX_ITERATIONS }
    }
}

/// One tableau of a run, and the pivot that was taken from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<F> {
    #[allow(missing_docs)]
    pub tableau: Tableau<F>,
    /// `None` for the last tableau of a run, unless that run ended on a singular basis.
    pub pivot: Option<Pivot>,
}

/// All tableaux of a run, in order, and why the run stopped.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace<F> {
    steps: Vec<Step<F>>,
    termination: Termination,
    iterations: usize,
}

impl<F: Real> Trace<F> {
    /// All tableaux that were built, with the pivot taken from each.
    pub fn steps(&self) -> &[Step<F>] {
        &self.steps
    }

    #[allow(missing_docs)]
    pub fn termination(&self) -> &Termination {
        &self.termination
    }

    /// Number of basis changes that were made.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The tableau the run ended with, `None` only if the starting basis was singular.
    pub fn last_tableau(&self) -> Option<&Tableau<F>> {
        self.steps.last().map(|step| &step.tableau)
    }

    /// The optimal tableau, or the reason there is none.
    ///
    /// # Errors
    ///
    /// For every termination other than `Termination::Optimal`.
    pub fn result(&self) -> Result<&Tableau<F>, SimplexError> {
        match &self.termination {
            Termination::Optimal => {
                debug_assert!(!self.steps.is_empty());

                Ok(&self.steps[self.steps.len() - 1].tableau)
            },
            Termination::Unbounded(unbounded) => Err(unbounded.clone().into()),
            Termination::IterationLimitReached => Err(SimplexError::IterationLimitReached {
                iterations: self.iterations,
            }),
            Termination::SingularBasis(singular) => Err(singular.clone().into()),
        }
    }

    /// The optimal solution, if one was found.
    pub fn solution(&self) -> Option<Solution<F>> {
        self.result().ok().map(Tableau::solution)
    }
}

/// Solves a linear program with the tableau method, from the basis provided with the problem.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplexEngine<F> {
    problem: Problem<F>,
    config: SolverConfig,
}

impl<F: Real> SimplexEngine<F> {
    /// Create a new engine.
    ///
    /// # Arguments
    ///
    /// * `constraints`: `m` rows, each with the `n` coefficients of a constraint followed by its
    /// right-hand side.
    /// * `objective`: `n` cost coefficients.
    /// * `start_basis`: `m` distinct variable indices to start from.
    /// * `direction`: Whether to maximize or minimize.
    ///
    /// # Errors
    ///
    /// If the input is malformed, see `Problem::new`.
    pub fn new(
        constraints: Vec<Vec<F>>,
        objective: Vec<F>,
        start_basis: Vec<usize>,
        direction: Objective,
    ) -> Result<Self, SimplexError> {
        Problem::new(constraints, objective, start_basis, direction).map(Self::from_problem)
    }

    /// Create a new engine for a problem that was already validated.
    pub fn from_problem(problem: Problem<F>) -> Self {
        Self { problem, config: SolverConfig::default() }
    }

    /// Replace the default settings.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    #[allow(missing_docs)]
    pub fn problem(&self) -> &Problem<F> {
        &self.problem
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Run the simplex method with the largest coefficient rule.
    ///
    /// # Return value
    ///
    /// Every tableau that was built and the reason the run stopped. Repeated runs on the same
    /// engine produce the same trace.
    pub fn run(&self) -> Trace<F> {
        self.run_with::<LargestCoefficient>()
    }

    /// Run the simplex method, choosing entering variables with the given pivot rule.
    pub fn run_with<PR: PivotRule>(&self) -> Trace<F> {
        let direction = self.problem.direction();
        let mut rule = PR::new();
        let mut basis = self.problem.start_basis().to_vec();
        let mut steps = Vec::new();
        let mut iterations = 0;

        let termination = loop {
            let tableau = match self.build_tableau(&basis) {
                Ok(tableau) => tableau,
                Err(singular) => {
                    warn!("Iteration {}: {}", iterations, singular);
                    break Termination::SingularBasis(singular);
                },
            };
            debug!(
                "Iteration {}: basis {:?}, objective value {}",
                iterations, tableau.basis_indices(), tableau.objective_function_value(),
            );
            if !tableau.is_primal_feasible() {
                warn!("Iteration {}: basis {:?} has negative basic values", iterations, tableau.basis_indices());
            }

            match tableau.select_pivot_with(&mut rule, direction) {
                Ok(None) => {
                    steps.push(Step { tableau, pivot: None });
                    break Termination::Optimal;
                },
                Err(unbounded) => {
                    steps.push(Step { tableau, pivot: None });
                    break Termination::Unbounded(unbounded);
                },
                Ok(Some(_)) if iterations == self.config.max_iterations => {
                    steps.push(Step { tableau, pivot: None });
                    break Termination::IterationLimitReached;
                },
                Ok(Some(pivot)) => {
                    debug!("Iteration {}: x{} enters, x{} leaves", iterations, pivot.entering, pivot.leaving);

                    let slot = basis.iter().position(|&j| j == pivot.leaving);
                    debug_assert!(slot.is_some());
                    if let Some(slot) = slot {
                        basis[slot] = pivot.entering;
                    }
                    steps.push(Step { tableau, pivot: Some(pivot) });
                    iterations += 1;
                },
            }
        };

        info!("Stopped after {} iterations: {:?}", iterations, termination);
        Trace { steps, termination, iterations }
    }

    fn build_tableau(&self, basis: &[usize]) -> Result<Tableau<F>, SingularBasis> {
        Tableau::new(
            self.problem.activity_vectors(),
            basis,
            self.problem.objective(),
            self.problem.rhs(),
        )
    }
}
