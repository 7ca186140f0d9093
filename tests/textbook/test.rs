use approx::assert_relative_eq;

use simplex_trace::algorithm::Termination;
use simplex_trace::algorithm::simplex::logic::{MAX_ITERATIONS, SimplexEngine};
use simplex_trace::algorithm::simplex::strategy::pivot_rule::FirstImproving;
use simplex_trace::algorithm::simplex::tableau::Pivot;
use simplex_trace::data::linear_program::problem::Problem;
use simplex_trace::error::SimplexError;
use simplex_trace::io::error::ImportError;
use simplex_trace::io::import;
use simplex_trace::io::report::render;

use super::get_test_file_path;

fn engine(file_name: &str) -> SimplexEngine<f64> {
    let problem: Problem<f64> = import(&get_test_file_path(file_name)).unwrap();
    SimplexEngine::from_problem(problem)
}

#[test]
fn two_variables() {
    let engine = engine("two_variables.simplex");
    let trace = engine.run();

    assert_eq!(trace.termination(), &Termination::Optimal);
    assert_eq!(trace.steps()[0].pivot, Some(Pivot { entering: 0, leaving: 1 }));
    let solution = trace.solution().unwrap();
    assert_eq!(solution.objective_value, 12f64);
    assert_eq!(solution.basic_values, vec![(0, 4f64)]);

    let report = render(&engine, &trace);
    assert!(report.starts_with("F(X) = max(3 * x0 + 2 * x1)\n"));
    assert!(report.contains("Entering x0. Leaving x1.\n"));
    assert!(report.ends_with("Optimum found!\nF(X) = 12\nx0 = 4\n"));
}

#[test]
fn slack() {
    let trace = engine("slack.simplex").run();

    assert_eq!(trace.iterations(), 2);
    let solution = trace.solution().unwrap();
    assert_relative_eq!(solution.objective_value, 36f64, epsilon = 1e-9);
    assert_relative_eq!(solution.value(0), 2f64, epsilon = 1e-9);
    assert_relative_eq!(solution.value(1), 6f64, epsilon = 1e-9);
    assert_relative_eq!(solution.value(2), 2f64, epsilon = 1e-9);
}

#[test]
fn beale_cycles_with_largest_coefficient() {
    let engine = engine("beale.simplex");
    let trace = engine.run();

    assert_eq!(trace.termination(), &Termination::IterationLimitReached);
    assert_eq!(trace.iterations(), MAX_ITERATIONS);
    // Back at the starting basis after six degenerate pivots
    assert_eq!(trace.steps()[6].tableau.basis_indices(), &[0, 1, 2]);
    assert!(trace.steps().iter().all(|step| step.tableau.objective_function_value().abs() < 1e-9));
    assert_eq!(
        trace.result().err(),
        Some(SimplexError::IterationLimitReached { iterations: MAX_ITERATIONS }),
    );
    assert!(render(&engine, &trace).ends_with("Iteration limit of 10 reached; the last tableau is not final.\n"));
}

#[test]
fn beale_terminates_with_first_improving() {
    let trace = engine("beale.simplex").run_with::<FirstImproving>();

    assert_eq!(trace.termination(), &Termination::Optimal);
    assert_eq!(trace.iterations(), 6);
    let solution = trace.solution().unwrap();
    assert_relative_eq!(solution.objective_value, -0.05f64, epsilon = 1e-9);
    assert_relative_eq!(solution.value(0), 0.03f64, epsilon = 1e-9);
    assert_relative_eq!(solution.value(3), 0.04f64, epsilon = 1e-9);
    assert_relative_eq!(solution.value(5), 1f64, epsilon = 1e-9);
}

#[test]
fn unbounded() {
    let engine = engine("unbounded.txt");
    let trace = engine.run();

    assert!(matches!(trace.termination(), Termination::Unbounded(unbounded) if unbounded.entering == 1));
    assert!(render(&engine, &trace).ends_with("Problem is unbounded at iteration 1: x1 can increase without limit.\n"));
}

#[test]
fn import_errors() {
    assert!(matches!(
        import::<f64>(&get_test_file_path("wrong_basis.simplex")),
        Err(ImportError::Problem(SimplexError::InvalidInput(_))),
    ));
    assert!(matches!(
        import::<f64>(&get_test_file_path("problem.mps")),
        Err(ImportError::FileExtension(_)),
    ));
    assert!(matches!(
        import::<f64>(&get_test_file_path("does_not_exist.simplex")),
        Err(ImportError::IO(_)),
    ));
}
