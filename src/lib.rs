//! # A step by step simplex solver
//!
//! Linear programs of the form `optimize c x s.t. A x = b, x >= 0` are solved with the tableau
//! form of the simplex method, starting from a basic feasible basis provided by the caller. Every
//! intermediate tableau is kept, such that the run can be shown step by step.
//!
//! ```
//! use simplex_trace::algorithm::Termination;
//! use simplex_trace::algorithm::simplex::logic::SimplexEngine;
//! use simplex_trace::data::linear_program::elements::Objective;
//!
//! // max 3 x0 + 2 x1 s.t. x0 + x1 = 4, starting with x1 in the basis
//! let engine = SimplexEngine::new(
//!     vec![vec![1f64, 1f64, 4f64]],
//!     vec![3f64, 2f64],
//!     vec![1],
//!     Objective::Maximize,
//! ).unwrap();
//! let trace = engine.run();
//!
//! assert_eq!(trace.termination(), &Termination::Optimal);
//! assert_eq!(trace.solution().unwrap().objective_value, 12f64);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;

#[cfg(test)]
mod tests;
