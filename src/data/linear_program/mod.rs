//! # Representing linear programs
//!
//! The problem `optimize c x s.t. A x = b, x >= 0` together with the basis to start from, and the
//! solution that is read off an optimal tableau.
pub mod elements;
pub mod problem;
pub mod solution;
