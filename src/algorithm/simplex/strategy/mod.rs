//! # Strategies
//!
//! Choices within the simplex method that don't affect correctness.
pub mod pivot_rule;
