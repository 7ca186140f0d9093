//! # The simplex algorithm
//!
//! The tableau form of the simplex method, starting from a basis provided by the caller. Each
//! iteration builds a fresh tableau from the current basis, and the sequence of tableaux is kept as
//! a trace of the run.
pub mod logic;
pub mod strategy;
pub mod tableau;
