//! # Data structures
//!
//! Problems, their solutions and the small dense linear algebra needed to build tableaux. The
//! tableau itself lives with the algorithm, in `algorithm::simplex::tableau`.
pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
