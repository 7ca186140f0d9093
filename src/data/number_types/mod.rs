//! # Number types
//!
//! The tableau and the linear algebra it relies on are defined over real numbers. Only finite
//! precision floating point types are supported; there is no attempt at exact arithmetic, so all
//! comparisons against zero go through a tolerance relative to the magnitude of the values involved.
pub mod traits;
