//! # Traits
//!
//! The numbers used throughout the crate. The contract is that of the real numbers, which floats
//! can only approximate.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, FromPrimitive};

use crate::data::linear_algebra::EPSILON;

/// Element type of vectors, matrices and tableaus.
///
/// Automatically implemented for all types satisfying the trait's bounds, which in practice means
/// `f32` and `f64`.
pub trait Real: Float + FromPrimitive + Sum + Display + Debug {
    /// The relative tolerance, see `EPSILON`.
    fn tolerance() -> Self {
        Self::from_f64(EPSILON).unwrap_or_else(Self::epsilon)
    }

    /// Whether the value is within tolerance of zero.
    ///
    /// # Arguments
    ///
    /// * `scale`: Nonnegative magnitude of the terms that were combined into this value. Rounding
    /// errors are proportional to it.
    fn is_approximately_zero_relative_to(self, scale: Self) -> bool {
        debug_assert!(scale >= Self::zero());

        self.abs() <= Self::tolerance() * scale
    }

    /// Whether the value is larger than zero by more than the tolerance, relative to `scale`.
    fn is_strictly_positive_relative_to(self, scale: Self) -> bool {
        debug_assert!(scale >= Self::zero());

        self > Self::tolerance() * scale
    }

    /// Whether the value is smaller than zero by more than the tolerance, relative to `scale`.
    fn is_strictly_negative_relative_to(self, scale: Self) -> bool {
        debug_assert!(scale >= Self::zero());

        self < -Self::tolerance() * scale
    }

    /// Round to two decimals for human readable output.
    ///
    /// Full precision is kept everywhere else. A rounded negative zero is turned into a positive
    /// zero, such that it doesn't show up as `-0`.
    fn round_for_display(self) -> Self {
        let hundred = Self::from_u8(100).unwrap_or_else(Self::one);
        let rounded = (self * hundred).round() / hundred;
        if rounded == Self::zero() {
            Self::zero()
        } else {
            rounded
        }
    }
}

impl<T: Float + FromPrimitive + Sum + Display + Debug> Real for T {}

#[cfg(test)]
mod test {
    use crate::data::number_types::traits::Real;

    #[test]
    fn round_for_display() {
        assert_eq!(2.345f64.round_for_display(), 2.35);
        assert_eq!(4f64.round_for_display(), 4f64);
        assert_eq!((1f64 / 3f64).round_for_display(), 0.33);
        assert_eq!(format!("{}", (-0.001f64).round_for_display()), "0");
        assert_eq!(format!("{}", 12f64.round_for_display()), "12");
    }

    #[test]
    fn tolerance() {
        assert!(1e-12f64.is_approximately_zero_relative_to(1f64));
        assert!(!1e-12f64.is_strictly_positive_relative_to(1f64));
        assert!(!(-1e-12f64).is_strictly_negative_relative_to(1f64));
        assert!(0.5f64.is_strictly_positive_relative_to(1f64));
        assert!((-0.5f64).is_strictly_negative_relative_to(1f64));
    }

    #[test]
    fn tolerance_scales() {
        assert!(1e-12f64.is_strictly_positive_relative_to(1e-11));
        assert!((-1e-12f64).is_strictly_negative_relative_to(1e-11));
        assert!(!1e-12f64.is_approximately_zero_relative_to(1e-11));
        assert!(1e-6f64.is_approximately_zero_relative_to(1e5));
        // Against a zero scale, only an exact zero is zero
        assert!(0f64.is_approximately_zero_relative_to(0f64));
        assert!(1e-300f64.is_strictly_positive_relative_to(0f64));
    }
}
