//! Scalar trait and elementary scalar primitives.
//!
//! ## Purpose
//!
//! This module provides the floating-point abstraction every kernel routine is
//! generic over, plus the handful of elementary operations shared by integer
//! and floating types.
//!
//! ## Design notes
//!
//! * **One trait, two widths**: `Scalar` is implemented for `f32` and `f64`;
//!   each width carries its own degeneracy threshold.
//! * **Widening**: Each width names the width its closed-form root candidates
//!   are computed in. `f32` widens to [`High`], `f64` stays `f64`.
//! * **No unwraps**: `lit` converts `f64` constants with a plain cast, so
//!   routines never call `T::from(..).unwrap()` on literals.
//! * **Integers**: `min`, `max`, `modmin`, `sqr` and `dbl` work on `i32`, `i64`
//!   and `i128` as well as floats.
//!
//! ## Invariants
//!
//! * `small(x)` is true exactly when `|x| < SMALL`.
//! * `modmin(a, b)` is zero whenever `a` and `b` do not share a strict sign.

// External dependencies
use core::fmt::{Debug, Display};
use core::ops::{Add, Mul};
use core::str::FromStr;
use num_traits::{Float, Signed};

// Internal dependencies
use crate::primitives::precision::High;

// ============================================================================
// Scalar Trait
// ============================================================================

/// Floating-point width usable by the kernel.
pub trait Scalar: Float + FromStr + Debug + Display + Send + Sync + 'static {
    /// Magnitude below which a pivot, diagonal or leading coefficient is
    /// treated as zero.
    const SMALL: Self;

    /// Width used for intermediate arithmetic that loses accuracy quickly.
    type Wide: Scalar;

    /// Convert an `f64` literal to this width.
    fn lit(v: f64) -> Self;

    /// Convert to [`Scalar::Wide`].
    fn widen(self) -> Self::Wide;

    /// Convert back from [`Scalar::Wide`].
    fn narrow(wide: Self::Wide) -> Self;

    /// Whether `self` is numerically indistinguishable from zero.
    #[inline]
    fn small(self) -> bool {
        self.abs() < Self::SMALL
    }

    /// Parse one whitespace-delimited field.
    #[inline]
    fn parse_field(field: &str) -> Option<Self> {
        field.trim().parse().ok()
    }
}

impl Scalar for f32 {
    const SMALL: f32 = f32::EPSILON;

    type Wide = High;

    #[inline]
    fn lit(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn widen(self) -> High {
        self as High
    }

    #[inline]
    fn narrow(wide: High) -> Self {
        wide as f32
    }
}

impl Scalar for f64 {
    const SMALL: f64 = f64::EPSILON;

    type Wide = f64;

    #[inline]
    fn lit(v: f64) -> Self {
        v
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(wide: f64) -> Self {
        wide
    }
}

// ============================================================================
// Elementary Primitives
// ============================================================================

/// Smaller of two values (the first one on ties).
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Larger of two values (the first one on ties).
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// The argument of smallest magnitude if both share a strict sign, else zero.
///
/// Sign agreement is tested without multiplying, so integers cannot overflow.
#[inline]
pub fn modmin<T: Signed + PartialOrd + Copy>(a: T, b: T) -> T {
    let same_sign = (a.is_positive() && b.is_positive()) || (a.is_negative() && b.is_negative());
    if !same_sign {
        return T::zero();
    }
    if a.abs() > b.abs() { b } else { a }
}

/// Square of a value.
#[inline]
pub fn sqr<T: Mul<Output = T> + Copy>(x: T) -> T {
    x * x
}

/// Double of a value.
#[inline]
pub fn dbl<T: Add<Output = T> + Copy>(x: T) -> T {
    x + x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_thresholds() {
        assert!(1e-17_f64.small());
        assert!(!1e-10_f64.small());
        assert!(1e-8_f32.small());
        assert!(!1e-3_f32.small());
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(f64::parse_field(" 2.5 "), Some(2.5));
        assert_eq!(f32::parse_field("x"), None);
    }
}
