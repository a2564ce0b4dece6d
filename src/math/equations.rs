//! Closed-form quadratic and cubic solvers restricted to an interval.
//!
//! ## Purpose
//!
//! This module returns the root of a quadratic or cubic polynomial that lies
//! in a caller-supplied interval `[x1, x2]`.
//!
//! ## Design notes
//!
//! * **Reduced forms**: `x^2 + a x + b` and `x^3 + a x^2 + b x + c`; general
//!   forms normalize by the leading coefficient first.
//! * **Degeneracy**: A leading coefficient that is [`small`](Scalar::small)
//!   drops the solve to the next lower order (cubic to quadratic to linear).
//! * **Cubic branches**: A negative discriminant (three real roots) uses the
//!   trigonometric solution and tries the roots in a fixed order; otherwise
//!   Cardano's formula with real cube roots gives the single real root.
//! * **Working width**: Candidates are computed in [`Scalar::Wide`] (`High`
//!   for `f32` inputs) and narrowed before the interval test, so `f32` callers
//!   get the accuracy of the high-precision width in the `acos`/`cbrt` steps.
//! * **Fallback**: The plain solvers always return a value. If no candidate is
//!   in range they return the last candidate tried. The `_checked` variants
//!   return `None` instead.
//!
//! ## Invariants
//!
//! * The quadratic "plus" root is tried before the "minus" root.
//! * Trigonometric cubic roots are tried with phase offsets 0, +2pi/3, -2pi/3.
//!
//! ## Non-goals
//!
//! * Complex roots are not computed.

// External dependencies
use core::f64::consts::PI;

// Internal dependencies
use crate::primitives::scalar::Scalar;

// ============================================================================
// Candidate Roots
// ============================================================================

/// Up to three real root candidates in the order they should be tried.
#[derive(Debug, Clone, Copy)]
struct Candidates<T> {
    roots: [T; 3],
    len: usize,
}

impl<T: Scalar> Candidates<T> {
    /// First candidate within `[x1, x2]`, if any.
    fn in_range(&self, x1: T, x2: T) -> Option<T> {
        self.roots[..self.len]
            .iter()
            .copied()
            .find(|&r| r >= x1 && r <= x2)
    }

    /// First candidate within `[x1, x2]`, or the last one tried.
    fn select(&self, x1: T, x2: T) -> T {
        self.in_range(x1, x2)
            .unwrap_or(self.roots[self.len - 1])
    }

    /// Convert candidates computed in the wide width back to `S`.
    fn narrowed<S: Scalar<Wide = T>>(self) -> Candidates<S> {
        Candidates {
            roots: self.roots.map(S::narrow),
            len: self.len,
        }
    }
}

/// [`quadratic_candidates`] evaluated in the wide width of `T`.
fn wide_quadratic<T: Scalar>(a: T, b: T) -> Candidates<T> {
    quadratic_candidates(a.widen(), b.widen()).narrowed()
}

/// [`cubic_candidates`] evaluated in the wide width of `T`.
fn wide_cubic<T: Scalar>(a: T, b: T, c: T) -> Candidates<T> {
    cubic_candidates(a.widen(), b.widen(), c.widen()).narrowed()
}

/// Roots of `x^2 + a x + b`, "plus" branch first.
fn quadratic_candidates<T: Scalar>(a: T, b: T) -> Candidates<T> {
    let a = a / T::lit(-2.0);
    let d = (a * a - b).sqrt();
    Candidates {
        roots: [a + d, a - d, T::zero()],
        len: 2,
    }
}

/// Roots of `x^3 + a x^2 + b x + c` by depressed-cubic substitution.
fn cubic_candidates<T: Scalar>(a: T, b: T, c: T) -> Candidates<T> {
    let two = T::lit(2.0);
    let three = T::lit(3.0);

    // x = t - a/3 turns the cubic into t^3 + 3 q t - 2 r = 0
    let a3 = a / three;
    let q = b / three - a3 * a3;
    let r = (b * a3 - c) / two - a3 * a3 * a3;
    let disc = q * q * q + r * r;

    if disc < T::zero() {
        let s = (-q).sqrt();
        let theta = (r / (s * s * s)).acos() / three;
        let s2 = s + s;
        let phase = T::lit(2.0 * PI / 3.0);
        Candidates {
            roots: [
                s2 * theta.cos() - a3,
                s2 * (theta + phase).cos() - a3,
                s2 * (theta - phase).cos() - a3,
            ],
            len: 3,
        }
    } else {
        let sd = disc.sqrt();
        Candidates {
            roots: [(r + sd).cbrt() + (r - sd).cbrt() - a3, T::zero(), T::zero()],
            len: 1,
        }
    }
}

// ============================================================================
// Quadratic
// ============================================================================

/// Root of `x^2 + a x + b = 0` in `[x1, x2]`.
///
/// Returns the "minus" root when the "plus" root is out of range, whether or
/// not the "minus" root is in range.
#[inline]
pub fn quadratic_reduced<T: Scalar>(a: T, b: T, x1: T, x2: T) -> T {
    wide_quadratic(a, b).select(x1, x2)
}

/// Root of `x^2 + a x + b = 0` in `[x1, x2]`, or `None`.
#[inline]
pub fn quadratic_reduced_checked<T: Scalar>(a: T, b: T, x1: T, x2: T) -> Option<T> {
    wide_quadratic(a, b).in_range(x1, x2)
}

/// Root of `a x^2 + b x + c = 0` in `[x1, x2]`.
///
/// A small `a` degenerates to the linear root `-c / b`.
#[inline]
pub fn quadratic<T: Scalar>(a: T, b: T, c: T, x1: T, x2: T) -> T {
    if a.small() {
        return -c / b;
    }
    quadratic_reduced(b / a, c / a, x1, x2)
}

/// Root of `a x^2 + b x + c = 0` in `[x1, x2]`, or `None`.
pub fn quadratic_checked<T: Scalar>(a: T, b: T, c: T, x1: T, x2: T) -> Option<T> {
    if a.small() {
        let x = -c / b;
        return (x >= x1 && x <= x2).then_some(x);
    }
    quadratic_reduced_checked(b / a, c / a, x1, x2)
}

// ============================================================================
// Cubic
// ============================================================================

/// Root of `x^3 + a x^2 + b x + c = 0` in `[x1, x2]`.
///
/// With three real roots the last one tried is returned when none is in range.
#[inline]
pub fn cubic_reduced<T: Scalar>(a: T, b: T, c: T, x1: T, x2: T) -> T {
    wide_cubic(a, b, c).select(x1, x2)
}

/// Root of `x^3 + a x^2 + b x + c = 0` in `[x1, x2]`, or `None`.
#[inline]
pub fn cubic_reduced_checked<T: Scalar>(a: T, b: T, c: T, x1: T, x2: T) -> Option<T> {
    wide_cubic(a, b, c).in_range(x1, x2)
}

/// Root of `a x^3 + b x^2 + c x + d = 0` in `[x1, x2]`.
///
/// A small `a` degenerates to [`quadratic`].
#[inline]
pub fn cubic<T: Scalar>(a: T, b: T, c: T, d: T, x1: T, x2: T) -> T {
    if a.small() {
        return quadratic(b, c, d, x1, x2);
    }
    cubic_reduced(b / a, c / a, d / a, x1, x2)
}

/// Root of `a x^3 + b x^2 + c x + d = 0` in `[x1, x2]`, or `None`.
pub fn cubic_checked<T: Scalar>(a: T, b: T, c: T, d: T, x1: T, x2: T) -> Option<T> {
    if a.small() {
        return quadratic_checked(b, c, d, x1, x2);
    }
    cubic_reduced_checked(b / a, c / a, d / a, x1, x2)
}
