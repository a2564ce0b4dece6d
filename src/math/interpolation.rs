//! Linear extrapolation and interpolation of sampled functions.
//!
//! ## Purpose
//!
//! This module provides the two-point linear primitives and their tabulated
//! counterpart built on binary search.
//!
//! ## Design notes
//!
//! * **Extrapolation**: `y1 + (x - x1) * (y2 - y1) / (x2 - x1)`, unbounded.
//! * **Interpolation**: Clamps to `y1` / `y2` outside `[x1, x2]`, so results
//!   never leave the bracketing sample range.
//! * **Tables**: Values at or beyond the last knot return the last ordinate
//!   directly; values below the first knot return the first ordinate.
//!
//! ## Invariants
//!
//! * Interpolating at a knot returns that knot's ordinate exactly.
//!
//! ## Non-goals
//!
//! * Degenerate segments (`x1 == x2`) are not guarded in `extrapolate`.
//! * This module does not provide higher-order interpolation (see `spline`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::search::{Bracket, search_extended};

/// Value at `x` of the line through `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn extrapolate<T: Float>(x: T, x1: T, x2: T, y1: T, y2: T) -> T {
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// Linear interpolation clamped to the segment `[x1, x2]`.
#[inline]
pub fn interpolate<T: Float>(x: T, x1: T, x2: T, y1: T, y2: T) -> T {
    if x <= x1 {
        y1
    } else if x >= x2 {
        y2
    } else {
        extrapolate(x, x1, x2, y1, y2)
    }
}

/// Piecewise-linear interpolation of the table `(xa, ya)` at `x`.
///
/// `xa` must be non-empty, weakly increasing and as long as `ya`. Outside the table the
/// first or last ordinate is returned.
pub fn farray_interpolate<T: Float>(x: T, xa: &[T], ya: &[T]) -> T {
    debug_assert_eq!(xa.len(), ya.len());
    match search_extended(x, xa) {
        Bracket::Below => ya[0],
        Bracket::Above => ya[ya.len() - 1],
        Bracket::Within(i) => interpolate(x, xa[i], xa[i + 1], ya[i], ya[i + 1]),
    }
}
