//! Natural cubic spline fitting.
//!
//! ## Purpose
//!
//! This module computes the per-segment coefficients of the cubic spline
//! through a table of samples, by assembling one banded linear system and
//! solving it with the pentadiagonal solver.
//!
//! ## Design notes
//!
//! * **Model**: On segment `i`, with `t = x - x[i]`,
//!   `s(x) = y[i] + b[i] t + c[i] t^2 + d[i] t^3`.
//! * **Unknowns**: Ordered `(c[i], b[i], d[i])` per segment, `3 (n - 1)` in
//!   total for `n` knots.
//! * **Equations**: Per segment, the end value matches `y[i+1]`; between
//!   segments, second derivatives agree and a combination of the first- and
//!   second-derivative conditions keeps every row inside the five-diagonal
//!   band with a non-zero diagonal. Natural end conditions (zero second
//!   derivative) close the system.
//!
//! ## Invariants
//!
//! * The spline interpolates every knot.
//! * Value, slope and curvature are continuous at interior knots.
//! * Curvature vanishes at both ends.
//!
//! ## Non-goals
//!
//! * Clamped or periodic end conditions are not provided.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::banded::pentadiagonal;
use crate::math::search::search;
use crate::primitives::errors::KernelError;
use crate::primitives::scalar::Scalar;

/// A fitted cubic spline owning its knots and coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline<T> {
    /// Knot abscissae.
    pub x: Vec<T>,
    /// Knot ordinates.
    pub y: Vec<T>,
    /// Linear coefficients, one per segment.
    pub b: Vec<T>,
    /// Quadratic coefficients, one per segment.
    pub c: Vec<T>,
    /// Cubic coefficients, one per segment.
    pub d: Vec<T>,
}

impl<T: Scalar> CubicSpline<T> {
    /// Number of polynomial segments.
    pub fn segments(&self) -> usize {
        self.b.len()
    }

    /// Spline value at `x`; outside the knots the end polynomials extrapolate.
    pub fn evaluate(&self, x: T) -> T {
        let i = search(x, &self.x).min(self.segments() - 1);
        let t = x - self.x[i];
        self.y[i] + t * (self.b[i] + t * (self.c[i] + t * self.d[i]))
    }
}

/// Fit the natural cubic spline through `(x, y)`.
///
/// `x` must be strictly increasing with at least two knots.
pub fn spline_cubic<T: Scalar>(x: &[T], y: &[T]) -> Result<CubicSpline<T>, KernelError> {
    Validator::validate_pair(x, y, 2)?;
    for w in x.windows(2) {
        if !(w[1] > w[0]) {
            return Err(KernelError::InvalidNumericValue(
                "spline knots must be strictly increasing".into(),
            ));
        }
    }

    let segments = x.len() - 1;
    let size = 3 * segments;
    let zero = T::zero();
    let one = T::one();
    let two = T::lit(2.0);
    let three = T::lit(3.0);

    let mut bb = vec![zero; size];
    let mut cc = vec![zero; size];
    let mut dd = vec![zero; size];
    let mut ee = vec![zero; size];
    let ff = vec![zero; size];
    let mut hh = vec![zero; size];

    // Natural start: c[0] = 0
    dd[0] = one;

    for i in 0..segments {
        let base = 3 * i;
        let h = x[i + 1] - x[i];
        let h2 = h * h;

        // End value: h b + h^2 c + h^3 d = y[i+1] - y[i]
        cc[base] = h2;
        dd[base + 1] = h;
        ee[base + 1] = h2 * h;
        hh[base + 1] = y[i + 1] - y[i];

        // Curvature: c[i] + 3 h d[i] - c[i+1] = 0 (c[n-1] = 0 at the end)
        bb[base] = one;
        dd[base + 2] = three * h;

        if i + 1 < segments {
            ee[base + 2] = -one;

            // Slope minus 2h times curvature:
            // b[i] - 3 h^2 d[i] + 2 h c[i+1] - b[i+1] = 0
            bb[base + 1] = one;
            cc[base + 2] = -three * h2;
            dd[base + 3] = two * h;
            ee[base + 3] = -one;
        }
    }

    pentadiagonal(&bb, &mut cc, &mut dd, &mut ee, &ff, &mut hh);

    let mut b = Vec::with_capacity(segments);
    let mut c = Vec::with_capacity(segments);
    let mut d = Vec::with_capacity(segments);
    for unknowns in hh.chunks_exact(3) {
        c.push(unknowns[0]);
        b.push(unknowns[1]);
        d.push(unknowns[2]);
    }

    Ok(CubicSpline {
        x: x.to_vec(),
        y: y.to_vec(),
        b,
        c,
        d,
    })
}
