//! Least-squares regression of tabulated data.
//!
//! ## Purpose
//!
//! This module fits linear, power-law, polynomial, multilinear and
//! multiplicative power-law (multiexponential) models by least squares.
//!
//! ## Design notes
//!
//! * **Linear**: Closed form from the sums of `x`, `y`, `xy` and `x^2`.
//! * **Power law**: `y = a x^b` is fitted as a line in `(ln x, ln y)`.
//! * **Polynomial / multilinear**: Normal equations assembled into an
//!   augmented matrix and solved with [`solve_dense`].
//! * **Ownership**: Coefficient vectors are allocated here and returned to
//!   the caller; input slices are never modified.
//!
//! ## Invariants
//!
//! * Coefficients are returned constant term first.
//! * Fits reproduce data generated exactly by a model of the same or lower
//!   order, up to rounding.
//!
//! ## Non-goals
//!
//! * Weighted least squares and robust fitting are not provided.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::{dense_solution, solve_dense};
use crate::primitives::errors::KernelError;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Result Types
// ============================================================================

/// Fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T> {
    /// Value at `x = 0`.
    pub intercept: T,
    /// Change of `y` per unit `x`.
    pub slope: T,
}

impl<T: Scalar> Line<T> {
    /// Value of the line at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

/// Fitted power law `y = coefficient * x^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Power<T> {
    /// Multiplicative coefficient.
    pub coefficient: T,
    /// Exponent of `x`.
    pub exponent: T,
}

impl<T: Scalar> Power<T> {
    /// Value of the power law at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.coefficient * x.powf(self.exponent)
    }
}

// ============================================================================
// Linear and Power Law
// ============================================================================

/// Least-squares line through `(x, y)`.
pub fn regression_linear<T: Scalar>(x: &[T], y: &[T]) -> Result<Line<T>, KernelError> {
    Validator::validate_pair(x, y, 2)?;
    line_from_pairs(x.iter().copied().zip(y.iter().copied()))
}

/// Least-squares power law `y = a x^b` through strictly positive data.
pub fn regression_exponential<T: Scalar>(x: &[T], y: &[T]) -> Result<Power<T>, KernelError> {
    Validator::validate_pair(x, y, 2)?;
    Validator::validate_positive(x, "x")?;
    Validator::validate_positive(y, "y")?;
    let line = line_from_pairs(x.iter().zip(y).map(|(&xi, &yi)| (xi.ln(), yi.ln())))?;
    Ok(Power {
        coefficient: line.intercept.exp(),
        exponent: line.slope,
    })
}

/// Closed-form least-squares line from an iterator of samples.
fn line_from_pairs<T, I>(pairs: I) -> Result<Line<T>, KernelError>
where
    T: Scalar,
    I: Iterator<Item = (T, T)>,
{
    let (mut n, mut sx, mut sy, mut sxy, mut sxx) =
        (T::zero(), T::zero(), T::zero(), T::zero(), T::zero());
    for (xi, yi) in pairs {
        n = n + T::one();
        sx = sx + xi;
        sy = sy + yi;
        sxy = sxy + xi * yi;
        sxx = sxx + xi * xi;
    }

    let den = n * sxx - sx * sx;
    let slope = (n * sxy - sx * sy) / den;
    let intercept = (sy - slope * sx) / n;
    if !slope.is_finite() || !intercept.is_finite() {
        tracing::debug!("linear regression: degenerate abscissae");
        return Err(KernelError::SingularSystem);
    }
    Ok(Line { intercept, slope })
}

// ============================================================================
// Polynomial
// ============================================================================

/// Least-squares polynomial of order `m`: `y = A[0] + A[1] x + ... + A[m] x^m`.
pub fn regression_polynomial<T: Scalar>(
    x: &[T],
    y: &[T],
    m: usize,
) -> Result<Vec<T>, KernelError> {
    Validator::validate_pair(x, y, m + 1)?;

    // Power sums: sum x^k for k in 0..=2m, sum x^k y for k in 0..=m
    let mut sx = vec![T::zero(); 2 * m + 1];
    let mut sxy = vec![T::zero(); m + 1];
    for (&xi, &yi) in x.iter().zip(y) {
        let mut p = T::one();
        for k in 0..=2 * m {
            sx[k] = sx[k] + p;
            if k <= m {
                sxy[k] = sxy[k] + p * yi;
            }
            p = p * xi;
        }
    }

    let cols = m + 2;
    let mut matrix = vec![T::zero(); (m + 1) * cols];
    for (i, row) in matrix.chunks_exact_mut(cols).enumerate() {
        row[..=m].copy_from_slice(&sx[i..=i + m]);
        row[m + 1] = sxy[i];
    }
    solve_normal(matrix, m)
}

/// Value at `x` of the polynomial with coefficients `a` (constant first).
pub fn polynomial_evaluate<T: Scalar>(a: &[T], x: T) -> T {
    a.iter().rev().fold(T::zero(), |acc, &c| acc * x + c)
}

// ============================================================================
// Multilinear and Multiexponential
// ============================================================================

/// Least-squares hyperplane `f = A[0] + A[1] x1 + ... + A[m] xm`.
///
/// `columns` holds `m + 1` equally long columns: `x1, ..., xm, f`.
pub fn regression_multilinear<T: Scalar>(columns: &[&[T]]) -> Result<Vec<T>, KernelError> {
    if columns.len() < 2 {
        return Err(KernelError::TooFewPoints {
            got: columns.len(),
            min: 2,
        });
    }
    let m = columns.len() - 1;
    Validator::validate_columns(columns, m + 1)?;

    let rows = columns[0].len();
    let cols = m + 2;
    let mut matrix = vec![T::zero(); (m + 1) * cols];
    let mut z = vec![T::one(); m + 1];
    for r in 0..rows {
        // z = (1, x1, ..., xm); the target sits in the last column
        for (k, col) in columns[..m].iter().enumerate() {
            z[k + 1] = col[r];
        }
        let f = columns[m][r];
        for (i, row) in matrix.chunks_exact_mut(cols).enumerate() {
            for j in 0..=m {
                row[j] = row[j] + z[i] * z[j];
            }
            row[m + 1] = row[m + 1] + z[i] * f;
        }
    }
    solve_normal(matrix, m)
}

/// Least-squares product of powers `f = A[0] x1^A[1] ... xm^A[m]`.
///
/// All values must be strictly positive. Columns are laid out as in
/// [`regression_multilinear`].
pub fn regression_multiexponential<T: Scalar>(columns: &[&[T]]) -> Result<Vec<T>, KernelError> {
    for (j, col) in columns.iter().enumerate() {
        Validator::validate_positive(col, if j + 1 == columns.len() { "f" } else { "x" })?;
    }
    let logs: Vec<Vec<T>> = columns
        .iter()
        .map(|col| col.iter().map(|v| v.ln()).collect())
        .collect();
    let views: Vec<&[T]> = logs.iter().map(Vec::as_slice).collect();

    let mut a = regression_multilinear(&views)?;
    a[0] = a[0].exp();
    Ok(a)
}

/// Solve assembled normal equations and extract finite coefficients.
fn solve_normal<T: Scalar>(mut matrix: Vec<T>, m: usize) -> Result<Vec<T>, KernelError> {
    solve_dense(&mut matrix, m);
    let a: Vec<T> = dense_solution(&matrix, m).collect();
    if a.iter().any(|v| !v.is_finite()) {
        tracing::debug!(order = m, "normal equations are singular");
        return Err(KernelError::SingularSystem);
    }
    Ok(a)
}
