//! Tridiagonal and pentadiagonal solvers (Thomas algorithm family).
//!
//! ## Purpose
//!
//! This module solves banded linear systems stored as parallel diagonal
//! arrays in O(n), in place.
//!
//! ## Design notes
//!
//! * **Storage**: With highest index `n`, the main diagonal `d` and the
//!   right-hand side `h` have `n + 1` entries, the first sub/super diagonals
//!   `c`/`e` have `n`, the second sub/super diagonals `b`/`f` have `n - 1`.
//!   Row `i` reads `b[i-2] x[i-2] + c[i-1] x[i-1] + d[i] x[i] + e[i] x[i+1]
//!   + f[i] x[i+2] = h[i]`.
//! * **In place**: Forward elimination folds the lower diagonals into `d`
//!   (and `e`, `c` for the pentadiagonal case) and into `h`; back
//!   substitution leaves the solution in `h`. Callers that need the
//!   coefficients afterwards must copy them first.
//! * **Zero variants**: Rows whose diagonal is [`small`](Scalar::small) skip
//!   their elimination step and force their unknown to exactly zero instead
//!   of dividing by a near-zero pivot.
//!
//! ## Invariants
//!
//! * `h` holds the solution on return; `d` (and `c`, `e` for five diagonals)
//!   hold elimination residue.
//! * No pivoting: systems are expected to be diagonally dominant or otherwise
//!   safe for Thomas elimination.
//!
//! ## Non-goals
//!
//! * This module does not handle general band widths.

// Internal dependencies
use crate::primitives::scalar::Scalar;

// ============================================================================
// Tridiagonal
// ============================================================================

/// Solve a tridiagonal system in place; `h` receives the solution.
///
/// `c`: sub-diagonal, `d`: diagonal (destroyed), `e`: super-diagonal,
/// `h`: right-hand side (overwritten by the solution).
pub fn tridiagonal<T: Scalar>(c: &[T], d: &mut [T], e: &[T], h: &mut [T]) {
    let n = d.len() - 1;
    debug_assert!(c.len() >= n && e.len() >= n && h.len() == n + 1);

    for i in 0..n {
        let k = c[i] / d[i];
        d[i + 1] = d[i + 1] - k * e[i];
        h[i + 1] = h[i + 1] - k * h[i];
    }
    h[n] = h[n] / d[n];
    for i in (0..n).rev() {
        h[i] = (h[i] - e[i] * h[i + 1]) / d[i];
    }
}

/// Like [`tridiagonal`], but rows with a small diagonal get a zero unknown.
pub fn tridiagonal_zero<T: Scalar>(c: &[T], d: &mut [T], e: &[T], h: &mut [T]) {
    let n = d.len() - 1;
    debug_assert!(c.len() >= n && e.len() >= n && h.len() == n + 1);

    for i in 0..n {
        if d[i].small() {
            continue;
        }
        let k = c[i] / d[i];
        d[i + 1] = d[i + 1] - k * e[i];
        h[i + 1] = h[i + 1] - k * h[i];
    }
    h[n] = if d[n].small() { T::zero() } else { h[n] / d[n] };
    for i in (0..n).rev() {
        h[i] = if d[i].small() {
            T::zero()
        } else {
            (h[i] - e[i] * h[i + 1]) / d[i]
        };
    }
}

// ============================================================================
// Pentadiagonal
// ============================================================================

/// Solve a pentadiagonal system in place; `h` receives the solution.
///
/// `b`: second sub-diagonal, `c`: sub-diagonal (destroyed), `d`: diagonal
/// (destroyed), `e`: super-diagonal (destroyed), `f`: second super-diagonal,
/// `h`: right-hand side (overwritten by the solution).
pub fn pentadiagonal<T: Scalar>(
    b: &[T],
    c: &mut [T],
    d: &mut [T],
    e: &mut [T],
    f: &[T],
    h: &mut [T],
) {
    let n = d.len() - 1;
    debug_assert!(h.len() == n + 1 && c.len() >= n && e.len() >= n);
    if n == 0 {
        h[0] = h[0] / d[0];
        return;
    }
    debug_assert!(b.len() >= n - 1 && f.len() >= n - 1);

    for i in 0..n - 1 {
        let k = c[i] / d[i];
        d[i + 1] = d[i + 1] - k * e[i];
        e[i + 1] = e[i + 1] - k * f[i];
        h[i + 1] = h[i + 1] - k * h[i];
        let k = b[i] / d[i];
        c[i + 1] = c[i + 1] - k * e[i];
        d[i + 2] = d[i + 2] - k * f[i];
        h[i + 2] = h[i + 2] - k * h[i];
    }
    let i = n - 1;
    let k = c[i] / d[i];
    d[n] = d[n] - k * e[i];
    h[n] = h[n] - k * h[i];

    h[n] = h[n] / d[n];
    h[i] = (h[i] - e[i] * h[n]) / d[i];
    for i in (0..n - 1).rev() {
        h[i] = (h[i] - e[i] * h[i + 1] - f[i] * h[i + 2]) / d[i];
    }
}

/// Like [`pentadiagonal`], but rows with a small diagonal get a zero unknown.
pub fn pentadiagonal_zero<T: Scalar>(
    b: &[T],
    c: &mut [T],
    d: &mut [T],
    e: &mut [T],
    f: &[T],
    h: &mut [T],
) {
    let n = d.len() - 1;
    debug_assert!(h.len() == n + 1 && c.len() >= n && e.len() >= n);
    if n == 0 {
        h[0] = if d[0].small() { T::zero() } else { h[0] / d[0] };
        return;
    }
    debug_assert!(b.len() >= n - 1 && f.len() >= n - 1);

    for i in 0..n - 1 {
        if d[i].small() {
            continue;
        }
        let k = c[i] / d[i];
        d[i + 1] = d[i + 1] - k * e[i];
        e[i + 1] = e[i + 1] - k * f[i];
        h[i + 1] = h[i + 1] - k * h[i];
        let k = b[i] / d[i];
        c[i + 1] = c[i + 1] - k * e[i];
        d[i + 2] = d[i + 2] - k * f[i];
        h[i + 2] = h[i + 2] - k * h[i];
    }
    let i = n - 1;
    if !d[i].small() {
        let k = c[i] / d[i];
        d[n] = d[n] - k * e[i];
        h[n] = h[n] - k * h[i];
    }

    h[n] = if d[n].small() { T::zero() } else { h[n] / d[n] };
    h[i] = if d[i].small() {
        T::zero()
    } else {
        (h[i] - e[i] * h[n]) / d[i]
    };
    for i in (0..n - 1).rev() {
        h[i] = if d[i].small() {
            T::zero()
        } else {
            (h[i] - e[i] * h[i + 1] - f[i] * h[i + 2]) / d[i]
        };
    }
}
