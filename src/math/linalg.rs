//! Dense Gaussian elimination on an augmented matrix.
//!
//! ## Purpose
//!
//! This module solves small dense linear systems in place. It backs the
//! normal-equation solves of the regression routines.
//!
//! ## Design notes
//!
//! * **Layout**: One flat row-major buffer of `(n+1) x (n+2)` scalars; the last
//!   column is the right-hand side and receives the solution.
//! * **Scaling**: Each row is divided by its largest coefficient magnitude
//!   before elimination to reduce rounding sensitivity.
//! * **Pivoting**: Partial pivoting by magnitude, swapping whole rows.
//! * **Degeneracy**: A zero pivot is not reported; the affected unknowns come
//!   out non-finite and callers check them.
//!
//! ## Invariants
//!
//! * The coefficient part of the buffer is destroyed.
//! * On return, unknown `i` is stored at `m[i * (n + 2) + n + 1]`.
//!
//! ## Non-goals
//!
//! * This module does not provide iterative refinement or rank-revealing
//!   factorizations.

// External dependencies
use num_traits::Float;

/// Solve the augmented system `m` with highest row index `n`, in place.
///
/// `m` must hold exactly `(n + 1) * (n + 2)` scalars in row-major order.
pub fn solve_dense<T: Float>(m: &mut [T], n: usize) {
    let cols = n + 2;
    debug_assert_eq!(m.len(), (n + 1) * cols);

    // Row scaling by the largest coefficient magnitude
    for row in m.chunks_exact_mut(cols) {
        let k = row[..=n]
            .iter()
            .fold(T::zero(), |acc, v| acc.max(v.abs()));
        if k > T::zero() {
            for v in row.iter_mut() {
                *v = *v / k;
            }
        }
    }

    // Forward elimination with partial pivoting
    for i in 0..n {
        let mut p = i;
        let mut best = m[i * cols + i].abs();
        for r in (i + 1)..=n {
            let v = m[r * cols + i].abs();
            if v > best {
                best = v;
                p = r;
            }
        }
        if p != i {
            for c in i..cols {
                m.swap(i * cols + c, p * cols + c);
            }
        }

        let pivot = m[i * cols + i];
        for r in (i + 1)..=n {
            let f = m[r * cols + i] / pivot;
            if f == T::zero() {
                continue;
            }
            for c in (i + 1)..cols {
                m[r * cols + c] = m[r * cols + c] - f * m[i * cols + c];
            }
            m[r * cols + i] = T::zero();
        }
    }

    // Back substitution into the last column
    for i in (0..=n).rev() {
        let mut s = m[i * cols + n + 1];
        for c in (i + 1)..=n {
            s = s - m[i * cols + c] * m[c * cols + n + 1];
        }
        m[i * cols + n + 1] = s / m[i * cols + i];
    }
}

/// Iterator over the solution column of an augmented matrix solved by
/// [`solve_dense`].
pub fn dense_solution<T: Copy>(m: &[T], n: usize) -> impl Iterator<Item = T> + '_ {
    let cols = n + 2;
    (0..=n).map(move |i| m[i * cols + n + 1])
}
