//! Error metrics between tabulated functions.
//!
//! ## Purpose
//!
//! This module measures the mean-square and root-mean-square difference between
//! a subject tabulated function and a reference tabulated function whose sample
//! points are spaced independently.
//!
//! ## Design notes
//!
//! * **Streaming**: Both functions are consumed as iterators of `(x, y)`, so the
//!   same walk serves slices, strided records and file columns.
//! * **Cursor**: The reference is read through a cursor that only moves forward.
//!   A full evaluation costs O(n + m).
//! * **Outside the reference**: Subject samples left of the first reference
//!   abscissa compare against the first reference ordinate, and samples right of
//!   the last compare against the last one. Inside, the bracketing reference
//!   segment is evaluated linearly.
//! * **Streamed references**: A reference read from a stream may end early
//!   (end of file or a malformed line). [`streamed_mean_square_error`] stops
//!   accumulating at the first subject sample the reference no longer
//!   brackets and returns the average over the samples compared so far.
//!
//! ## Invariants
//!
//! * Both abscissa sequences are weakly increasing.
//! * The sum of squares is divided by the number of subject samples.
//! * An empty subject or reference yields zero.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::interpolation::extrapolate;
use crate::primitives::view::Tabulated;

// ============================================================================
// Reference Cursor
// ============================================================================

/// Forward-only evaluator of a reference tabulated function.
struct ReferenceCursor<T, J> {
    samples: J,
    lo: (T, T),
    hi: Option<(T, T)>,
}

impl<T: Float, J: Iterator<Item = (T, T)>> ReferenceCursor<T, J> {
    fn new(mut samples: J) -> Option<Self> {
        let lo = samples.next()?;
        let hi = samples.next();
        Some(Self { samples, lo, hi })
    }

    /// Reference value at `x`, or `None` once the reference has run out
    /// before reaching `x`. Calls must come with non-decreasing `x`.
    fn bracketed_value_at(&mut self, x: T) -> Option<T> {
        while let Some(hi) = self.hi {
            if x <= hi.0 {
                break;
            }
            self.lo = hi;
            self.hi = self.samples.next();
        }
        match self.hi {
            Some(hi) if x > self.lo.0 => Some(extrapolate(x, self.lo.0, hi.0, self.lo.1, hi.1)),
            Some(_) => Some(self.lo.1),
            None if x <= self.lo.0 => Some(self.lo.1),
            None => None,
        }
    }

    /// Reference value at `x`, clamped to the last ordinate past the end.
    fn value_at(&mut self, x: T) -> T {
        self.bracketed_value_at(x).unwrap_or(self.lo.1)
    }
}

/// Average of the squared differences until `reference_at` gives up.
fn accumulate<T, I, F>(subject: I, mut reference_at: F) -> T
where
    T: Float,
    I: IntoIterator<Item = (T, T)>,
    F: FnMut(T) -> Option<T>,
{
    let (mut sum, mut count) = (T::zero(), 0usize);
    for (x, y) in subject {
        let Some(r) = reference_at(x) else {
            tracing::debug!(
                samples = count,
                "reference ended before subject; stopping accumulation"
            );
            break;
        };
        let k = y - r;
        sum = sum + k * k;
        count += 1;
    }
    if count == 0 {
        return T::zero();
    }
    sum / T::from(count).unwrap_or_else(T::one)
}

// ============================================================================
// Metrics
// ============================================================================

/// Mean-square error of `subject` against `reference`, both given as
/// increasing `(x, y)` sample streams.
pub fn mean_square_error<T, I, J>(subject: I, reference: J) -> T
where
    T: Float,
    I: IntoIterator<Item = (T, T)>,
    J: IntoIterator<Item = (T, T)>,
{
    let Some(mut cursor) = ReferenceCursor::new(reference.into_iter()) else {
        return T::zero();
    };
    accumulate(subject, |x| Some(cursor.value_at(x)))
}

/// Mean-square error of `subject` against a reference stream that may end
/// early.
///
/// Unlike [`mean_square_error`], subject samples past the last reference
/// abscissa are not compared against the last reference ordinate: the first
/// such sample ends the accumulation, and the result averages the samples
/// compared before it.
pub fn streamed_mean_square_error<T, I, J>(subject: I, reference: J) -> T
where
    T: Float,
    I: IntoIterator<Item = (T, T)>,
    J: IntoIterator<Item = (T, T)>,
{
    let Some(mut cursor) = ReferenceCursor::new(reference.into_iter()) else {
        return T::zero();
    };
    accumulate(subject, |x| cursor.bracketed_value_at(x))
}

/// Root-mean-square error of `subject` against `reference`.
pub fn root_mean_square_error<T, I, J>(subject: I, reference: J) -> T
where
    T: Float,
    I: IntoIterator<Item = (T, T)>,
    J: IntoIterator<Item = (T, T)>,
{
    mean_square_error(subject, reference).sqrt()
}

/// Mean-square error between two tables stored as parallel arrays.
///
/// `xa`/`ya` and `xr`/`yr` must each be equally long.
pub fn farray_mean_square_error<T: Float>(xa: &[T], ya: &[T], xr: &[T], yr: &[T]) -> T {
    debug_assert_eq!(xa.len(), ya.len());
    debug_assert_eq!(xr.len(), yr.len());
    mean_square_error(
        xa.iter().copied().zip(ya.iter().copied()),
        xr.iter().copied().zip(yr.iter().copied()),
    )
}

/// Root-mean-square error between two tables stored as parallel arrays.
pub fn farray_root_mean_square_error<T: Float>(xa: &[T], ya: &[T], xr: &[T], yr: &[T]) -> T {
    farray_mean_square_error(xa, ya, xr, yr).sqrt()
}

/// Mean-square error between two tables in any [`Tabulated`] layout.
pub fn tabulated_mean_square_error<T, A, B>(subject: &A, reference: &B) -> T
where
    T: Float,
    A: Tabulated<T>,
    B: Tabulated<T>,
{
    mean_square_error(subject.points(), reference.points())
}

/// Root-mean-square error between two tables in any [`Tabulated`] layout.
pub fn tabulated_root_mean_square_error<T, A, B>(subject: &A, reference: &B) -> T
where
    T: Float,
    A: Tabulated<T>,
    B: Tabulated<T>,
{
    tabulated_mean_square_error(subject, reference).sqrt()
}
