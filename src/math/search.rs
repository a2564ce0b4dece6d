//! Binary search over sorted arrays.
//!
//! ## Purpose
//!
//! This module locates the interval of a sorted array that brackets a value.
//! It is the lookup step behind tabulated interpolation, integration and the
//! spline evaluator.
//!
//! ## Design notes
//!
//! * **Halving**: O(log n) bisection on `[lo, hi]` with `hi - lo > 1`.
//! * **Ties**: `x <= a[mid]` moves the upper bound down, so a value equal to
//!   an interior knot resolves to the interval that ends at that knot.
//! * **Extended**: `search_extended` classifies out-of-range values instead of
//!   clamping them, returning a [`Bracket`].
//!
//! ## Invariants
//!
//! * Input arrays are weakly increasing; results on unsorted input are
//!   unspecified.
//! * For `a[0] <= x <= a[n]` the returned `i` satisfies `a[i] <= x <= a[i+1]`.
//!
//! ## Non-goals
//!
//! * This module does not sort its input.

/// Position of a value relative to a sorted array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// The value is below the first element.
    Below,

    /// The value lies in interval `i`, i.e. `a[i] <= x < a[n]`.
    Within(usize),

    /// The value is at or above the last element.
    Above,
}

impl Bracket {
    /// Signed sentinel form: `-1` below, `i` within, `n` at or above.
    ///
    /// `n` is the highest valid index of the searched array (`len - 1`).
    pub fn index(self, n: usize) -> isize {
        match self {
            Self::Below => -1,
            Self::Within(i) => i as isize,
            Self::Above => n as isize,
        }
    }
}

/// Index `i` of the interval `a[i] <= x <= a[i+1]` containing `x`.
///
/// Values outside the array clamp to the first or last interval. Arrays with a
/// single element (or none) always return 0.
#[inline]
pub fn search<T: PartialOrd + Copy>(x: T, a: &[T]) -> usize {
    let mut lo = 0;
    let mut hi = a.len().saturating_sub(1);
    while hi - lo > 1 {
        let mid = (lo + hi) >> 1;
        if x <= a[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Like [`search`], but reports values outside `[a[0], a[n])` as
/// [`Bracket::Below`] or [`Bracket::Above`].
///
/// An empty array reports every value as [`Bracket::Above`].
#[inline]
pub fn search_extended<T: PartialOrd + Copy>(x: T, a: &[T]) -> Bracket {
    let Some(&last) = a.last() else {
        return Bracket::Above;
    };
    if x < a[0] {
        Bracket::Below
    } else if x >= last {
        Bracket::Above
    } else {
        Bracket::Within(search(x, a))
    }
}
