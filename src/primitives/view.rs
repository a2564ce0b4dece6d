//! Typed accessors over tabulated functions.
//!
//! ## Purpose
//!
//! This module lets the same algorithm read `(x, y)` samples from parallel
//! arrays, interleaved flat records, or slices of arbitrary structs, without
//! copying and without raw pointer arithmetic.
//!
//! ## Design notes
//!
//! * **Trait**: `Tabulated` exposes a length and an indexed `point`.
//! * **Layouts**: `Columns` (two slices), `Strided` (interleaved scalars),
//!   `Records` (struct slice plus field accessors).
//! * **Validation**: Constructors check lengths and field positions once, so
//!   `point` can index without further checks.
//!
//! ## Invariants
//!
//! * `point(i)` is valid for every `i < len()`.
//!
//! ## Non-goals
//!
//! * This module does not check that abscissae are sorted.

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;

// ============================================================================
// Tabulated Trait
// ============================================================================

/// A tabulated function: an ordered sequence of `(x, y)` samples.
pub trait Tabulated<T: Copy> {
    /// Number of samples.
    fn len(&self) -> usize;

    /// Sample `i` as `(x, y)`.
    fn point(&self, i: usize) -> (T, T);

    /// Whether there are no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the samples in order.
    fn points(&self) -> Points<'_, T, Self>
    where
        Self: Sized,
    {
        Points {
            table: self,
            next: 0,
            _marker: PhantomData,
        }
    }
}

/// Iterator over the samples of a [`Tabulated`].
pub struct Points<'a, T, V> {
    table: &'a V,
    next: usize,
    _marker: PhantomData<T>,
}

impl<T: Copy, V: Tabulated<T>> Iterator for Points<'_, T, V> {
    type Item = (T, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.table.len() {
            return None;
        }
        let p = self.table.point(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.table.len().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

// ============================================================================
// Columns
// ============================================================================

/// Two parallel slices of abscissae and ordinates.
#[derive(Debug, Clone, Copy)]
pub struct Columns<'a, T> {
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: Copy> Columns<'a, T> {
    /// Pair two slices of equal length.
    pub fn new(x: &'a [T], y: &'a [T]) -> Result<Self, KernelError> {
        if x.len() != y.len() {
            return Err(KernelError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Abscissae.
    pub fn x(&self) -> &'a [T] {
        self.x
    }

    /// Ordinates.
    pub fn y(&self) -> &'a [T] {
        self.y
    }
}

impl<T: Copy> Tabulated<T> for Columns<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    fn point(&self, i: usize) -> (T, T) {
        (self.x[i], self.y[i])
    }
}

// ============================================================================
// Strided
// ============================================================================

/// Interleaved records stored in one flat slice.
///
/// Every record spans `stride` scalars; `x_field` and `y_field` are the
/// positions of the two fields inside a record. Trailing scalars that do not
/// complete a record are ignored.
#[derive(Debug, Clone, Copy)]
pub struct Strided<'a, T> {
    data: &'a [T],
    stride: usize,
    x_field: usize,
    y_field: usize,
}

impl<'a, T: Copy> Strided<'a, T> {
    /// View `data` as records of `stride` scalars.
    pub fn new(
        data: &'a [T],
        stride: usize,
        x_field: usize,
        y_field: usize,
    ) -> Result<Self, KernelError> {
        Validator::validate_field(x_field, stride)?;
        Validator::validate_field(y_field, stride)?;
        Ok(Self {
            data,
            stride,
            x_field,
            y_field,
        })
    }
}

impl<T: Copy> Tabulated<T> for Strided<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len() / self.stride
    }

    #[inline]
    fn point(&self, i: usize) -> (T, T) {
        let base = i * self.stride;
        (self.data[base + self.x_field], self.data[base + self.y_field])
    }
}

// ============================================================================
// Records
// ============================================================================

/// A slice of arbitrary records with two field accessors.
pub struct Records<'a, R, FX, FY> {
    records: &'a [R],
    fx: FX,
    fy: FY,
}

impl<'a, R, FX, FY> Records<'a, R, FX, FY> {
    /// View `records` through the `fx` and `fy` accessors.
    pub fn new(records: &'a [R], fx: FX, fy: FY) -> Self {
        Self { records, fx, fy }
    }
}

impl<T, R, FX, FY> Tabulated<T> for Records<'_, R, FX, FY>
where
    T: Copy,
    FX: Fn(&R) -> T,
    FY: Fn(&R) -> T,
{
    #[inline]
    fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    fn point(&self, i: usize) -> (T, T) {
        let r = &self.records[i];
        ((self.fx)(r), (self.fy)(r))
    }
}
