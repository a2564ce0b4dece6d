//! Error metrics over column files.
//!
//! ## Purpose
//!
//! This module streams two tabulated functions out of whitespace-delimited
//! text files and measures their mean-square and root-mean-square difference
//! without loading either file into memory.
//!
//! ## Design notes
//!
//! * **Format**: One sample per line; every line holds at least as many
//!   fields as the highest column index used. Columns are numbered from 1.
//! * **Blank lines**: Skipped.
//! * **Termination**: End of file ends a stream. A line that cannot be read or
//!   parsed also ends it, with a warning. Accumulation stops when the subject
//!   ends or when a subject sample lies past the last reference sample read,
//!   and the metric is computed from the samples compared so far.
//!
//! ## Non-goals
//!
//! * Comment lines, headers and quoted fields are not recognised.

// External dependencies
use core::marker::PhantomData;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::evaluation::metrics::streamed_mean_square_error;
use crate::primitives::errors::KernelError;
use crate::primitives::scalar::Scalar;

// ============================================================================
// Column Selection
// ============================================================================

/// The 1-based columns holding the abscissa and the ordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnSpec {
    /// Column of the abscissa.
    pub x: usize,
    /// Column of the ordinate.
    pub y: usize,
}

impl ColumnSpec {
    /// Select columns `x` and `y` (both numbered from 1).
    pub fn new(x: usize, y: usize) -> Result<Self, KernelError> {
        let spec = Self { x, y };
        spec.validate()?;
        Ok(spec)
    }

    /// Check that both columns are numbered from 1.
    pub fn validate(&self) -> Result<(), KernelError> {
        Validator::validate_column_index(self.x)?;
        Validator::validate_column_index(self.y)
    }

    /// Number of fields a line must hold.
    pub fn width(&self) -> usize {
        self.x.max(self.y)
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self { x: 1, y: 2 }
    }
}

// ============================================================================
// Column Reader
// ============================================================================

/// Iterator over the `(x, y)` samples of a column file.
pub struct ColumnReader<B, T> {
    source: B,
    columns: ColumnSpec,
    line: String,
    line_number: usize,
    stopped_at: Option<usize>,
    _marker: PhantomData<T>,
}

impl<B: BufRead, T: Scalar> ColumnReader<B, T> {
    /// Read the columns `columns` from `source`.
    pub fn new(source: B, columns: ColumnSpec) -> Result<Self, KernelError> {
        columns.validate()?;
        Ok(Self {
            source,
            columns,
            line: String::new(),
            line_number: 0,
            stopped_at: None,
            _marker: PhantomData,
        })
    }

    /// Line number (1-based) of the malformed line that ended the stream, if
    /// any.
    pub fn stopped_at(&self) -> Option<usize> {
        self.stopped_at
    }

    fn parse_line(&self) -> Option<(T, T)> {
        let mut x = None;
        let mut y = None;
        for (i, field) in self.line.split_whitespace().take(self.columns.width()).enumerate() {
            let column = i + 1;
            if column == self.columns.x {
                x = Some(T::parse_field(field)?);
            }
            if column == self.columns.y {
                y = Some(T::parse_field(field)?);
            }
        }
        Some((x?, y?))
    }

    fn stop(&mut self, reason: &str) {
        tracing::warn!(
            line = self.line_number,
            reason,
            "column file ended early; using samples read so far"
        );
        self.stopped_at = Some(self.line_number);
    }
}

impl<B: BufRead, T: Scalar> Iterator for ColumnReader<B, T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped_at.is_some() {
            return None;
        }
        loop {
            self.line.clear();
            self.line_number += 1;
            match self.source.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    self.stop(&err.to_string());
                    return None;
                }
            }
            if self.line.trim().is_empty() {
                continue;
            }
            return match self.parse_line() {
                Some(sample) => Some(sample),
                None => {
                    self.stop("malformed line");
                    None
                }
            };
        }
    }
}

// ============================================================================
// File Metrics
// ============================================================================

/// Mean-square error between the tabulated functions stored in two column
/// streams.
///
/// Subject samples past the end of the reference stream are not compared; see
/// [`streamed_mean_square_error`].
pub fn file_mean_square_error<T, R1, R2>(
    subject: R1,
    subject_columns: ColumnSpec,
    reference: R2,
    reference_columns: ColumnSpec,
) -> Result<T, KernelError>
where
    T: Scalar,
    R1: Read,
    R2: Read,
{
    let subject = ColumnReader::<_, T>::new(BufReader::new(subject), subject_columns)?;
    let reference = ColumnReader::<_, T>::new(BufReader::new(reference), reference_columns)?;
    Ok(streamed_mean_square_error(subject, reference))
}

/// Root-mean-square error between the tabulated functions stored in two
/// column streams.
pub fn file_root_mean_square_error<T, R1, R2>(
    subject: R1,
    subject_columns: ColumnSpec,
    reference: R2,
    reference_columns: ColumnSpec,
) -> Result<T, KernelError>
where
    T: Scalar,
    R1: Read,
    R2: Read,
{
    file_mean_square_error(subject, subject_columns, reference, reference_columns)
        .map(|mse: T| mse.sqrt())
}

/// [`file_mean_square_error`] over two files on disk.
pub fn file_mean_square_error_paths<T: Scalar>(
    subject: impl AsRef<Path>,
    subject_columns: ColumnSpec,
    reference: impl AsRef<Path>,
    reference_columns: ColumnSpec,
) -> Result<T, KernelError> {
    subject_columns.validate()?;
    reference_columns.validate()?;
    let subject = File::open(subject)?;
    let reference = File::open(reference)?;
    file_mean_square_error(subject, subject_columns, reference, reference_columns)
}

/// [`file_root_mean_square_error`] over two files on disk.
pub fn file_root_mean_square_error_paths<T: Scalar>(
    subject: impl AsRef<Path>,
    subject_columns: ColumnSpec,
    reference: impl AsRef<Path>,
    reference_columns: ColumnSpec,
) -> Result<T, KernelError> {
    file_mean_square_error_paths(subject, subject_columns, reference, reference_columns)
        .map(|mse: T| mse.sqrt())
}
