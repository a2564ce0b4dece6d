//! Input validation for kernel entry points and configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions used by the routines that
//! return `Result`: regression, spline fitting, extended sorting, file metrics
//! and the configuration builder.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check sortedness (an O(n) pass callers are trusted
//!   to have done).
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel inputs and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate a pair of parallel arrays holding at least `min` samples.
    pub fn validate_pair<T: Float>(x: &[T], y: &[T], min: usize) -> Result<(), KernelError> {
        if x.is_empty() || y.is_empty() {
            return Err(KernelError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(KernelError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Self::validate_min_points(x.len(), min)?;
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate a column-major observation table of equally long columns.
    pub fn validate_columns<T: Float>(columns: &[&[T]], min: usize) -> Result<(), KernelError> {
        let Some(first) = columns.first() else {
            return Err(KernelError::EmptyInput);
        };
        if first.is_empty() {
            return Err(KernelError::EmptyInput);
        }
        for (j, col) in columns.iter().enumerate() {
            if col.len() != first.len() {
                return Err(KernelError::MismatchedInputs {
                    x_len: first.len(),
                    y_len: col.len(),
                });
            }
            Self::validate_finite(col, &format!("column {}", j))?;
        }
        Self::validate_min_points(first.len(), min)
    }

    /// Validate that there are at least `min` samples.
    pub fn validate_min_points(got: usize, min: usize) -> Result<(), KernelError> {
        if got < min {
            return Err(KernelError::TooFewPoints { got, min });
        }
        Ok(())
    }

    /// Validate that every value is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), KernelError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(KernelError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that every value is strictly positive (log-domain fits).
    pub fn validate_positive<T: Float>(values: &[T], name: &str) -> Result<(), KernelError> {
        for (i, &val) in values.iter().enumerate() {
            if val <= T::zero() {
                return Err(KernelError::InvalidNumericValue(format!(
                    "{}[{}]={} (must be > 0)",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a 1-based file column index.
    pub fn validate_column_index(column: usize) -> Result<(), KernelError> {
        if column == 0 {
            return Err(KernelError::InvalidColumn(column));
        }
        Ok(())
    }

    /// Validate a field position inside a record of `stride` scalars.
    pub fn validate_field(field: usize, stride: usize) -> Result<(), KernelError> {
        if field >= stride {
            return Err(KernelError::InvalidField { field, stride });
        }
        Ok(())
    }

    /// Validate a tunable size threshold.
    pub fn validate_threshold(
        parameter: &'static str,
        got: usize,
        min: usize,
    ) -> Result<(), KernelError> {
        if got < min {
            return Err(KernelError::InvalidThreshold {
                parameter,
                got,
                min,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), KernelError> {
        if let Some(param) = duplicate_param {
            return Err(KernelError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
