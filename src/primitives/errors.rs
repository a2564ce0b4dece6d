//! Error types for validated kernel entry points.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by the kernel routines
//! that validate their inputs (regression, splines, extended sorting, table
//! accessors, file metrics and configuration builders).
//!
//! ## Design notes
//!
//! * **Narrow**: Numerical degeneracy inside the solvers is handled silently and
//!   never surfaces here.
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//! * **Comparable**: Derives `Clone` and `PartialEq`, so I/O failures are stored
//!   as their rendered message.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

/// Errors raised by validated kernel entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// An input array is empty.
    EmptyInput,

    /// Two arrays that must be parallel have different lengths.
    MismatchedInputs {
        /// Length of the abscissa array.
        x_len: usize,
        /// Length of the ordinate array.
        y_len: usize,
    },

    /// Not enough samples for the requested fit.
    TooFewPoints {
        /// Number of samples supplied.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// A value is NaN, infinite or outside the routine's domain.
    InvalidNumericValue(String),

    /// A tunable threshold is below its minimum.
    InvalidThreshold {
        /// Name of the parameter.
        parameter: &'static str,
        /// Value supplied.
        got: usize,
        /// Smallest accepted value.
        min: usize,
    },

    /// A 1-based file column index is zero.
    InvalidColumn(usize),

    /// A record field position does not fit inside the record stride.
    InvalidField {
        /// Field position in scalars.
        field: usize,
        /// Record stride in scalars.
        stride: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// The normal equations of a fit have no finite solution.
    SingularSystem,

    /// Reading an input stream failed.
    Io(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            Self::InvalidThreshold {
                parameter,
                got,
                min,
            } => write!(
                f,
                "Invalid {}: {} (must be at least {})",
                parameter, got, min
            ),
            Self::InvalidColumn(c) => {
                write!(f, "Invalid column: {} (columns are numbered from 1)", c)
            }
            Self::InvalidField { field, stride } => write!(
                f,
                "Invalid field position: {} (must be less than stride {})",
                field, stride
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            Self::SingularSystem => write!(f, "Singular system: no finite solution"),
            Self::Io(s) => write!(f, "I/O error: {}", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for KernelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
