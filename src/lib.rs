//! # numkern: numerical kernel for simulation codes
//!
//! A dependency-light, `no_std`-capable library of array algorithms used by
//! finite-volume and hydraulic solvers: searching, index sorting, tabulated
//! interpolation and integration, interval-restricted polynomial roots, dense
//! and banded linear solvers, least-squares regression, cubic splines, TVD flux
//! limiters and error metrics between tabulated functions.
//!
//! Every routine is generic over [`Scalar`](prelude::Scalar) (implemented for
//! `f32` and `f64`) and is a pure function of its arguments.
//!
//! ## Quick Start
//!
//! ### Searching and Interpolating
//!
//! ```rust
//! use numkern::prelude::*;
//!
//! let x = [1.0, 2.0, 4.0, 8.0];
//! let y = [0.0, 10.0, 30.0, 70.0];
//!
//! // Interval containing 3.0
//! assert_eq!(search(3.0, &x), 1);
//!
//! // Piecewise-linear value, clamped outside the table
//! assert_eq!(farray_interpolate(3.0, &x, &y), 20.0);
//! assert_eq!(farray_interpolate(9.0, &x, &y), 70.0);
//! ```
//!
//! ### Index Sorting
//!
//! Sorts never move the keys; they fill a permutation ordering them from
//! largest to smallest.
//!
//! ```rust
//! use numkern::prelude::*;
//!
//! let x = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//! let mut ni = [0usize; 8];
//! index_sort_flash(&x, &mut ni);
//!
//! let sorted: Vec<f64> = ni.iter().map(|&i| x[i]).collect();
//! assert_eq!(sorted, [9.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0]);
//! ```
//!
//! The size thresholds are configurable:
//!
//! ```rust
//! use numkern::prelude::*;
//!
//! let sorter = IndexSorter::new()
//!     .merge_block(8)
//!     .flash_threshold(128)
//!     .build()?;
//!
//! let x = [0.5, 2.5, 1.5];
//! let mut ni = [0usize; 3];
//! sorter.merge(&x, &mut ni);
//! assert_eq!(ni, [1, 2, 0]);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Linear Systems
//!
//! Banded solvers work in place: the diagonal is destroyed and the right-hand
//! side is replaced by the solution.
//!
//! ```rust
//! use numkern::prelude::*;
//!
//! let c = [1.0, 1.0];
//! let mut d = [2.0, 2.0, 2.0];
//! let e = [1.0, 1.0];
//! let mut h = [4.0, 6.0, 4.0];
//! tridiagonal(&c, &mut d, &e, &mut h);
//! assert!((h[1] - 2.0_f64).abs() < 1e-12);
//! ```
//!
//! ### Regression and Splines
//!
//! ```rust
//! use numkern::prelude::*;
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [1.0, 3.0, 5.0, 7.0];
//!
//! let line = regression_linear(&x, &y)?;
//! assert!((line.slope - 2.0_f64).abs() < 1e-12);
//!
//! let spline = spline_cubic(&x, &y)?;
//! assert_eq!(spline.segments(), 3);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Flux Limiters
//!
//! ```rust
//! use numkern::prelude::*;
//!
//! assert_eq!(flux_limiter::minmod(1.0, 2.0), 0.5);
//! assert_eq!(FluxLimiter::Minmod.apply(-1.0, 2.0), 0.0);
//! ```
//!
//! ## Error Handling
//!
//! Numerical degeneracy (a vanishing pivot, diagonal or leading coefficient)
//! is handled silently by falling back to a lower-order method or forcing a
//! zero. Only routines that validate their inputs return
//! `Result<_, KernelError>`: regression, spline fitting, the extended sort,
//! layout accessors, file metrics and the configuration builder.
//!
//! ## Precision
//!
//! [`Low`](prelude::Low) and [`High`](prelude::High) name the two widths a
//! simulation code works with. They default to `f32`/`f64`; the
//! `precision-single` and `precision-double` features collapse both to one
//! width.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! numkern = { version = "0.1", default-features = false }
//! ```
//!
//! Everything except the file-based metrics is available without `std`.
//!
//! ## Logging
//!
//! Diagnostic events (truncated input files, singular fits, rejected
//! configuration) are emitted through `tracing`; install a subscriber to see
//! them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - scalar trait, precision aliases, accessors, errors.
mod primitives;

// Layer 2: Math - search, interpolation, quadrature, equations and solvers.
mod math;

// Layer 3: Algorithms - sorting, regression, splines and flux limiters.
mod algorithms;

// Layer 4: Evaluation - error metrics between tabulated functions.
mod evaluation;

// Layer 5: Engine - input validation.
mod engine;

// High-level configuration builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard numkern prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to every kernel routine:
///
/// ```
/// use numkern::prelude::*;
/// ```
///
/// Flux limiters are reached through the [`flux_limiter`](prelude::flux_limiter)
/// module to keep their short names out of the glob.
pub mod prelude {
    pub use crate::api::{
        ExtendedSort, FluxLimiter, GaussOrder, IndexSortConfig, IndexSorter, KernelError,
    };

    #[cfg(feature = "std")]
    pub use crate::api::ColumnSpec;

    pub use crate::primitives::precision::{High, Low};
    pub use crate::primitives::scalar::{Scalar, dbl, max, min, modmin, sqr};
    pub use crate::primitives::view::{Columns, Records, Strided, Tabulated};

    pub use crate::math::banded::{pentadiagonal, pentadiagonal_zero, tridiagonal, tridiagonal_zero};
    pub use crate::math::equations::{
        cubic, cubic_checked, cubic_reduced, cubic_reduced_checked, quadratic, quadratic_checked,
        quadratic_reduced, quadratic_reduced_checked,
    };
    pub use crate::math::interpolation::{extrapolate, farray_interpolate, interpolate};
    pub use crate::math::linalg::{dense_solution, solve_dense};
    pub use crate::math::quadrature::{farray_integral, gauss_integral, integral};
    pub use crate::math::search::{Bracket, search, search_extended};

    pub use crate::algorithms::flux_limiter;
    pub use crate::algorithms::regression::{
        Line, Power, polynomial_evaluate, regression_exponential, regression_linear,
        regression_multiexponential, regression_multilinear, regression_polynomial,
    };
    pub use crate::algorithms::sort::{
        index_sort, index_sort_extended, index_sort_flash, index_sort_insertion,
        index_sort_interchange, index_sort_merge,
    };
    pub use crate::algorithms::spline::{CubicSpline, spline_cubic};

    pub use crate::evaluation::metrics::{
        farray_mean_square_error, farray_root_mean_square_error, mean_square_error,
        root_mean_square_error, streamed_mean_square_error, tabulated_mean_square_error,
        tabulated_root_mean_square_error,
    };

    #[cfg(feature = "std")]
    pub use crate::evaluation::files::{
        ColumnReader, file_mean_square_error, file_mean_square_error_paths,
        file_root_mean_square_error, file_root_mean_square_error_paths,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal error metrics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
