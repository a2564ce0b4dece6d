//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks of the kernel:
//! - Binary search over sorted arrays
//! - Linear extrapolation and interpolation
//! - Gauss-Legendre and tabulated quadrature
//! - Interval-restricted quadratic and cubic solvers
//! - Dense and banded linear-system solvers
//!
//! These routines operate on caller-owned buffers and never allocate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binary search and extended (sentinel) search.
pub mod search;

/// Linear extrapolation and interpolation.
pub mod interpolation;

/// Gauss-Legendre and tabulated quadrature.
pub mod quadrature;

/// Quadratic and cubic equation solvers.
pub mod equations;

/// Dense Gaussian elimination.
pub mod linalg;

/// Tridiagonal and pentadiagonal solvers.
pub mod banded;
