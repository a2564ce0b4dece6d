//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer combines the math building blocks into complete procedures:
//! - Index sorting by descending key, with deduplication
//! - Least-squares regression (linear, power law, polynomial, multivariate)
//! - Natural cubic spline fitting
//! - TVD flux limiters
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Index sorts and the deduplicating extended sort.
pub mod sort;

/// Least-squares regression.
pub mod regression;

/// Natural cubic spline.
pub mod spline;

/// TVD flux limiters.
pub mod flux_limiter;
