//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundations every other layer builds on:
//! - The `Scalar` trait and elementary scalar operations
//! - Build-time precision aliases
//! - Typed accessors over tabulated functions
//! - The crate error type
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Scalar trait and elementary primitives.
pub mod scalar;

/// Precision aliases.
pub mod precision;

/// Tabulated-function accessors.
pub mod view;
