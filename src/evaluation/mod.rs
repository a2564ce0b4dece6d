//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer measures how far one tabulated function is from another:
//! - Mean-square and root-mean-square error over any sample stream
//! - Array, record and column-file front ends
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean-square and root-mean-square error.
pub mod metrics;

/// Error metrics over column files.
#[cfg(feature = "std")]
pub mod files;
