//! Build-time selection of the two floating widths.
//!
//! The kernel is generic over [`Scalar`](crate::primitives::scalar::Scalar);
//! these aliases fix the pair a simulation code instantiates it with.
//!
//! | Feature            | `Low` | `High` |
//! |--------------------|-------|--------|
//! | (default)          | `f32` | `f64`  |
//! | `precision-single` | `f32` | `f32`  |
//! | `precision-double` | `f64` | `f64`  |
//!
//! `precision-double` wins when both features are enabled.

/// Low-precision width.
#[cfg(not(feature = "precision-double"))]
pub type Low = f32;

/// Low-precision width.
#[cfg(feature = "precision-double")]
pub type Low = f64;

/// High-precision width.
#[cfg(all(feature = "precision-single", not(feature = "precision-double")))]
pub type High = f32;

/// High-precision width.
#[cfg(any(not(feature = "precision-single"), feature = "precision-double"))]
pub type High = f64;
