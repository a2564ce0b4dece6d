//! High-level configuration API.
//!
//! ## Purpose
//!
//! This module provides the user-facing builder for the tunable parts of the
//! kernel: the size thresholds that decide how the index sorts split and
//! dispatch their work.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; every unset parameter keeps its default.
//! * **Validated**: Thresholds are checked when `.build()` is called.
//! * **Strict**: Setting the same parameter twice is reported as an error
//!   instead of silently keeping the last value.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`IndexSorter`] via `IndexSorter::new()`.
//! 2. Chain configuration methods (`.merge_block()`, `.flash_threshold()`,
//!    `.class_size()`).
//! 3. Call `.build()` to obtain a validated [`IndexSortConfig`].

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::flux_limiter::FluxLimiter;
pub use crate::algorithms::sort::{ExtendedSort, IndexSortConfig};
pub use crate::math::quadrature::GaussOrder;
pub use crate::primitives::errors::KernelError;

#[cfg(feature = "std")]
pub use crate::evaluation::files::ColumnSpec;

/// Fluent builder for the index-sort thresholds.
#[derive(Debug, Clone, Default)]
pub struct IndexSorter {
    /// Merge-sort block size.
    pub merge_block: Option<usize>,

    /// Minimum array length for flash sort.
    pub flash_threshold: Option<usize>,

    /// Average flash-sort class size.
    pub class_size: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl IndexSorter {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block size insertion-sorted before merging.
    pub fn merge_block(mut self, size: usize) -> Self {
        if self.merge_block.is_some() {
            self.duplicate_param = Some("merge_block");
        }
        self.merge_block = Some(size);
        self
    }

    /// Set the smallest array length sorted with flash sort.
    pub fn flash_threshold(mut self, size: usize) -> Self {
        if self.flash_threshold.is_some() {
            self.duplicate_param = Some("flash_threshold");
        }
        self.flash_threshold = Some(size);
        self
    }

    /// Set the average number of elements per flash-sort class.
    pub fn class_size(mut self, size: usize) -> Self {
        if self.class_size.is_some() {
            self.duplicate_param = Some("class_size");
        }
        self.class_size = Some(size);
        self
    }

    /// Validate the configuration and build it.
    pub fn build(self) -> Result<IndexSortConfig, KernelError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param).inspect_err(reject)?;

        let defaults = IndexSortConfig::default();
        let config = IndexSortConfig {
            merge_block: self.merge_block.unwrap_or(defaults.merge_block),
            flash_threshold: self.flash_threshold.unwrap_or(defaults.flash_threshold),
            class_size: self.class_size.unwrap_or(defaults.class_size),
        };
        config.validate().inspect_err(reject)?;
        Ok(config)
    }
}

fn reject(err: &KernelError) {
    tracing::debug!(%err, "index sort configuration rejected");
}
