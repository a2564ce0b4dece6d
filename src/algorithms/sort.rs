//! Index sorting by descending key.
//!
//! ## Purpose
//!
//! This module produces permutations `ni` such that `x[ni[0]] >= x[ni[1]] >=
//! ... >= x[ni[n]]`. Four interchangeable algorithms are provided, plus a
//! size-based dispatcher and an extended sort that deduplicates keys.
//!
//! ## Design notes
//!
//! * **Insertion**: O(n^2) worst case, O(n) on nearly sorted data; the base
//!   case of the other algorithms.
//! * **Interchange**: Selection sort with predictable O(n^2) cost.
//! * **Merge**: Insertion-sorts fixed blocks, then merges adjacent runs
//!   bottom-up, doubling the run width each pass.
//! * **Flash**: Distribution sort into `len / class_size` classes by linear
//!   scaling of the key, then insertion sort inside each class.
//! * **Thresholds**: Carried by [`IndexSortConfig`]; the free functions use
//!   its defaults.
//!
//! ## Invariants
//!
//! * Every routine fills `ni` with a permutation of `0..len` before sorting;
//!   the caller's previous contents are ignored.
//! * Insertion, merge and flash sorts are stable: equal keys keep their
//!   original relative order.
//! * No routine reads past `x[len - 1]`.
//!
//! ## Non-goals
//!
//! * NaN keys produce an unspecified (but valid) permutation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem;
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;

// ============================================================================
// Configuration
// ============================================================================

/// Size thresholds of the index sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexSortConfig {
    /// Block size insertion-sorted before merging; merge sort uses insertion
    /// sort outright at or below this size.
    pub merge_block: usize,
    /// Smallest array flash-sorted; smaller arrays use insertion sort.
    pub flash_threshold: usize,
    /// Average number of elements per flash-sort class.
    pub class_size: usize,
}

impl IndexSortConfig {
    /// Default merge-sort block size.
    pub const DEFAULT_MERGE_BLOCK: usize = 32;

    /// Default flash-sort threshold.
    pub const DEFAULT_FLASH_THRESHOLD: usize = 64;

    /// Default flash-sort class size.
    pub const DEFAULT_CLASS_SIZE: usize = 16;

    /// Smallest accepted merge block.
    pub const MIN_MERGE_BLOCK: usize = 1;

    /// Smallest accepted flash threshold.
    pub const MIN_FLASH_THRESHOLD: usize = 2;

    /// Smallest accepted class size.
    pub const MIN_CLASS_SIZE: usize = 1;

    /// Check every threshold against its minimum.
    pub fn validate(&self) -> Result<(), KernelError> {
        Validator::validate_threshold("merge_block", self.merge_block, Self::MIN_MERGE_BLOCK)?;
        Validator::validate_threshold(
            "flash_threshold",
            self.flash_threshold,
            Self::MIN_FLASH_THRESHOLD,
        )?;
        Validator::validate_threshold("class_size", self.class_size, Self::MIN_CLASS_SIZE)
    }

    // ========================================================================
    // Algorithms
    // ========================================================================

    /// Insertion sort.
    pub fn insertion<T: PartialOrd + Copy>(&self, x: &[T], ni: &mut [usize]) {
        reset(x, ni);
        insertion_run(x, ni);
    }

    /// Interchange (selection) sort.
    pub fn interchange<T: PartialOrd + Copy>(&self, x: &[T], ni: &mut [usize]) {
        reset(x, ni);
        let len = ni.len();
        for i in 0..len.saturating_sub(1) {
            let mut best = i;
            for j in (i + 1)..len {
                if x[ni[j]] > x[ni[best]] {
                    best = j;
                }
            }
            if best != i {
                ni.swap(i, best);
            }
        }
    }

    /// Block merge sort.
    pub fn merge<T: PartialOrd + Copy>(&self, x: &[T], ni: &mut [usize]) {
        reset(x, ni);
        let len = ni.len();
        let block = self.merge_block.max(1);
        if len <= block {
            insertion_run(x, ni);
            return;
        }

        for run in ni.chunks_mut(block) {
            insertion_run(x, run);
        }

        let mut src = ni.to_vec();
        let mut dst = vec![0; len];
        let mut width = block;
        while width < len {
            let mut start = 0;
            while start < len {
                let mid = (start + width).min(len);
                let end = (start + 2 * width).min(len);
                merge_runs(x, &src[start..mid], &src[mid..end], &mut dst[start..end]);
                start = end;
            }
            mem::swap(&mut src, &mut dst);
            width *= 2;
        }
        ni.copy_from_slice(&src);
    }

    /// Flash (distribution) sort; falls back to insertion sort below
    /// `flash_threshold` elements.
    pub fn flash<T: Float>(&self, x: &[T], ni: &mut [usize]) {
        reset(x, ni);
        let len = ni.len();
        if len < self.flash_threshold.max(2) {
            insertion_run(x, ni);
            return;
        }

        let (lo, hi) = x
            .iter()
            .fold((x[0], x[0]), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if !(hi > lo) {
            // Constant (or NaN-only) keys: the identity is already sorted
            return;
        }

        let classes = (len / self.class_size.max(1)).max(1);
        let last = classes - 1;
        let scale = T::from(last).unwrap_or_else(T::zero) / (hi - lo);
        // Largest keys land in class 0
        let class_of = |v: T| ((hi - v) * scale).to_usize().unwrap_or(0).min(last);

        let mut start = vec![0usize; classes + 1];
        for &v in x {
            start[class_of(v) + 1] += 1;
        }
        for k in 0..classes {
            start[k + 1] += start[k];
        }

        let mut next = start[..classes].to_vec();
        let mut placed = vec![0usize; len];
        for (i, &v) in x.iter().enumerate() {
            let k = class_of(v);
            placed[next[k]] = i;
            next[k] += 1;
        }
        ni.copy_from_slice(&placed);

        for k in 0..classes {
            insertion_run(x, &mut ni[start[k]..start[k + 1]]);
        }
    }

    /// Dispatcher: flash sort at or above `flash_threshold`, insertion below.
    pub fn sort<T: Float>(&self, x: &[T], ni: &mut [usize]) {
        if x.len() >= self.flash_threshold {
            self.flash(x, ni);
        } else {
            self.insertion(x, ni);
        }
    }

    /// Sort and deduplicate keys.
    ///
    /// Returns the distinct keys in increasing order (ready for
    /// [`search`](crate::math::search::search)) together with the rank of
    /// every original element in that array.
    pub fn sort_extended<T: Float>(&self, x: &[T]) -> Result<ExtendedSort<T>, KernelError> {
        if x.is_empty() {
            return Err(KernelError::EmptyInput);
        }
        Validator::validate_finite(x, "x")?;

        let mut ni = vec![0usize; x.len()];
        self.sort(x, &mut ni);

        let mut values: Vec<T> = Vec::with_capacity(x.len());
        let mut rank = vec![0usize; x.len()];
        for &i in ni.iter().rev() {
            if values.last().is_none_or(|&v| x[i] > v) {
                values.push(x[i]);
            }
            rank[i] = values.len() - 1;
        }
        Ok(ExtendedSort { values, rank })
    }
}

impl Default for IndexSortConfig {
    fn default() -> Self {
        Self {
            merge_block: Self::DEFAULT_MERGE_BLOCK,
            flash_threshold: Self::DEFAULT_FLASH_THRESHOLD,
            class_size: Self::DEFAULT_CLASS_SIZE,
        }
    }
}

/// Result of [`IndexSortConfig::sort_extended`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedSort<T> {
    /// Distinct keys, strictly increasing.
    pub values: Vec<T>,
    /// `rank[i]` is the position of `x[i]` in `values`.
    pub rank: Vec<usize>,
}

impl<T> ExtendedSort<T> {
    /// Highest valid index of `values`.
    pub fn last(&self) -> usize {
        self.values.len() - 1
    }
}

// ============================================================================
// Free Functions (default thresholds)
// ============================================================================

/// Insertion sort of `ni` by descending `x`.
#[inline]
pub fn index_sort_insertion<T: PartialOrd + Copy>(x: &[T], ni: &mut [usize]) {
    IndexSortConfig::default().insertion(x, ni);
}

/// Interchange sort of `ni` by descending `x`.
#[inline]
pub fn index_sort_interchange<T: PartialOrd + Copy>(x: &[T], ni: &mut [usize]) {
    IndexSortConfig::default().interchange(x, ni);
}

/// Merge sort of `ni` by descending `x`.
#[inline]
pub fn index_sort_merge<T: PartialOrd + Copy>(x: &[T], ni: &mut [usize]) {
    IndexSortConfig::default().merge(x, ni);
}

/// Flash sort of `ni` by descending `x`.
#[inline]
pub fn index_sort_flash<T: Float>(x: &[T], ni: &mut [usize]) {
    IndexSortConfig::default().flash(x, ni);
}

/// Default index sort of `ni` by descending `x`.
#[inline]
pub fn index_sort<T: Float>(x: &[T], ni: &mut [usize]) {
    IndexSortConfig::default().sort(x, ni);
}

/// Deduplicating sort with default thresholds.
#[inline]
pub fn index_sort_extended<T: Float>(x: &[T]) -> Result<ExtendedSort<T>, KernelError> {
    IndexSortConfig::default().sort_extended(x)
}

// ============================================================================
// Helpers
// ============================================================================

/// Fill `ni` with the identity permutation.
#[inline]
fn reset<T>(x: &[T], ni: &mut [usize]) {
    debug_assert_eq!(x.len(), ni.len());
    for (i, slot) in ni.iter_mut().enumerate() {
        *slot = i;
    }
}

/// Stable insertion sort of an already populated run.
#[inline]
fn insertion_run<T: PartialOrd + Copy>(x: &[T], ni: &mut [usize]) {
    for i in 1..ni.len() {
        let ii = ni[i];
        let xi = x[ii];
        let mut j = i;
        while j > 0 && x[ni[j - 1]] < xi {
            ni[j] = ni[j - 1];
            j -= 1;
        }
        ni[j] = ii;
    }
}

/// Stable merge of two descending runs into `out`.
#[inline]
fn merge_runs<T: PartialOrd + Copy>(x: &[T], left: &[usize], right: &[usize], out: &mut [usize]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && !(x[left[i]] < x[right[j]]));
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_runs_is_stable() {
        let x = [1.0, 2.0, 2.0, 1.0];
        let mut out = [0; 4];
        merge_runs(&x, &[1, 0], &[2, 3], &mut out);
        assert_eq!(out, [1, 2, 0, 3]);
    }

    #[test]
    fn test_insertion_run_partial() {
        let x = [5.0, 1.0, 3.0];
        let mut ni = [1, 2];
        insertion_run(&x, &mut ni);
        assert_eq!(ni, [2, 1]);
    }
}
