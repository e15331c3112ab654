//! Sorting utilities for LOWESS input data.
//!
//! ## Purpose
//!
//! Smoothing runs over x in ascending order. This module produces the sorted
//! pairs together with the permutation needed to map results back.
//!
//! ## Design notes
//!
//! * **Stability**: Equal x-values keep their input order, so results are
//!   deterministic under ties.
//! * **Fast path**: Already sorted input is copied without sorting.
//!
//! ## Invariants
//!
//! * Sorted x-values are non-decreasing.
//! * `indices` is a permutation of `0..n` with `indices[sorted] = original`.
//!
//! ## Non-goals
//!
//! * This module does not validate input (non-finite values are rejected
//!   earlier by the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Input pairs sorted by x-coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedData<T> {
    /// Sorted x-coordinates.
    pub x: Vec<T>,

    /// Y-coordinates permuted to follow `x`.
    pub y: Vec<T>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Stable sort of `(x, y)` pairs by ascending x.
///
/// Only `(x, index)` tuples are moved during the sort; y is gathered once
/// afterwards.
#[inline]
pub fn sort_by_x<T: Float>(x: &[T], y: &[T]) -> SortedData<T> {
    let n = x.len();

    if x.windows(2).all(|w| w[0] <= w[1]) {
        return SortedData {
            x: x.to_vec(),
            y: y.to_vec(),
            indices: (0..n).collect(),
        };
    }

    let mut pairs: Vec<(T, usize)> = x.iter().copied().zip(0..n).collect();

    // `sort_by` is stable: tied x keep their original relative order
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedData {
        x: pairs.iter().map(|p| p.0).collect(),
        y: pairs.iter().map(|p| y[p.1]).collect(),
        indices: pairs.iter().map(|p| p.1).collect(),
    }
}

/// Map sorted values back to the original input order in O(n).
#[inline]
pub fn unsort<T: Float>(sorted_values: &[T], indices: &[usize]) -> Vec<T> {
    let mut result = vec![T::zero(); indices.len()];

    for (sorted_idx, &orig_idx) in indices.iter().enumerate() {
        result[orig_idx] = sorted_values[sorted_idx];
    }

    result
}
