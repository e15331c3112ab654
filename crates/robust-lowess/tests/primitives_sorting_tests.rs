#![cfg(feature = "dev")]
//! Tests for sorting input pairs by x.
//!
//! ## Test Organization
//!
//! 1. **Sorting** - Ordering, y follows x, permutation
//! 2. **Stability** - Ties keep their input order
//! 3. **Unsorting** - Mapping back to input order

use robust_lowess::internals::primitives::sorting::{sort_by_x, unsort};

// ============================================================================
// Sorting Tests
// ============================================================================

#[test]
fn test_sort_by_x_basic() {
    let x = [3.0f64, 1.0, 2.0];
    let y = [30.0f64, 10.0, 20.0];

    let sorted = sort_by_x(&x, &y);

    assert_eq!(sorted.x, vec![1.0, 2.0, 3.0]);
    assert_eq!(sorted.y, vec![10.0, 20.0, 30.0]);
    assert_eq!(sorted.indices, vec![1, 2, 0]);
}

/// Already sorted input is returned unchanged with the identity permutation.
#[test]
fn test_sort_by_x_already_sorted() {
    let x = [1.0f64, 2.0, 2.0, 5.0];
    let y = [4.0f64, 3.0, 2.0, 1.0];

    let sorted = sort_by_x(&x, &y);

    assert_eq!(sorted.x, x.to_vec());
    assert_eq!(sorted.y, y.to_vec());
    assert_eq!(sorted.indices, vec![0, 1, 2, 3]);
}

#[test]
fn test_sort_by_x_negative_values() {
    let x = [0.5f64, -2.0, 1.5, -0.1];
    let y = [1.0f64, 2.0, 3.0, 4.0];

    let sorted = sort_by_x(&x, &y);

    assert_eq!(sorted.x, vec![-2.0, -0.1, 0.5, 1.5]);
    assert_eq!(sorted.y, vec![2.0, 4.0, 1.0, 3.0]);
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Tied x-values keep their input order.
#[test]
fn test_sort_by_x_stable_ties() {
    let x = [2.0f64, 1.0, 2.0, 1.0, 2.0];
    let y = [0.0f64, 1.0, 2.0, 3.0, 4.0];

    let sorted = sort_by_x(&x, &y);

    assert_eq!(sorted.x, vec![1.0, 1.0, 2.0, 2.0, 2.0]);
    assert_eq!(sorted.y, vec![1.0, 3.0, 0.0, 2.0, 4.0]);
    assert_eq!(sorted.indices, vec![1, 3, 0, 2, 4]);
}

// ============================================================================
// Unsorting Tests
// ============================================================================

#[test]
fn test_unsort_inverts_permutation() {
    let x = [0.3f64, -1.0, 2.0, 0.0, 1.0];
    let y = [5.0f64, 6.0, 7.0, 8.0, 9.0];

    let sorted = sort_by_x(&x, &y);
    let restored = unsort(&sorted.y, &sorted.indices);

    assert_eq!(restored, y.to_vec());
}

#[test]
fn test_unsort_identity() {
    let values = [1.0f32, 2.0, 3.0];
    assert_eq!(unsort(&values, &[0, 1, 2]), vec![1.0, 2.0, 3.0]);
}
