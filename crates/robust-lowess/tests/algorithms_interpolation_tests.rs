#![cfg(feature = "dev")]
//! Tests for anchor planning and linear interpolation.
//!
//! ## Test Organization
//!
//! 1. **Default Delta** - 1% of the x-range
//! 2. **Anchor Planning** - Inclusive cutpoint, ties, endpoints, monotonicity
//! 3. **Gap Interpolation** - Linear fill and tied anchors

use approx::assert_relative_eq;

use robust_lowess::internals::algorithms::interpolation::{
    default_delta, interpolate_gap, plan_anchors,
};

// ============================================================================
// Default Delta Tests
// ============================================================================

#[test]
fn test_default_delta_one_percent_of_range() {
    let x = [-5.0f64, 0.0, 2.0, 15.0];
    assert_relative_eq!(default_delta(&x), 0.2, epsilon = 1e-12);
}

#[test]
fn test_default_delta_degenerate() {
    assert_eq!(default_delta::<f64>(&[]), 0.0);
    assert_eq!(default_delta(&[3.0f64, 3.0]), 0.0);
}

// ============================================================================
// Anchor Planning Tests
// ============================================================================

/// Zero delta fits every sample.
#[test]
fn test_plan_anchors_zero_delta() {
    let x = [0.0f64, 0.5, 0.5, 1.0, 3.0];
    assert_eq!(plan_anchors(&x, 0.0), vec![0, 1, 2, 3, 4]);
}

/// The last sample within delta of the previous anchor is the next anchor.
#[test]
fn test_plan_anchors_skip_rule() {
    let x = [0.0f64, 0.1, 0.2, 0.3, 1.0, 1.05, 2.0];
    // From 0: cutpoint 0.5, last within is 0.3
    // From 0.3: nothing within 0.8, so the neighbor 1.0 is next
    // From 1.0: 1.05 is within 1.5; from 1.05: only 2.0 remains
    assert_eq!(plan_anchors(&x, 0.5), vec![0, 3, 4, 5, 6]);
}

/// A sample exactly delta away lies within the cutpoint.
#[test]
fn test_plan_anchors_boundary_inclusive() {
    let x = [0.0f64, 0.4, 0.8, 1.2, 1.6, 2.0];
    assert_eq!(plan_anchors(&x, 1.0), vec![0, 2, 4, 5]);

    let grid: Vec<f64> = (0..7).map(|i| i as f64 * 0.5).collect();
    assert_eq!(plan_anchors(&grid, 1.0), vec![0, 2, 4, 6]);
}

/// Without any sample within reach the next index is fitted.
#[test]
fn test_plan_anchors_sparse_data() {
    let x = [0.0f64, 5.0, 10.0, 15.0];
    assert_eq!(plan_anchors(&x, 1.0), vec![0, 1, 2, 3]);
}

/// Delta larger than the range keeps only the endpoints.
#[test]
fn test_plan_anchors_large_delta() {
    let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    assert_eq!(plan_anchors(&x, 100.0), vec![0, 19]);
}

/// Tied x-values are skipped by any positive delta.
#[test]
fn test_plan_anchors_ties() {
    let x = [1.0f64, 1.0, 1.0, 2.0];
    assert_eq!(plan_anchors(&x, 1e-9), vec![0, 3]);

    // Ties extend past the cutpoint of a tiny delta
    let x = [0.0f64, 0.0, 0.0, 0.0, 3.0, 3.0, 7.0];
    assert_eq!(plan_anchors(&x, 1.0), vec![0, 4, 6]);
}

/// Zero delta fits tied samples explicitly too.
#[test]
fn test_plan_anchors_zero_delta_with_ties() {
    let x = [1.0f64, 1.0, 1.0, 2.0];
    assert_eq!(plan_anchors(&x, 0.0), vec![0, 1, 2, 3]);
}

#[test]
fn test_plan_anchors_small_inputs() {
    assert!(plan_anchors::<f64>(&[], 1.0).is_empty());
    assert_eq!(plan_anchors(&[4.0f64], 1.0), vec![0]);
    assert_eq!(plan_anchors(&[4.0f64, 4.5], 1.0), vec![0, 1]);
}

/// Anchors are strictly increasing, start at 0 and end at n-1, and their
/// count never grows with delta.
#[test]
fn test_plan_anchors_monotone_in_delta() {
    let x: Vec<f64> = (0..200)
        .map(|i| (i as f64 * 0.37).sin() * 3.0 + i as f64 * 0.05)
        .collect();
    let mut x = x;
    x.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut prev_count = usize::MAX;
    for k in 0..40 {
        let delta = k as f64 * 0.05;
        let anchors = plan_anchors(&x, delta);

        assert_eq!(anchors.first(), Some(&0));
        assert_eq!(anchors.last(), Some(&(x.len() - 1)));
        assert!(anchors.windows(2).all(|w| w[0] < w[1]));
        assert!(anchors.len() <= prev_count, "delta={delta}");
        prev_count = anchors.len();
    }
}

// ============================================================================
// Gap Interpolation Tests
// ============================================================================

#[test]
fn test_interpolate_gap_linear() {
    let x = [0.0f64, 1.0, 3.0, 4.0];
    let mut y = [2.0f64, 0.0, 0.0, 10.0];

    interpolate_gap(&x, &mut y, 0, 3);

    assert_relative_eq!(y[1], 4.0, epsilon = 1e-12);
    assert_relative_eq!(y[2], 8.0, epsilon = 1e-12);
    assert_eq!(y[0], 2.0);
    assert_eq!(y[3], 10.0);
}

/// Adjacent anchors leave nothing to fill.
#[test]
fn test_interpolate_gap_adjacent() {
    let x = [0.0f64, 1.0];
    let mut y = [1.0f64, 2.0];

    interpolate_gap(&x, &mut y, 0, 1);

    assert_eq!(y, [1.0, 2.0]);
}

/// Anchors sharing an x-value fill the gap with their average.
#[test]
fn test_interpolate_gap_tied_anchors() {
    let x = [1.0f64, 1.0, 1.0];
    let mut y = [2.0f64, -7.0, 4.0];

    interpolate_gap(&x, &mut y, 0, 2);

    assert_relative_eq!(y[1], 3.0, epsilon = 1e-12);
}
