//! Interpolation and delta optimization for LOWESS smoothing.
//!
//! ## Purpose
//!
//! Densely sampled data does not need a local regression at every point.
//! This module picks the anchor points that get an explicit fit and fills
//! the samples in between by linear interpolation.
//!
//! ## Design notes
//!
//! * **Plan once**: Anchors depend only on sorted x and delta, so the plan is
//!   computed once per call and shared by every robustness pass.
//! * **Binary search**: The next anchor is found with `partition_point`.
//!
//! ## Key concepts
//!
//! * **Anchor**: A sample fitted explicitly. Index 0 and the last index are
//!   always anchors.
//! * **Skip rule**: From anchor a, the cutpoint is `x[a] + delta`. The last
//!   sample at or below the cutpoint becomes the next anchor, or `a + 1` when
//!   nothing else is within reach. Samples tied with `x[a]` are never
//!   anchors when `delta > 0`; interpolation copies the anchor's fit to them.
//!
//! ## Invariants
//!
//! * Anchors are strictly increasing.
//! * `delta = 0` makes every sample an anchor.
//! * The anchor count never grows when delta grows.
//!
//! ## Non-goals
//!
//! * This module does not perform the fitting itself.
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Delta Calculation
// ============================================================================

/// Conventional delta for dense data: 1% of the x-range.
///
/// ```text
/// delta = 0.01 × (max(x) - min(x))
/// ```
pub fn default_delta<T: Float>(x_sorted: &[T]) -> T {
    match (x_sorted.first(), x_sorted.last()) {
        (Some(&first), Some(&last)) => T::from(0.01).unwrap() * (last - first),
        _ => T::zero(),
    }
}

// ============================================================================
// Anchor Planning
// ============================================================================

/// Indices of the samples that receive an explicit fit.
pub fn plan_anchors<T: Float>(x: &[T], delta: T) -> Vec<usize> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    if delta <= T::zero() {
        return (0..n).collect();
    }

    let mut anchors = Vec::with_capacity(16);
    let mut last = 0usize;
    anchors.push(last);

    while last < n - 1 {
        let x_last = x[last];
        let cutpoint = x_last + delta;

        // Samples in (last, last + within] lie at or below the cutpoint
        let within = x[last + 1..].partition_point(|&xj| xj <= cutpoint);
        let ties = x[last + 1..last + 1 + within].partition_point(|&xj| xj <= x_last);

        last = usize::max(last + within, last + ties + 1).min(n - 1);
        anchors.push(last);
    }

    anchors
}

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Fill `y_smooth[last_fitted + 1..current]` between two fitted anchors.
///
/// # Special cases
///
/// * **No gap**: Nothing to do when the anchors are adjacent.
/// * **Tied x-values**: If the anchors share an x-value, the gap gets the
///   average of their fits.
pub fn interpolate_gap<T: Float>(x: &[T], y_smooth: &mut [T], last_fitted: usize, current: usize) {
    if current <= last_fitted + 1 {
        return;
    }

    let x0 = x[last_fitted];
    let x1 = x[current];
    let y0 = y_smooth[last_fitted];
    let y1 = y_smooth[current];

    let denom = x1 - x0;

    if denom <= T::zero() {
        let avg = (y0 + y1) / T::from(2.0).unwrap();
        y_smooth[(last_fitted + 1)..current].fill(avg);
        return;
    }

    let slope = (y1 - y0) / denom;
    for k in (last_fitted + 1)..current {
        y_smooth[k] = y0 + (x[k] - x0) * slope;
    }
}
