//! Output types and result structures for LOWESS operations.
//!
//! ## Purpose
//!
//! This module defines the `LowessResult` struct which carries the fitted
//! curve in ascending x order together with the metadata of the run.
//!
//! ## Design notes
//!
//! * **Sorted order**: `x` and `y` follow ascending x; the permutation in
//!   `indices` maps them back to the caller's order on request.
//! * **Optional outputs**: Residuals and robustness weights use
//!   `Option<Vec<T>>` and are only populated when requested.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All populated vectors have the same length as the input data.
//! * x-values are sorted in non-decreasing order.
//! * Robustness weights are always in the range [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond reordering.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::sorting::unsort;

// ============================================================================
// Result Structure
// ============================================================================

/// LOWESS output: the fitted curve plus run metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LowessResult<T> {
    /// Sorted x-values (independent variable).
    pub x: Vec<T>,

    /// Fitted values, aligned with `x`.
    pub y: Vec<T>,

    /// Sort permutation where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,

    /// Residuals from the fit (y_i - y_hat_i), in sorted order.
    pub residuals: Option<Vec<T>>,

    /// Robustness weights used by the final pass, in sorted order.
    pub robustness_weights: Option<Vec<T>>,

    /// Number of robustness iterations actually performed.
    pub iterations_used: usize,

    /// Smoothing fraction used for the fit.
    pub fraction_used: T,

    /// Number of neighbors in each local window.
    pub span: usize,
}

impl<T: Float> LowessResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of fitted points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the result holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(x_sorted, fitted)` pairs in ascending x order.
    pub fn pairs(&self) -> Vec<(T, T)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    /// Fitted values rearranged to the caller's original input order.
    pub fn fitted_in_input_order(&self) -> Vec<T> {
        unsort(&self.y, &self.indices)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for LowessResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Fraction:    {}", self.fraction_used)?;
        writeln!(f, "  Span:        {}", self.span)?;
        writeln!(f, "  Iterations:  {}", self.iterations_used)?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;

        let has_resid = self.residuals.is_some();
        let has_weights = self.robustness_weights.is_some();

        write!(f, "{:>8} {:>12}", "X", "Y_smooth")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        if has_weights {
            write!(f, " {:>10}", "Rob_Weight")?;
        }
        writeln!(f)?;

        let line_width = 21 + if has_resid { 13 } else { 0 } + if has_weights { 11 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;

            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.6}", resid[idx])?;
            }

            if let Some(weights) = &self.robustness_weights {
                write!(f, " {:>10.4}", weights[idx])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
