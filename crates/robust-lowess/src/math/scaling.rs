//! Robust scale estimation of residuals.
//!
//! The robustness loop sizes its down-weighting threshold from a scale
//! estimate that a handful of outliers cannot inflate.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Method for measuring the scale of residuals.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingMethod {
    /// Median Absolute Residual: `median(|r|)`.
    #[default]
    MAR,

    /// Median Absolute Deviation: `median(|r - median(r)|)`.
    MAD,
}

impl ScalingMethod {
    /// Compute the scale of `vals`, reordering the slice in place.
    pub fn compute<T: Float>(&self, vals: &mut [T]) -> T {
        match self {
            Self::MAR => Self::compute_mar(vals),
            Self::MAD => Self::compute_mad(vals),
        }
    }

    #[inline]
    fn compute_mad<T: Float>(vals: &mut [T]) -> T {
        if vals.is_empty() {
            return T::zero();
        }

        let median = Self::median_inplace(vals);
        for val in vals.iter_mut() {
            *val = (*val - median).abs();
        }

        Self::median_inplace(vals)
    }

    #[inline]
    fn compute_mar<T: Float>(vals: &mut [T]) -> T {
        for val in vals.iter_mut() {
            *val = val.abs();
        }

        Self::median_inplace(vals)
    }

    /// Median via quickselect; even lengths average the two middle values.
    pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
        let n = vals.len();
        if n == 0 {
            return T::zero();
        }

        let mid = n / 2;
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        let upper = vals[mid];

        if n.is_multiple_of(2) {
            // After selection, the lower middle is the max of the left part
            let lower = vals[..mid]
                .iter()
                .copied()
                .fold(T::neg_infinity(), T::max);
            (lower + upper) / (T::one() + T::one())
        } else {
            upper
        }
    }
}
