//! Robustness weight computation for outlier downweighting.
//!
//! ## Purpose
//!
//! After each non-final pass, residuals are turned into per-sample weights
//! in [0, 1] that shrink the influence of large residuals on the next pass.
//!
//! ## Design notes
//!
//! * **Snapshots**: Weights are returned as a fresh vector; the previous
//!   pass's weights are never mutated.
//! * **Scale**: Bisquare thresholds at six times the median absolute residual,
//!   following Cleveland (1979).
//! * **Degenerate scale**: A numerically zero scale (near-perfect fit) yields
//!   `None`; the caller then keeps uniform weights.
//!
//! ## Invariants
//!
//! * Robustness weights are in [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not compute residuals or decide the number of passes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::ScalingMethod;

// ============================================================================
// Robustness Method
// ============================================================================

/// Robustness weighting method for outlier downweighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RobustnessMethod {
    /// Bisquare (Tukey's biweight), the classic LOWESS choice.
    ///
    /// w = (1 - (r / 6s)^2)^2 for |r| < 6s, else 0.
    #[default]
    Bisquare,

    /// Huber weights: w = 1 for |r|/s <= 1.345, else 1.345 s / |r|.
    ///
    /// Never rejects a point completely.
    Huber,

    /// Talwar hard threshold: w = 1 for |r|/s <= 2.5, else 0.
    Talwar,
}

impl RobustnessMethod {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Multiple of the residual scale where bisquare weights reach zero.
    const BISQUARE_C: f64 = 6.0;

    /// Huber threshold in units of the residual scale.
    const HUBER_C: f64 = 1.345;

    /// Talwar threshold in units of the residual scale.
    const TALWAR_C: f64 = 2.5;

    /// A tuned scale below this fraction of the mean absolute residual is
    /// treated as zero.
    const SCALE_THRESHOLD: f64 = 1e-7;

    // ========================================================================
    // Main API
    // ========================================================================

    /// Tuning constant of the method, in units of the residual scale.
    #[inline]
    pub fn tuning_constant(&self) -> f64 {
        match self {
            Self::Bisquare => Self::BISQUARE_C,
            Self::Huber => Self::HUBER_C,
            Self::Talwar => Self::TALWAR_C,
        }
    }

    /// Compute robustness weights from a full residual set.
    ///
    /// Returns `None` when the residual scale is numerically zero, in which
    /// case no down-weighting is possible.
    pub fn compute_weights<T: Float>(
        &self,
        residuals: &[T],
        scaling_method: ScalingMethod,
    ) -> Option<Vec<T>> {
        if residuals.is_empty() {
            return None;
        }

        let mut scratch = residuals.to_vec();
        let scale = scaling_method.compute(&mut scratch);

        let n = T::from(residuals.len()).unwrap();
        let mean_abs = residuals.iter().fold(T::zero(), |acc, r| acc + r.abs()) / n;

        let c = T::from(self.tuning_constant()).unwrap();
        let tuned = c * scale;
        if !(tuned > T::from(Self::SCALE_THRESHOLD).unwrap() * mean_abs) {
            log::debug!(
                "residual scale is numerically zero (scale={:?}, mean |r|={:?}); keeping uniform robustness weights",
                scale.to_f64(),
                mean_abs.to_f64()
            );
            return None;
        }

        let weights = residuals
            .iter()
            .map(|&r| match self {
                Self::Bisquare => Self::bisquare_weight(r, tuned),
                Self::Huber => Self::huber_weight(r, scale, c),
                Self::Talwar => Self::talwar_weight(r, scale, c),
            })
            .collect();

        Some(weights)
    }

    // ========================================================================
    // Weight Functions
    // ========================================================================

    /// Bisquare weight against the tuned scale `cmad = 6 * scale`.
    ///
    /// ```text
    /// w = (1 - (r/cmad)^2)^2   if |r| < cmad
    /// w = 0                    otherwise
    /// ```
    #[inline]
    pub fn bisquare_weight<T: Float>(residual: T, cmad: T) -> T {
        let r = residual.abs();
        if r < cmad {
            let u = r / cmad;
            let tmp = T::one() - u * u;
            tmp * tmp
        } else {
            T::zero()
        }
    }

    /// Huber weight: w(u) = 1 if u <= c, c / u otherwise, with u = |r| / s.
    #[inline]
    pub fn huber_weight<T: Float>(residual: T, scale: T, c: T) -> T {
        let u = (residual / scale).abs();
        if u <= c { T::one() } else { c / u }
    }

    /// Talwar weight: w(u) = 1 if u <= c, 0 otherwise, with u = |r| / s.
    #[inline]
    pub fn talwar_weight<T: Float>(residual: T, scale: T, c: T) -> T {
        let u = (residual / scale).abs();
        if u <= c { T::one() } else { T::zero() }
    }
}
