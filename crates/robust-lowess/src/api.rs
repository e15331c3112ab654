//! High-level API for LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the [`smooth`] free
//! function with the classic `(frac, it, delta)` parameters, and a fluent
//! builder for the full set of options.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called; a
//!   parameter set twice is reported as an error there.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LowessBuilder`] via `Lowess::new()`.
//! 2. Chain configuration methods (`.fraction()`, `.iterations()`, etc.).
//! 3. Call `.build()` to get a validated processor, then `.fit(&x, &y)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::{BatchLowess, BatchLowessBuilder};
use crate::algorithms::regression::WLSSolver;

// Publicly re-exported types
pub use crate::algorithms::regression::ZeroWeightFallback;
pub use crate::algorithms::robustness::RobustnessMethod;
pub use crate::engine::output::LowessResult;
pub use crate::math::kernel::WeightFunction;
pub use crate::math::scaling::ScalingMethod;
pub use crate::primitives::errors::LowessError;

// ============================================================================
// Free Functions
// ============================================================================

/// Robust LOWESS smoothing with the classic parameters.
///
/// Returns `(x, fitted)` pairs sorted by ascending x; tied x-values keep
/// their input order.
///
/// * `frac`: fraction of points in each local window, in (0, 1].
/// * `it`: robustness iterations after the initial fit (0 = plain LOWESS).
/// * `delta`: samples within `delta` of the last fitted point are
///   interpolated instead of fitted (0 = fit every point).
///
/// # Errors
///
/// Returns [`LowessError`] for mismatched lengths, fewer than 2 points,
/// non-finite values, or parameters out of range.
pub fn smooth<T>(x: &[T], y: &[T], frac: T, it: usize, delta: T) -> Result<Vec<(T, T)>, LowessError>
where
    T: Float + WLSSolver + Debug,
{
    let result = LowessBuilder::new()
        .fraction(frac)
        .iterations(it)
        .delta(delta)
        .build()?
        .fit(x, y)?;

    Ok(result.pairs())
}

/// [`smooth`] with `frac = 2/3`, `it = 3` and `delta = 0`.
pub fn smooth_default<T>(x: &[T], y: &[T]) -> Result<Vec<(T, T)>, LowessError>
where
    T: Float + WLSSolver + Debug,
{
    let result = LowessBuilder::new().build()?.fit(x, y)?;
    Ok(result.pairs())
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring LOWESS parameters.
#[derive(Debug, Clone)]
pub struct LowessBuilder<T> {
    /// Smoothing fraction (0..1].
    pub fraction: Option<T>,

    /// Robustness iterations.
    pub iterations: Option<usize>,

    /// Threshold for skipping fitting (delta-optimization).
    pub delta: Option<T>,

    /// Derive delta as 1% of the x-range.
    pub auto_delta: Option<bool>,

    /// Kernel weight function.
    pub weight_function: Option<WeightFunction>,

    /// Outlier downweighting method.
    pub robustness_method: Option<RobustnessMethod>,

    /// Scaling method for robust scale estimation (MAR/MAD).
    pub scaling_method: Option<ScalingMethod>,

    /// Absolute convergence tolerance.
    pub auto_convergence: Option<T>,

    /// Return original residuals r_i.
    pub compute_residuals: Option<bool>,

    /// Return final robustness weights w_i.
    pub return_robustness_weights: Option<bool>,

    /// Behavior when local neighborhood weights are zero (default: ReturnOriginal).
    pub zero_weight_fallback: Option<ZeroWeightFallback>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LowessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LowessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fraction: None,
            iterations: None,
            delta: None,
            auto_delta: None,
            weight_function: None,
            robustness_method: None,
            scaling_method: None,
            auto_convergence: None,
            compute_residuals: None,
            return_robustness_weights: None,
            zero_weight_fallback: None,
            duplicate_param: None,
        }
    }

    /// Set behavior for handling zero-weight neighborhoods.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        if self.zero_weight_fallback.is_some() {
            self.duplicate_param = Some("zero_weight_fallback");
        }
        self.zero_weight_fallback = Some(policy);
        self
    }

    /// Set the smoothing fraction (bandwidth alpha).
    pub fn fraction(mut self, fraction: T) -> Self {
        if self.fraction.is_some() {
            self.duplicate_param = Some("fraction");
        }
        self.fraction = Some(fraction);
        self
    }

    /// Set the number of robustness iterations (typically 0-4).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the delta parameter for interpolation-based optimization.
    pub fn delta(mut self, delta: T) -> Self {
        if self.delta.is_some() || self.auto_delta.is_some() {
            self.duplicate_param = Some("delta");
        }
        self.delta = Some(delta);
        self
    }

    /// Use 1% of the x-range as delta.
    pub fn auto_delta(mut self) -> Self {
        if self.delta.is_some() || self.auto_delta.is_some() {
            self.duplicate_param = Some("delta");
        }
        self.auto_delta = Some(true);
        self
    }

    /// Set the kernel weight function.
    pub fn weight_function(mut self, wf: WeightFunction) -> Self {
        if self.weight_function.is_some() {
            self.duplicate_param = Some("weight_function");
        }
        self.weight_function = Some(wf);
        self
    }

    /// Set the robustness weighting method.
    pub fn robustness_method(mut self, rm: RobustnessMethod) -> Self {
        if self.robustness_method.is_some() {
            self.duplicate_param = Some("robustness_method");
        }
        self.robustness_method = Some(rm);
        self
    }

    /// Set the scaling method for robust scale estimation.
    pub fn scaling_method(mut self, sm: ScalingMethod) -> Self {
        if self.scaling_method.is_some() {
            self.duplicate_param = Some("scaling_method");
        }
        self.scaling_method = Some(sm);
        self
    }

    /// Stop robustness iterations once the largest change between two
    /// passes is at most `tolerance`.
    pub fn auto_converge(mut self, tolerance: T) -> Self {
        if self.auto_convergence.is_some() {
            self.duplicate_param = Some("auto_converge");
        }
        self.auto_convergence = Some(tolerance);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.compute_residuals = Some(true);
        self
    }

    /// Include final robustness weights in output.
    pub fn return_robustness_weights(mut self) -> Self {
        self.return_robustness_weights = Some(true);
        self
    }

    /// Validate the configuration and build a batch processor.
    pub fn build(self) -> Result<BatchLowess<T>, LowessError> {
        BatchLowessBuilder::from(self).build()
    }
}

impl<T: Float> From<LowessBuilder<T>> for BatchLowessBuilder<T> {
    fn from(builder: LowessBuilder<T>) -> Self {
        let mut result = BatchLowessBuilder::default();

        if let Some(fraction) = builder.fraction {
            result.fraction = fraction;
        }
        if let Some(iterations) = builder.iterations {
            result.iterations = iterations;
        }
        if let Some(delta) = builder.delta {
            result.delta = delta;
        }
        if let Some(ad) = builder.auto_delta {
            result.auto_delta = ad;
        }
        if let Some(wf) = builder.weight_function {
            result.weight_function = wf;
        }
        if let Some(rm) = builder.robustness_method {
            result.robustness_method = rm;
        }
        if let Some(ac) = builder.auto_convergence {
            result.auto_convergence = Some(ac);
        }
        if let Some(zwf) = builder.zero_weight_fallback {
            result.zero_weight_fallback = zwf;
        }
        if let Some(sm) = builder.scaling_method {
            result.scaling_method = sm;
        }
        if let Some(rw) = builder.return_robustness_weights {
            result.return_robustness_weights = rw;
        }
        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
