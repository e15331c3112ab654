//! Batch adapter for standard LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for LOWESS smoothing.
//! It handles complete datasets in memory with sequential processing.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, sorts, resolves delta, executes, and
//!   assembles the result.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built processor can fit any number of datasets.
//!
//! ## Invariants
//!
//! * Input arrays x and y must have the same length.
//! * All values must be finite.
//! * At least 2 data points are required.
//! * Output follows ascending x; the sort permutation is kept in the result.
//!
//! ## Non-goals
//!
//! * This adapter does not handle streaming or incremental data.
//! * This adapter does not handle missing values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::default_delta;
use crate::algorithms::regression::{WLSSolver, ZeroWeightFallback};
use crate::algorithms::robustness::RobustnessMethod;
use crate::engine::executor::LowessExecutor;
use crate::engine::output::LowessResult;
use crate::engine::validator::Validator;
use crate::math::kernel::WeightFunction;
use crate::math::scaling::ScalingMethod;
use crate::primitives::errors::LowessError;
use crate::primitives::sorting::sort_by_x;

// ============================================================================
// Batch LOWESS Builder
// ============================================================================

/// Resolved configuration for the batch processor.
#[derive(Debug, Clone)]
pub struct BatchLowessBuilder<T: Float> {
    /// Smoothing fraction (span)
    pub fraction: T,

    /// Number of robustness iterations
    pub iterations: usize,

    /// Interpolation distance
    pub delta: T,

    /// Derive delta from the data range instead of using `delta`
    pub auto_delta: bool,

    /// Kernel weight function
    pub weight_function: WeightFunction,

    /// Robustness method
    pub robustness_method: RobustnessMethod,

    /// Tolerance for auto-convergence
    pub auto_convergence: Option<T>,

    /// Whether to return residuals
    pub compute_residuals: bool,

    /// Whether to return robustness weights
    pub return_robustness_weights: bool,

    /// Policy for handling zero-weight neighborhoods
    pub zero_weight_fallback: ZeroWeightFallback,

    /// Scaling method for robust scale estimation (MAR/MAD)
    pub scaling_method: ScalingMethod,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchLowessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchLowessBuilder<T> {
    /// Create a new batch LOWESS builder with default parameters.
    fn new() -> Self {
        Self {
            fraction: T::from(2.0 / 3.0).unwrap(),
            iterations: 3,
            delta: T::zero(),
            auto_delta: false,
            weight_function: WeightFunction::default(),
            robustness_method: RobustnessMethod::default(),
            auto_convergence: None,
            compute_residuals: false,
            return_robustness_weights: false,
            zero_weight_fallback: ZeroWeightFallback::default(),
            scaling_method: ScalingMethod::default(),
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchLowess<T>, LowessError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_fraction(self.fraction)?;
        Validator::validate_iterations(self.iterations)?;
        Validator::validate_delta(self.delta)?;

        if let Some(tol) = self.auto_convergence {
            Validator::validate_tolerance(tol)?;
        }

        Ok(BatchLowess { config: self })
    }
}

// ============================================================================
// Batch LOWESS Processor
// ============================================================================

/// Batch LOWESS processor.
#[derive(Debug, Clone)]
pub struct BatchLowess<T: Float> {
    config: BatchLowessBuilder<T>,
}

impl<T: Float> BatchLowess<T> {
    /// Configuration this processor was built with.
    pub fn config(&self) -> &BatchLowessBuilder<T> {
        &self.config
    }
}

impl<T: Float + WLSSolver + Debug> BatchLowess<T> {
    /// Perform LOWESS smoothing on the provided data.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<LowessResult<T>, LowessError> {
        Validator::validate_inputs(x, y)?;

        let sorted = sort_by_x(x, y);
        let delta = if self.config.auto_delta {
            default_delta(&sorted.x)
        } else {
            self.config.delta
        };

        let executor = LowessExecutor::new()
            .fraction(self.config.fraction)
            .iterations(self.config.iterations)
            .delta(delta)
            .weight_function(self.config.weight_function)
            .zero_weight_fallback(self.config.zero_weight_fallback)
            .robustness_method(self.config.robustness_method)
            .scaling_method(self.config.scaling_method)
            .auto_convergence(self.config.auto_convergence);

        let output = executor.run(&sorted.x, &sorted.y);

        let residuals = if self.config.compute_residuals {
            Some(
                sorted
                    .y
                    .iter()
                    .zip(output.smoothed.iter())
                    .map(|(&orig, &smoothed_val)| orig - smoothed_val)
                    .collect::<Vec<T>>(),
            )
        } else {
            None
        };

        let robustness_weights = if self.config.return_robustness_weights {
            Some(output.robustness_weights)
        } else {
            None
        };

        Ok(LowessResult {
            x: sorted.x,
            y: output.smoothed,
            indices: sorted.indices,
            residuals,
            robustness_weights,
            iterations_used: output.iterations_used,
            fraction_used: self.config.fraction,
            span: output.span,
        })
    }
}
