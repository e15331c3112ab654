//! Execution engine for LOWESS smoothing operations.
//!
//! ## Purpose
//!
//! This module runs the robustness loop: an initial fitting pass with uniform
//! robustness weights, followed by `iterations` refitting passes whose
//! weights are derived from the previous pass's residuals.
//!
//! ## Design notes
//!
//! * **Snapshots**: Each pass reads a frozen robustness snapshot and writes a
//!   fresh fitted vector. No pass mutates the data of the previous one.
//! * **Plan once**: The window span and the anchor plan depend only on the
//!   sorted x-values, so they are computed once per run.
//! * **Sticky uniform weights**: Once the residual scale collapses to zero,
//!   the remaining passes keep uniform weights.
//! * **Early stop**: With a convergence tolerance, the loop stops as soon as
//!   two consecutive passes agree to within that tolerance.
//!
//! ## Invariants
//!
//! * Input x-values are sorted ascending and validated.
//! * Robustness weights are always in [0, 1].
//! * Window size is at least 2 and at most n.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data (handled by the adapters).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::{interpolate_gap, plan_anchors};
use crate::algorithms::regression::{RegressionContext, WLSSolver, ZeroWeightFallback};
use crate::algorithms::robustness::RobustnessMethod;
use crate::math::kernel::WeightFunction;
use crate::math::scaling::ScalingMethod;
use crate::primitives::window::Window;

// ============================================================================
// Type Definitions
// ============================================================================

/// Output from LOWESS execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Fitted values in sorted order.
    pub smoothed: Vec<T>,

    /// Robustness weights used by the final pass.
    pub robustness_weights: Vec<T>,

    /// Number of robustness passes performed after the initial fit.
    pub iterations_used: usize,

    /// Window size used for every local fit.
    pub span: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for LOWESS smoothing operations.
#[derive(Debug, Clone)]
pub struct LowessExecutor<T: Float> {
    /// Smoothing fraction (0, 1].
    pub fraction: T,

    /// Number of robustness iterations.
    pub iterations: usize,

    /// Delta for interpolation optimization.
    pub delta: T,

    /// Kernel weight function.
    pub weight_function: WeightFunction,

    /// Policy for windows whose weights sum to zero.
    pub zero_weight_fallback: ZeroWeightFallback,

    /// Robustness method for iterative refinement.
    pub robustness_method: RobustnessMethod,

    /// Scaling method for robust scale estimation.
    pub scaling_method: ScalingMethod,

    /// Auto-convergence tolerance.
    pub auto_convergence: Option<T>,
}

impl<T: Float> Default for LowessExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LowessExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            fraction: T::from(2.0 / 3.0).unwrap(),
            iterations: 3,
            delta: T::zero(),
            weight_function: WeightFunction::Tricube,
            zero_weight_fallback: ZeroWeightFallback::default(),
            robustness_method: RobustnessMethod::Bisquare,
            scaling_method: ScalingMethod::default(),
            auto_convergence: None,
        }
    }

    /// Set the smoothing fraction (bandwidth).
    pub fn fraction(mut self, frac: T) -> Self {
        self.fraction = frac;
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, niter: usize) -> Self {
        self.iterations = niter;
        self
    }

    /// Set the delta parameter for interpolation optimization.
    pub fn delta(mut self, delta: T) -> Self {
        self.delta = delta;
        self
    }

    /// Set the kernel weight function.
    pub fn weight_function(mut self, wf: WeightFunction) -> Self {
        self.weight_function = wf;
        self
    }

    /// Set the zero weight fallback policy.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        self.zero_weight_fallback = policy;
        self
    }

    /// Set the robustness method for iterative refinement.
    pub fn robustness_method(mut self, method: RobustnessMethod) -> Self {
        self.robustness_method = method;
        self
    }

    /// Set the scaling method for robust scale estimation.
    pub fn scaling_method(mut self, method: ScalingMethod) -> Self {
        self.scaling_method = method;
        self
    }

    /// Set the auto-convergence tolerance.
    pub fn auto_convergence(mut self, tolerance: Option<T>) -> Self {
        self.auto_convergence = tolerance;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run the robustness loop over sorted, validated data.
    pub fn run(&self, x: &[T], y: &[T]) -> ExecutorOutput<T>
    where
        T: WLSSolver + Debug,
    {
        let n = x.len();
        let span = Window::calculate_span(n, self.fraction);
        let anchors = plan_anchors(x, self.delta);

        let mut robustness: Option<Vec<T>> = None;
        let mut scale_collapsed = false;
        let mut iterations_used = 0;

        let mut smoothed = Self::smooth_pass(
            x,
            y,
            span,
            &anchors,
            None,
            self.weight_function,
            self.zero_weight_fallback,
        );

        for iter in 1..=self.iterations {
            if !scale_collapsed {
                let residuals = Self::compute_residuals(y, &smoothed);
                robustness = self
                    .robustness_method
                    .compute_weights(&residuals, self.scaling_method);
                scale_collapsed = robustness.is_none();
            }

            let next = Self::smooth_pass(
                x,
                y,
                span,
                &anchors,
                robustness.as_deref(),
                self.weight_function,
                self.zero_weight_fallback,
            );
            iterations_used = iter;

            let converged = self
                .auto_convergence
                .is_some_and(|tol| Self::check_convergence(&next, &smoothed, tol));
            smoothed = next;

            if converged {
                log::debug!("robustness loop converged after {} iterations", iter);
                break;
            }
        }

        ExecutorOutput {
            smoothed,
            robustness_weights: robustness.unwrap_or_else(|| vec![T::one(); n]),
            iterations_used,
            span,
        }
    }

    // ========================================================================
    // Main Algorithmic Logic
    // ========================================================================

    /// Perform a single smoothing pass over all points.
    ///
    /// Anchors are fitted explicitly in ascending order while the window
    /// slides right; the samples between two anchors are interpolated.
    pub fn smooth_pass(
        x: &[T],
        y: &[T],
        span: usize,
        anchors: &[usize],
        robustness_weights: Option<&[T]>,
        weight_function: WeightFunction,
        zero_weight_fallback: ZeroWeightFallback,
    ) -> Vec<T>
    where
        T: WLSSolver + Debug,
    {
        let n = x.len();
        let mut y_smooth = vec![T::zero(); n];
        let mut weights = vec![T::zero(); span];
        let mut window = Window::initialize(span, n);
        let mut last_fitted: Option<usize> = None;

        for &idx in anchors {
            window.advance(x, idx);

            let mut ctx = RegressionContext {
                x,
                y,
                idx,
                window,
                robustness_weights,
                weights: &mut weights,
                weight_function,
                zero_weight_fallback,
            };
            y_smooth[idx] = ctx.fit();

            if let Some(prev) = last_fitted {
                interpolate_gap(x, &mut y_smooth, prev, idx);
            }
            last_fitted = Some(idx);
        }

        y_smooth
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Residuals `y - y_smooth`.
    pub fn compute_residuals(y: &[T], y_smooth: &[T]) -> Vec<T> {
        y.iter().zip(y_smooth).map(|(&yi, &si)| yi - si).collect()
    }

    /// Check convergence between current and previous smoothed values.
    pub fn check_convergence(y_smooth: &[T], y_prev: &[T], tolerance: T) -> bool {
        let max_change = y_smooth
            .iter()
            .zip(y_prev.iter())
            .fold(T::zero(), |maxv, (&current, &previous)| {
                T::max(maxv, (current - previous).abs())
            });

        max_change <= tolerance
    }
}
