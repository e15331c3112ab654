//! Regression Logic
//!
//! ## Purpose
//!
//! This module fits one local line: it combines kernel and robustness weights
//! for a window, solves the weighted least-squares problem with centered
//! sums, and evaluates the line at the query point.
//!
//! ## Design notes
//!
//! * **Centered sums**: Slope and intercept come from Sxx and Sxy around the
//!   weighted means, which stays accurate for large x offsets.
//! * **SIMD**: Moment accumulation is vectorized for f64 and f32 via `wide`.
//! * **Degeneracy**: A window whose weighted spread is negligible relative to
//!   the data range collapses to the weighted mean.
//! * **Ties**: A zero bandwidth widens the fit to every sample tied with the
//!   query x, so a run of equal x-values shares one fitted value.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use wide::{f32x8, f64x4};

// Internal dependencies
use crate::math::kernel::WeightFunction;
use crate::primitives::window::Window;

// ============================================================================
// Zero-Weight Fallback Policy
// ============================================================================

/// Policy for a window whose combined weights are all zero.
///
/// This happens when robustness iterations reject every neighbor of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroWeightFallback {
    /// Keep the observed y-value at the query point (default).
    #[default]
    ReturnOriginal,

    /// Use the unweighted mean of the window's y-values.
    UseLocalMean,
}

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Relative spread below which a window is treated as a single x-value.
///
/// Compared against the weighted standard deviation of the window divided
/// by the full x-range.
pub const SPREAD_TOLERANCE: f64 = 1e-3;

/// Scalar accumulation of `(sum_w, sum_wx, sum_wy)`.
#[inline]
pub fn accumulate_moments_scalar<T: Float>(x: &[T], y: &[T], weights: &[T]) -> (T, T, T) {
    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();

    for ((&w, &xi), &yi) in weights.iter().zip(x).zip(y) {
        sum_w = sum_w + w;
        sum_wx = sum_wx + w * xi;
        sum_wy = sum_wy + w * yi;
    }

    (sum_w, sum_wx, sum_wy)
}

/// Scalar accumulation of the centered sums `(Sxx, Sxy)`.
#[inline]
pub fn accumulate_centered_scalar<T: Float>(
    x: &[T],
    y: &[T],
    weights: &[T],
    x_mean: T,
    y_mean: T,
) -> (T, T) {
    let mut sxx = T::zero();
    let mut sxy = T::zero();

    for ((&w, &xi), &yi) in weights.iter().zip(x).zip(y) {
        let dx = xi - x_mean;
        let wdx = w * dx;
        sxx = sxx + wdx * dx;
        sxy = sxy + wdx * (yi - y_mean);
    }

    (sxx, sxy)
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD accumulation of `(sum_w, sum_wx, sum_wy)` for f64.
#[inline]
pub fn accumulate_moments_simd_f64(x: &[f64], y: &[f64], weights: &[f64]) -> (f64, f64, f64) {
    let n = x.len().min(y.len()).min(weights.len());
    let body = n - n % 4;

    let mut s_w = f64x4::splat(0.0);
    let mut s_wx = f64x4::splat(0.0);
    let mut s_wy = f64x4::splat(0.0);

    for ((w, xs), ys) in weights[..body]
        .chunks_exact(4)
        .zip(x[..body].chunks_exact(4))
        .zip(y[..body].chunks_exact(4))
    {
        let w = f64x4::from([w[0], w[1], w[2], w[3]]);
        let xv = f64x4::from([xs[0], xs[1], xs[2], xs[3]]);
        let yv = f64x4::from([ys[0], ys[1], ys[2], ys[3]]);

        s_w += w;
        s_wx += w * xv;
        s_wy += w * yv;
    }

    let (t_w, t_wx, t_wy) =
        accumulate_moments_scalar(&x[body..n], &y[body..n], &weights[body..n]);

    (
        s_w.reduce_add() + t_w,
        s_wx.reduce_add() + t_wx,
        s_wy.reduce_add() + t_wy,
    )
}

/// SIMD accumulation of `(Sxx, Sxy)` for f64.
#[inline]
pub fn accumulate_centered_simd_f64(
    x: &[f64],
    y: &[f64],
    weights: &[f64],
    x_mean: f64,
    y_mean: f64,
) -> (f64, f64) {
    let n = x.len().min(y.len()).min(weights.len());
    let body = n - n % 4;

    let xm = f64x4::splat(x_mean);
    let ym = f64x4::splat(y_mean);
    let mut s_xx = f64x4::splat(0.0);
    let mut s_xy = f64x4::splat(0.0);

    for ((w, xs), ys) in weights[..body]
        .chunks_exact(4)
        .zip(x[..body].chunks_exact(4))
        .zip(y[..body].chunks_exact(4))
    {
        let w = f64x4::from([w[0], w[1], w[2], w[3]]);
        let dx = f64x4::from([xs[0], xs[1], xs[2], xs[3]]) - xm;
        let dy = f64x4::from([ys[0], ys[1], ys[2], ys[3]]) - ym;

        let wdx = w * dx;
        s_xx += wdx * dx;
        s_xy += wdx * dy;
    }

    let (t_xx, t_xy) = accumulate_centered_scalar(
        &x[body..n],
        &y[body..n],
        &weights[body..n],
        x_mean,
        y_mean,
    );

    (s_xx.reduce_add() + t_xx, s_xy.reduce_add() + t_xy)
}

/// SIMD accumulation of `(sum_w, sum_wx, sum_wy)` for f32.
#[inline]
pub fn accumulate_moments_simd_f32(x: &[f32], y: &[f32], weights: &[f32]) -> (f32, f32, f32) {
    let n = x.len().min(y.len()).min(weights.len());
    let body = n - n % 8;

    let mut s_w = f32x8::splat(0.0);
    let mut s_wx = f32x8::splat(0.0);
    let mut s_wy = f32x8::splat(0.0);

    for ((w, xs), ys) in weights[..body]
        .chunks_exact(8)
        .zip(x[..body].chunks_exact(8))
        .zip(y[..body].chunks_exact(8))
    {
        let w = f32x8::from(lanes8(w));
        let xv = f32x8::from(lanes8(xs));
        let yv = f32x8::from(lanes8(ys));

        s_w += w;
        s_wx += w * xv;
        s_wy += w * yv;
    }

    let (t_w, t_wx, t_wy) =
        accumulate_moments_scalar(&x[body..n], &y[body..n], &weights[body..n]);

    (
        s_w.reduce_add() + t_w,
        s_wx.reduce_add() + t_wx,
        s_wy.reduce_add() + t_wy,
    )
}

/// SIMD accumulation of `(Sxx, Sxy)` for f32.
#[inline]
pub fn accumulate_centered_simd_f32(
    x: &[f32],
    y: &[f32],
    weights: &[f32],
    x_mean: f32,
    y_mean: f32,
) -> (f32, f32) {
    let n = x.len().min(y.len()).min(weights.len());
    let body = n - n % 8;

    let xm = f32x8::splat(x_mean);
    let ym = f32x8::splat(y_mean);
    let mut s_xx = f32x8::splat(0.0);
    let mut s_xy = f32x8::splat(0.0);

    for ((w, xs), ys) in weights[..body]
        .chunks_exact(8)
        .zip(x[..body].chunks_exact(8))
        .zip(y[..body].chunks_exact(8))
    {
        let w = f32x8::from(lanes8(w));
        let dx = f32x8::from(lanes8(xs)) - xm;
        let dy = f32x8::from(lanes8(ys)) - ym;

        let wdx = w * dx;
        s_xx += wdx * dx;
        s_xy += wdx * dy;
    }

    let (t_xx, t_xy) = accumulate_centered_scalar(
        &x[body..n],
        &y[body..n],
        &weights[body..n],
        x_mean,
        y_mean,
    );

    (s_xx.reduce_add() + t_xx, s_xy.reduce_add() + t_xy)
}

#[inline(always)]
fn lanes8(c: &[f32]) -> [f32; 8] {
    [c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Type-specific accumulation for the weighted least-squares solver.
pub trait WLSSolver: Float {
    /// Accumulate `(sum_w, sum_wx, sum_wy)`.
    #[inline]
    fn accumulate_moments(x: &[Self], y: &[Self], weights: &[Self]) -> (Self, Self, Self) {
        accumulate_moments_scalar(x, y, weights)
    }

    /// Accumulate the centered sums `(Sxx, Sxy)`.
    #[inline]
    fn accumulate_centered(
        x: &[Self],
        y: &[Self],
        weights: &[Self],
        x_mean: Self,
        y_mean: Self,
    ) -> (Self, Self) {
        accumulate_centered_scalar(x, y, weights, x_mean, y_mean)
    }
}

impl WLSSolver for f64 {
    #[inline]
    fn accumulate_moments(x: &[f64], y: &[f64], weights: &[f64]) -> (f64, f64, f64) {
        accumulate_moments_simd_f64(x, y, weights)
    }

    #[inline]
    fn accumulate_centered(
        x: &[f64],
        y: &[f64],
        weights: &[f64],
        x_mean: f64,
        y_mean: f64,
    ) -> (f64, f64) {
        accumulate_centered_simd_f64(x, y, weights, x_mean, y_mean)
    }
}

impl WLSSolver for f32 {
    #[inline]
    fn accumulate_moments(x: &[f32], y: &[f32], weights: &[f32]) -> (f32, f32, f32) {
        accumulate_moments_simd_f32(x, y, weights)
    }

    #[inline]
    fn accumulate_centered(
        x: &[f32],
        y: &[f32],
        weights: &[f32],
        x_mean: f32,
        y_mean: f32,
    ) -> (f32, f32) {
        accumulate_centered_simd_f32(x, y, weights, x_mean, y_mean)
    }
}

// ============================================================================
// LinearFit
// ============================================================================

/// Weighted linear fit, stored in centered form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T: Float> {
    /// Slope (zero for a degenerate window).
    pub slope: T,

    /// Weighted mean of x-values.
    pub x_mean: T,

    /// Weighted mean of y-values.
    pub y_mean: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict the y-value at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.y_mean + self.slope * (x - self.x_mean)
    }

    /// Intercept of the fitted line at x = 0.
    #[inline]
    pub fn intercept(&self) -> T {
        self.y_mean - self.slope * self.x_mean
    }

    /// Returns `true` if the fit collapsed to the weighted mean.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.slope == T::zero()
    }
}

impl<T: Float + WLSSolver> LinearFit<T> {
    /// Fit weighted least squares on a window.
    ///
    /// `x_range` is the extent of the whole dataset; the window is treated as
    /// a single x-value when its weighted standard deviation is within
    /// [`SPREAD_TOLERANCE`] of that range. Returns `None` when the weights
    /// sum to zero.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T], x_range: T) -> Option<Self> {
        let (sum_w, sum_wx, sum_wy) = T::accumulate_moments(x, y, weights);
        if !(sum_w > T::zero()) {
            return None;
        }

        let x_mean = sum_wx / sum_w;
        let y_mean = sum_wy / sum_w;
        let (sxx, sxy) = T::accumulate_centered(x, y, weights, x_mean, y_mean);

        let spread_tol = T::from(SPREAD_TOLERANCE).unwrap() * x_range;
        let spread_sq = sxx / sum_w;
        let slope = if spread_sq > spread_tol * spread_tol && sxx > T::zero() {
            sxy / sxx
        } else {
            T::zero()
        };

        Some(Self {
            slope: if slope.is_finite() { slope } else { T::zero() },
            x_mean,
            y_mean,
        })
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Everything needed to fit a single query point.
pub struct RegressionContext<'a, T: Float> {
    /// Sorted x-values.
    pub x: &'a [T],

    /// Y-values matching `x`.
    pub y: &'a [T],

    /// Index of the point to fit.
    pub idx: usize,

    /// Nearest-neighbor window for `idx`.
    pub window: Window,

    /// Robustness weights for the current pass; `None` means all ones.
    pub robustness_weights: Option<&'a [T]>,

    /// Scratch space for the combined weights, at least `window.len()` long.
    pub weights: &'a mut [T],

    /// Weight function (kernel).
    pub weight_function: WeightFunction,

    /// Zero-weight fallback policy.
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<T: Float + WLSSolver + Debug> RegressionContext<'_, T> {
    /// Compute the combined weights and fit the local line at `x[idx]`.
    ///
    /// A zero bandwidth means every window member sits on the query x. The
    /// fit then widens to all samples tied with the query and returns their
    /// robustness-weighted mean.
    pub fn fit(&mut self) -> T {
        let n = self.x.len();
        let (lo, hi) = (self.window.lo, self.window.hi);
        let x_query = self.x[self.idx];

        let bandwidth = self.window.bandwidth(self.x, x_query);
        if bandwidth <= T::zero() {
            return self.fit_tied(x_query);
        }

        let window_x = &self.x[lo..hi];
        let window_y = &self.y[lo..hi];
        let weights = &mut self.weights[..hi - lo];

        self.weight_function
            .compute_window_weights(window_x, x_query, bandwidth, weights);

        if let Some(robustness) = self.robustness_weights {
            for (w, &r) in weights.iter_mut().zip(&robustness[lo..hi]) {
                *w = *w * r;
            }
        }

        let x_range = self.x[n - 1] - self.x[0];
        match LinearFit::fit_wls(window_x, window_y, weights, x_range) {
            Some(model) => model.predict(x_query),
            None => self.fallback(lo, hi),
        }
    }

    /// Robustness-weighted mean of every sample whose x equals `x_query`.
    fn fit_tied(&self, x_query: T) -> T {
        let lo = self.x.partition_point(|&v| v < x_query);
        let hi = self.x.partition_point(|&v| v <= x_query);

        let mut sum_w = T::zero();
        let mut sum_wy = T::zero();
        for j in lo..hi {
            let w = self.robustness_weights.map_or(T::one(), |r| r[j]);
            sum_w = sum_w + w;
            sum_wy = sum_wy + w * self.y[j];
        }

        if sum_w > T::zero() {
            sum_wy / sum_w
        } else {
            self.fallback(lo, hi)
        }
    }

    fn fallback(&self, lo: usize, hi: usize) -> T {
        log::trace!(
            "zero weight sum at index {} (window [{}, {})), applying {:?}",
            self.idx,
            lo,
            hi,
            self.zero_weight_fallback
        );
        match self.zero_weight_fallback {
            ZeroWeightFallback::ReturnOriginal => self.y[self.idx],
            ZeroWeightFallback::UseLocalMean => {
                let count = T::from(hi - lo).unwrap_or_else(T::one);
                self.y[lo..hi].iter().fold(T::zero(), |acc, &v| acc + v) / count
            }
        }
    }
}
