//! Kernel (weight) functions for LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module maps the distance between a window member and the query point
//! to a local weight. Distances are normalized by the window bandwidth, so
//! u = |x_j - x_query| / h lies in [0, 1] for every window member.
//!
//! ## Design notes
//!
//! * **Support**: All kernels vanish for |u| >= 1, so the farthest window
//!   member always receives weight zero.
//! * **Degenerate bandwidth**: When h = 0 every window member sits on the
//!   query point and gets weight one.
//!
//! ## Key concepts
//!
//! * **Tricube**: The default kernel, (1 - |u|^3)^3, from Cleveland (1979).
//!
//! ## Invariants
//!
//! * Kernels are non-negative, symmetric and at most one.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights or choose the bandwidth.

// External dependencies
use core::f64::consts::FRAC_PI_2;
use num_traits::Float;

// ============================================================================
// Weight Function Enum
// ============================================================================

/// Weight function (kernel) for local regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightFunction {
    /// Cosine kernel: K(u) = cos(pi * u / 2) for |u| < 1.
    Cosine,

    /// Epanechnikov kernel: K(u) = (1 - u^2) for |u| < 1.
    Epanechnikov,

    /// Biweight (quartic) kernel: K(u) = (1 - u^2)^2 for |u| < 1.
    Biweight,

    /// Triangular kernel: K(u) = (1 - |u|) for |u| < 1.
    Triangle,

    /// Tricube kernel: K(u) = (1 - |u|^3)^3 for |u| < 1.
    ///
    /// This is the classic LOWESS kernel and the default.
    #[default]
    Tricube,

    /// Uniform (rectangular) kernel: K(u) = 1 for |u| < 1.
    Uniform,
}

impl WeightFunction {
    /// Get the name of the weight function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            WeightFunction::Cosine => "Cosine",
            WeightFunction::Epanechnikov => "Epanechnikov",
            WeightFunction::Biweight => "Biweight",
            WeightFunction::Triangle => "Triangle",
            WeightFunction::Tricube => "Tricube",
            WeightFunction::Uniform => "Uniform",
        }
    }

    /// Compute the kernel value K(u) for a normalized distance `u`.
    #[inline]
    pub fn compute_weight<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        if abs_u >= T::one() {
            return T::zero();
        }

        match self {
            WeightFunction::Cosine => {
                let half_pi = T::from(FRAC_PI_2).unwrap();
                (half_pi * abs_u).cos()
            }

            WeightFunction::Epanechnikov => T::one() - abs_u * abs_u,

            WeightFunction::Biweight => {
                let tmp = T::one() - abs_u * abs_u;
                tmp * tmp
            }

            WeightFunction::Triangle => T::one() - abs_u,

            WeightFunction::Tricube => {
                let tmp = T::one() - abs_u * abs_u * abs_u;
                tmp * tmp * tmp
            }

            WeightFunction::Uniform => T::one(),
        }
    }

    /// Fill `weights` with kernel values for the window members `x_window`.
    ///
    /// Returns the sum of the weights. A zero `bandwidth` gives every member
    /// weight one.
    pub fn compute_window_weights<T: Float>(
        &self,
        x_window: &[T],
        x_query: T,
        bandwidth: T,
        weights: &mut [T],
    ) -> T {
        debug_assert_eq!(x_window.len(), weights.len());

        if bandwidth <= T::zero() {
            weights.fill(T::one());
            return T::from(weights.len()).unwrap_or_else(T::zero);
        }

        let mut sum = T::zero();
        for (w, &xj) in weights.iter_mut().zip(x_window) {
            let distance = (xj - x_query).abs();
            *w = if distance < bandwidth {
                self.compute_weight(distance / bandwidth)
            } else {
                T::zero()
            };
            sum = sum + *w;
        }

        sum
    }
}
