#![cfg(feature = "dev")]
//! Tests for robustness weight computation.
//!
//! ## Test Organization
//!
//! 1. **Weight Functions** - Bisquare, Huber, Talwar point values
//! 2. **Full Weight Sets** - Scale estimation and outlier rejection
//! 3. **Degenerate Scale** - Zero residual scale yields no weights

use approx::assert_relative_eq;

use robust_lowess::internals::algorithms::robustness::RobustnessMethod;
use robust_lowess::internals::math::scaling::ScalingMethod;

// ============================================================================
// Weight Function Tests
// ============================================================================

#[test]
fn test_bisquare_weight_values() {
    assert_eq!(RobustnessMethod::bisquare_weight(0.0f64, 6.0), 1.0);

    // u = 0.5 -> (1 - 0.25)^2
    assert_relative_eq!(
        RobustnessMethod::bisquare_weight(3.0f64, 6.0),
        0.5625,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        RobustnessMethod::bisquare_weight(-3.0f64, 6.0),
        0.5625,
        epsilon = 1e-12
    );

    // Rejected on and beyond the threshold
    assert_eq!(RobustnessMethod::bisquare_weight(6.0f64, 6.0), 0.0);
    assert_eq!(RobustnessMethod::bisquare_weight(-60.0f64, 6.0), 0.0);
}

#[test]
fn test_huber_weight_values() {
    let c = 1.345f64;
    assert_eq!(RobustnessMethod::huber_weight(1.0f64, 1.0, c), 1.0);
    assert_relative_eq!(
        RobustnessMethod::huber_weight(-2.69f64, 1.0, c),
        0.5,
        epsilon = 1e-12
    );
}

#[test]
fn test_talwar_weight_values() {
    let c = 2.5f64;
    assert_eq!(RobustnessMethod::talwar_weight(2.5f64, 1.0, c), 1.0);
    assert_eq!(RobustnessMethod::talwar_weight(2.6f64, 1.0, c), 0.0);
}

#[test]
fn test_tuning_constants() {
    assert_eq!(RobustnessMethod::default(), RobustnessMethod::Bisquare);
    assert_eq!(RobustnessMethod::Bisquare.tuning_constant(), 6.0);
    assert_eq!(RobustnessMethod::Huber.tuning_constant(), 1.345);
    assert_eq!(RobustnessMethod::Talwar.tuning_constant(), 2.5);
}

// ============================================================================
// Full Weight Set Tests
// ============================================================================

/// Bisquare weights against six times the median absolute residual.
#[test]
fn test_compute_weights_bisquare() {
    // median |r| = 1 -> cmad = 6
    let residuals = [1.0f64, -1.0, 0.5, -2.0, 3.0];

    let weights = RobustnessMethod::Bisquare
        .compute_weights(&residuals, ScalingMethod::MAR)
        .unwrap();

    for (&r, &w) in residuals.iter().zip(&weights) {
        let u: f64 = r / 6.0;
        assert_relative_eq!(w, (1.0 - u * u).powi(2), epsilon = 1e-12);
    }
}

/// A gross outlier gets weight zero; the rest stay close to one.
#[test]
fn test_compute_weights_rejects_outlier() {
    let mut residuals = vec![0.1f64, -0.2, 0.15, -0.1, 0.05, -0.15, 0.2, -0.05];
    residuals.push(100.0);

    let weights = RobustnessMethod::Bisquare
        .compute_weights(&residuals, ScalingMethod::MAR)
        .unwrap();

    assert_eq!(weights[8], 0.0);
    for &w in &weights[..8] {
        assert!(w > 0.9);
    }
}

/// Weights of every method lie in [0, 1].
#[test]
fn test_compute_weights_in_unit_interval() {
    let residuals: Vec<f64> = (0..50)
        .map(|i| ((i * 37) % 23) as f64 - 11.0 + if i % 10 == 0 { 80.0 } else { 0.0 })
        .collect();

    for method in [
        RobustnessMethod::Bisquare,
        RobustnessMethod::Huber,
        RobustnessMethod::Talwar,
    ] {
        for scaling in [ScalingMethod::MAR, ScalingMethod::MAD] {
            let weights = method.compute_weights(&residuals, scaling).unwrap();
            assert_eq!(weights.len(), residuals.len());
            assert!(weights.iter().all(|&w| (0.0..=1.0).contains(&w)));
        }
    }
}

/// Huber never rejects a point completely.
#[test]
fn test_huber_never_zero() {
    let residuals = [0.1f64, -0.1, 0.2, -0.2, 1000.0];

    let weights = RobustnessMethod::Huber
        .compute_weights(&residuals, ScalingMethod::MAR)
        .unwrap();

    assert!(weights.iter().all(|&w| w > 0.0));
}

/// The input residuals are not reordered.
#[test]
fn test_compute_weights_keeps_residual_order() {
    let residuals = [5.0f64, -1.0, 0.0, 2.0];
    let before = residuals;

    let _ = RobustnessMethod::Bisquare.compute_weights(&residuals, ScalingMethod::MAR);

    assert_eq!(residuals, before);
}

// ============================================================================
// Degenerate Scale Tests
// ============================================================================

/// A perfect fit has no usable scale.
#[test]
fn test_zero_residuals_yield_none() {
    let residuals = [0.0f64; 10];
    assert!(
        RobustnessMethod::Bisquare
            .compute_weights(&residuals, ScalingMethod::MAR)
            .is_none()
    );
}

/// Most residuals zero: the median is zero even though some are not.
#[test]
fn test_mostly_zero_residuals_yield_none() {
    let residuals = [0.0f64, 0.0, 0.0, 0.0, 0.0, 3.0, -2.0];
    assert!(
        RobustnessMethod::Bisquare
            .compute_weights(&residuals, ScalingMethod::MAR)
            .is_none()
    );
}

/// Residuals at rounding-noise level relative to their mean count as zero.
#[test]
fn test_tiny_scale_relative_to_mean_yields_none() {
    let mut residuals = vec![1e-20f64; 9];
    residuals.extend([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    assert!(
        RobustnessMethod::Bisquare
            .compute_weights(&residuals, ScalingMethod::MAR)
            .is_none()
    );
}

#[test]
fn test_empty_residuals_yield_none() {
    let residuals: [f64; 0] = [];
    assert!(
        RobustnessMethod::Bisquare
            .compute_weights(&residuals, ScalingMethod::MAR)
            .is_none()
    );
}
