//! Tests for the prelude module.
//!
//! These tests verify that the prelude provides a one-stop import for the
//! builder, the free functions, results, errors and enum variants.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Builder Pattern** - Complete workflows work with prelude imports
//! 3. **Builder Validation** - Parameter errors surface at `build()`

use robust_lowess::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the builder, result and free functions are usable.
#[test]
fn test_prelude_imports() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];

    let result: Result<LowessResult<f64>, LowessError> =
        Lowess::new().build().and_then(|model| model.fit(&x, &y));
    assert!(result.is_ok());

    assert!(smooth(&x, &y, 0.5, 1, 0.0).is_ok());
    assert!(smooth_default(&x, &y).is_ok());
}

#[test]
fn test_prelude_enum_variants() {
    let _ = Lowess::<f64>::new().robustness_method(Bisquare);
    let _ = Lowess::<f64>::new().robustness_method(Huber);
    let _ = Lowess::<f64>::new().robustness_method(Talwar);

    let _ = Lowess::<f64>::new().weight_function(Tricube);
    let _ = Lowess::<f64>::new().weight_function(Epanechnikov);
    let _ = Lowess::<f64>::new().weight_function(Biweight);
    let _ = Lowess::<f64>::new().weight_function(Triangle);
    let _ = Lowess::<f64>::new().weight_function(Cosine);
    let _ = Lowess::<f64>::new().weight_function(Uniform);

    let _ = Lowess::<f64>::new().scaling_method(MAR);
    let _ = Lowess::<f64>::new().scaling_method(MAD);

    let _ = Lowess::<f64>::new().zero_weight_fallback(UseLocalMean);
    let _ = Lowess::<f64>::new().zero_weight_fallback(ReturnOriginal);
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test complete workflow with prelude.
#[test]
fn test_prelude_complete_workflow() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![1.0, 3.0, 5.0, 7.0, 9.0, 11.0];

    let result = Lowess::<f64>::new()
        .fraction(0.5)
        .iterations(3)
        .robustness_method(Bisquare)
        .weight_function(Tricube)
        .scaling_method(MAD)
        .auto_converge(1e-9)
        .return_residuals()
        .return_robustness_weights()
        .build()
        .unwrap()
        .fit(&x, &y)
        .expect("Complete workflow should succeed");

    assert_eq!(result.len(), x.len());
    assert_eq!(result.span, 3);
    assert!(result.residuals.is_some());
    assert!(result.robustness_weights.is_some());
    assert!(result.iterations_used <= 3);

    let table = result.to_string();
    assert!(table.contains("Summary:"));
    assert!(table.contains("Residual"));
    assert!(table.contains("Rob_Weight"));
}

/// Optional outputs stay empty unless requested.
#[test]
fn test_prelude_optional_outputs_default_off() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![1.0, 0.0, 1.0, 0.0];

    let result = Lowess::<f64>::new().build().unwrap().fit(&x, &y).unwrap();

    assert!(result.residuals.is_none());
    assert!(result.robustness_weights.is_none());
    assert!(!result.to_string().contains("Residual"));
}

/// A built processor can be reused.
#[test]
fn test_prelude_processor_reuse() {
    let model = Lowess::<f64>::new().fraction(0.8).build().unwrap();

    let a = model.fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
    let b = model.fit(&[5.0, 6.0, 7.0, 8.0], &[1.0, 1.0, 1.0, 1.0]).unwrap();

    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 4);
}

/// The built processor exposes the resolved configuration.
#[test]
fn test_prelude_config_reflects_builder() {
    let model = Lowess::<f64>::new()
        .fraction(0.25)
        .iterations(5)
        .auto_delta()
        .weight_function(Epanechnikov)
        .robustness_method(Huber)
        .scaling_method(MAD)
        .zero_weight_fallback(UseLocalMean)
        .auto_converge(1e-4)
        .return_residuals()
        .build()
        .unwrap();

    let config = model.config();
    assert_eq!(config.fraction, 0.25);
    assert_eq!(config.iterations, 5);
    assert!(config.auto_delta);
    assert_eq!(config.weight_function, Epanechnikov);
    assert_eq!(config.robustness_method, Huber);
    assert_eq!(config.scaling_method, MAD);
    assert_eq!(config.zero_weight_fallback, UseLocalMean);
    assert_eq!(config.auto_convergence, Some(1e-4));
    assert!(config.compute_residuals);
    assert!(!config.return_robustness_weights);

    let defaults = Lowess::<f64>::new().build().unwrap();
    let config = defaults.config();
    assert!((config.fraction - 2.0 / 3.0).abs() < 1e-15);
    assert_eq!(config.iterations, 3);
    assert_eq!(config.delta, 0.0);
    assert!(!config.auto_delta);
    assert_eq!(config.weight_function, Tricube);
    assert_eq!(config.robustness_method, Bisquare);
    assert_eq!(config.scaling_method, MAR);
    assert_eq!(config.zero_weight_fallback, ReturnOriginal);
    assert_eq!(config.auto_convergence, None);
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Parameters set twice are rejected at build time.
#[test]
fn test_prelude_duplicate_parameter() {
    let err = Lowess::<f64>::new()
        .fraction(0.5)
        .fraction(0.6)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        LowessError::DuplicateParameter {
            parameter: "fraction"
        }
    );

    let err = Lowess::<f64>::new().delta(0.1).auto_delta().build().unwrap_err();
    assert_eq!(err, LowessError::DuplicateParameter { parameter: "delta" });
}

#[test]
fn test_prelude_invalid_parameters() {
    assert!(matches!(
        Lowess::<f64>::new().fraction(0.0).build(),
        Err(LowessError::InvalidFraction(_))
    ));
    assert!(matches!(
        Lowess::<f64>::new().delta(-0.5).build(),
        Err(LowessError::InvalidDelta(_))
    ));
    assert!(matches!(
        Lowess::<f64>::new().iterations(1001).build(),
        Err(LowessError::InvalidIterations(1001))
    ));
    assert!(matches!(
        Lowess::<f64>::new().auto_converge(0.0).build(),
        Err(LowessError::InvalidTolerance(_))
    ));
}

/// Test error types are available.
#[test]
fn test_prelude_error_handling() {
    let x: Vec<f64> = vec![];
    let y: Vec<f64> = vec![];

    let err = Lowess::<f64>::new().build().unwrap().fit(&x, &y).unwrap_err();

    assert!(matches!(err, LowessError::TooFewPoints { got: 0, min: 2 }));
    assert!(err.is_invalid_argument());
}
