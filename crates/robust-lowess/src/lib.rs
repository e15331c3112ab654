//! # robust-lowess: Robust Locally Weighted Scatterplot Smoothing
//!
//! A generic, `no_std`-friendly implementation of Cleveland's robust LOWESS
//! for `f32` and `f64` data.
//!
//! ## What is LOWESS?
//!
//! LOWESS is a nonparametric regression method that fits a smooth curve
//! through a scatter plot. At each point it fits a weighted straight line to
//! the nearest `frac × n` samples, with tricube weights that decrease with
//! distance. Robustness iterations then refit with bisquare weights that
//! shrink the influence of outliers.
//!
//! ## Quick Start
//!
//! ### Classic interface
//!
//! ```rust
//! use robust_lowess::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = vec![2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
//!
//! // (x_sorted, fitted) pairs with frac = 2/3, 3 iterations, delta = 0
//! let curve = smooth(&x, &y, 2.0 / 3.0, 3, 0.0)?;
//! assert_eq!(curve.len(), x.len());
//! # Result::<(), LowessError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use robust_lowess::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = vec![2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
//!
//! let model = Lowess::new()
//!     .fraction(0.5)                      // Use 50% of data for each local fit
//!     .iterations(3)                      // 3 robustness iterations
//!     .weight_function(Tricube)           // Kernel function
//!     .robustness_method(Bisquare)        // Outlier handling
//!     .scaling_method(MAR)                // Robust scale estimation
//!     .zero_weight_fallback(UseLocalMean) // Fallback policy
//!     .auto_converge(1e-6)                // Stop once passes agree
//!     .return_residuals()                 // Include residuals
//!     .return_robustness_weights()        // Include robustness weights
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//! println!("{}", result);
//! # Result::<(), LowessError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns a `Result<LowessResult<T>, LowessError>`. The result is in
//! ascending x order; [`LowessResult::fitted_in_input_order`] maps the
//! fitted values back to the caller's order.
//!
//! ```rust
//! use robust_lowess::prelude::*;
//!
//! let err = smooth(&[1.0, 2.0, 3.0], &[1.0, 2.0], 0.5, 3, 0.0).unwrap_err();
//! assert!(matches!(err, LowessError::MismatchedInputs { x_len: 3, y_len: 2 }));
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! robust-lowess = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"
//! - Cleveland, W. S. (1981). "LOWESS: A Program for Smoothing Scatterplots by Robust Locally Weighted Regression"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - core LOWESS algorithms.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for LOWESS smoothing.
mod api;

pub use api::{
    LowessBuilder, LowessError, LowessResult, RobustnessMethod, ScalingMethod, WeightFunction,
    ZeroWeightFallback, smooth, smooth_default,
};

// Standard LOWESS prelude.
pub mod prelude {
    pub use crate::api::{
        LowessBuilder as Lowess, LowessError, LowessResult,
        RobustnessMethod::Bisquare,
        RobustnessMethod::Huber,
        RobustnessMethod::Talwar,
        ScalingMethod::MAD,
        ScalingMethod::MAR,
        WeightFunction::Biweight,
        WeightFunction::Cosine,
        WeightFunction::Epanechnikov,
        WeightFunction::Triangle,
        WeightFunction::Tricube,
        WeightFunction::Uniform,
        ZeroWeightFallback::ReturnOriginal,
        ZeroWeightFallback::UseLocalMean,
        smooth, smooth_default,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
