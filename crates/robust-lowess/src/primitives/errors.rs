//! Error types for LOWESS operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions a smoothing call can reject its
//! arguments with. Every variant is an invalid-argument condition detected
//! before any computation starts, so no partial result ever exists.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., both lengths).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages without `std`.
//!
//! ## Non-goals
//!
//! * Numeric degeneracies (zero-spread windows, zero residual scale) are not
//!   errors; the algorithms resolve them locally.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for LOWESS operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LowessError {
    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A local line needs at least two points.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Smoothing fraction must be in the range (0, 1].
    InvalidFraction(f64),

    /// Delta controls the interpolation shortcut and must be non-negative.
    InvalidDelta(f64),

    /// Robustness iterations are capped to bound the running time.
    InvalidIterations(usize),

    /// Convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl LowessError {
    /// Returns `true` for argument errors raised before any computation.
    ///
    /// Every current variant qualifies; the method exists so callers can
    /// match on the category instead of enumerating variants.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::MismatchedInputs { .. }
                | Self::InvalidNumericValue(_)
                | Self::TooFewPoints { .. }
                | Self::InvalidFraction(_)
                | Self::InvalidDelta(_)
                | Self::InvalidIterations(_)
                | Self::InvalidTolerance(_)
                | Self::DuplicateParameter { .. }
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LowessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidFraction(frac) => {
                write!(f, "Invalid fraction: {frac} (must be > 0 and <= 1)")
            }
            Self::InvalidDelta(delta) => write!(f, "Invalid delta: {delta} (must be >= 0)"),
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iterations: {iter} (must be in [0, 1000])")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LowessError {}
