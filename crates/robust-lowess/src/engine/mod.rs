//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process by coordinating between
//! primitives (windows, sorting) and algorithms (regression, robustness,
//! interpolation). It provides the robustness loop and input validation.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Robustness loop and smoothing passes.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for LOWESS operations.
pub mod output;
