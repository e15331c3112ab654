//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout LOWESS:
//! - Kernel functions for distance-based weighting
//! - Robust scale estimation of residuals
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel (weight) functions for distance-based weighting.
pub mod kernel;

/// Robust scale estimation (MAR/MAD).
pub mod scaling;
