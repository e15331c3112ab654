//! Layer 3: Algorithms
//!
//! This layer implements the core logic for local weighted regression,
//! robustness weights, and delta interpolation. It contains the "business
//! logic" of LOWESS but is orchestrated by the engine layer.

// Local weighted regression.
pub mod regression;

// Robustness weights for outlier downweighting.
pub mod robustness;

// Anchor planning and linear interpolation.
pub mod interpolation;
