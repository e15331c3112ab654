//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts the engine for an execution mode. The batch adapter
//! smooths a complete in-memory dataset.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for LOWESS smoothing.
pub mod batch;
