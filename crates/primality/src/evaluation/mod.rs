//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes check results into summary statistics: counts,
//! prime density, and the extremes of the primes found.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Summary diagnostics over check results.
pub mod diagnostics;
