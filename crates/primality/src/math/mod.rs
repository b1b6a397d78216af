//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure arithmetic core of the crate:
//! - Const-evaluable trial-division primitives
//! - Check strategies with their cost metadata
//!
//! These are reusable building blocks with no configuration-specific logic.
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
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Const trial-division primitives.
pub mod trial;

/// Check strategies and their cost metadata.
pub mod strategy;
