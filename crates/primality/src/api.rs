//! High-level API for primality checking.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder pattern for configuring check parameters
//! and choosing an execution adapter (Batch or Range).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated during adapter construction.
//! * **Type-Safe**: Generic over unsigned integer types for flexible width.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Range modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrimalityBuilder`] via `Primality::new()`.
//! 2. Chain configuration methods (`.strategy()`, `.collect_witnesses()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::adapters::batch::BatchPrimalityBuilder;
use crate::adapters::range::RangePrimalityBuilder;

// Publicly re-exported types
pub use crate::algorithms::classify::{classify, Classification};
pub use crate::engine::output::{PrimalityResult, RangeScan};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::strategy::CheckStrategy;
pub use crate::math::trial::is_prime;
pub use crate::primitives::errors::PrimalityError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Range};
}

/// Fluent builder for configuring primality checks and execution modes.
#[derive(Debug, Clone)]
pub struct PrimalityBuilder<T> {
    /// Trial-division strategy.
    pub strategy: Option<CheckStrategy>,

    /// Collect composite witnesses.
    pub collect_witnesses: Option<bool>,

    /// Compute summary diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Lower bound for range scans (Range only).
    pub start: Option<T>,

    /// Upper bound for range scans (Range only).
    pub end: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: PrimInt + Unsigned> Default for PrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Unsigned> PrimalityBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: PrimalityAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            strategy: None,
            collect_witnesses: None,
            return_diagnostics: None,
            start: None,
            end: None,
            duplicate_param: None,
        }
    }

    /// Set the trial-division strategy.
    pub fn strategy(mut self, strategy: CheckStrategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Set the interval for range scans (both bounds inclusive, Range only).
    pub fn range(mut self, start: T, end: T) -> Self {
        if self.start.is_some() || self.end.is_some() {
            self.duplicate_param = Some("range");
        }
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Include composite witnesses (smallest divisors) in the output.
    pub fn collect_witnesses(mut self) -> Self {
        self.collect_witnesses = Some(true);
        self
    }

    /// Include summary diagnostics (counts, density, extremes) in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait PrimalityAdapter<T: PrimInt + Unsigned> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`PrimalityBuilder`] into a specialized execution builder.
    fn convert(builder: PrimalityBuilder<T>) -> Self::Output;
}

/// Marker for batch checking of explicit candidate sets.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: PrimInt + Unsigned> PrimalityAdapter<T> for Batch {
    type Output = BatchPrimalityBuilder<T>;

    fn convert(builder: PrimalityBuilder<T>) -> Self::Output {
        let mut result = BatchPrimalityBuilder::default();

        if let Some(strategy) = builder.strategy {
            result = result.strategy(strategy);
        }
        if let Some(cw) = builder.collect_witnesses {
            result = result.collect_witnesses(cw);
        }
        if let Some(rd) = builder.return_diagnostics {
            result = result.return_diagnostics(rd);
        }

        // Range bounds have no meaning for an explicit candidate set
        if builder.start.is_some() || builder.end.is_some() {
            result.deferred_error = Some(PrimalityError::UnsupportedFeature {
                adapter: "Batch",
                feature: "range scanning",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for scanning an inclusive integer interval.
#[derive(Debug, Clone, Copy)]
pub struct Range;

impl<T: PrimInt + Unsigned> PrimalityAdapter<T> for Range {
    type Output = RangePrimalityBuilder<T>;

    fn convert(builder: PrimalityBuilder<T>) -> Self::Output {
        let mut result = RangePrimalityBuilder::default();

        if let (Some(start), Some(end)) = (builder.start, builder.end) {
            result = result.range(start, end);
        }
        if let Some(strategy) = builder.strategy {
            result = result.strategy(strategy);
        }
        if let Some(rd) = builder.return_diagnostics {
            result = result.return_diagnostics(rd);
        }

        // A prime listing has no composites to witness
        if builder.collect_witnesses.is_some() {
            result.deferred_error = Some(PrimalityError::UnsupportedFeature {
                adapter: "Range",
                feature: "witness collection",
            });
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
