//! Batch adapter for explicit candidate sets.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: check every value in a
//! caller-supplied slice and report verdicts in the caller's order. This is
//! the workhorse mode for testing known candidate sets.
//!
//! ## Design notes
//!
//! * **Processing**: Normalizes, executes, and denormalizes in one pass each.
//! * **Order**: Output order matches input order; no sorting is involved.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over unsigned integer types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Witness Collection**: Optional smallest-divisor evidence for composites.
//!
//! ## Invariants
//!
//! * At least one candidate is required.
//! * Candidates must fit the oracle's `u64` domain.
//! * Output vectors align with the input slice.
//!
//! ## Non-goals
//!
//! * This adapter does not scan intervals (use the range adapter).
//! * This adapter does not deduplicate candidates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Display;
use core::marker::PhantomData;
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::engine::executor::{PrimalityConfig, PrimalityExecutor};
use crate::engine::output::PrimalityResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::strategy::CheckStrategy;
use crate::primitives::convert::{from_u64, normalize};
use crate::primitives::errors::PrimalityError;

// ============================================================================
// Batch Primality Builder
// ============================================================================

/// Builder for the batch primality checker.
#[derive(Debug, Clone)]
pub struct BatchPrimalityBuilder<T> {
    /// Trial-division strategy
    pub strategy: CheckStrategy,

    /// Whether to collect composite witnesses
    pub collect_witnesses: bool,

    /// Whether to compute summary diagnostics
    pub return_diagnostics: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<PrimalityError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _candidate: PhantomData<T>,
}

impl<T: PrimInt + Unsigned> Default for BatchPrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Unsigned> BatchPrimalityBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            strategy: CheckStrategy::default(),
            collect_witnesses: false,
            return_diagnostics: false,
            deferred_error: None,
            duplicate_param: None,
            _candidate: PhantomData,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the trial-division strategy.
    pub fn strategy(mut self, strategy: CheckStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable collecting composite witnesses in the result.
    pub fn collect_witnesses(mut self, enabled: bool) -> Self {
        self.collect_witnesses = enabled;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch checker.
    pub fn build(self) -> Result<BatchPrimality<T>, PrimalityError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchPrimality { config: self })
    }
}

// ============================================================================
// Batch Primality Checker
// ============================================================================

/// Batch primality checker.
#[derive(Debug)]
pub struct BatchPrimality<T> {
    config: BatchPrimalityBuilder<T>,
}

impl<T: PrimInt + Unsigned + Display> BatchPrimality<T> {
    /// Check every candidate in the slice.
    pub fn check(self, candidates: &[T]) -> Result<PrimalityResult<T>, PrimalityError> {
        Validator::validate_candidates(candidates)?;

        // Normalize candidates into the oracle domain
        let normalized = normalize(candidates)?;

        // Configure batch execution
        let config = PrimalityConfig {
            strategy: self.config.strategy,
            collect_witnesses: self.config.collect_witnesses,
        };

        // Execute the checks
        let result = PrimalityExecutor::run_with_config(&normalized, config);

        // Denormalize witnesses back to the caller's type
        let witnesses = result
            .witnesses
            .map(|ws| ws.into_iter().map(|w| w.map(from_u64::<T>)).collect());

        // Compute summary diagnostics if requested
        let diagnostics = if self.config.return_diagnostics {
            let primes: Vec<T> = candidates
                .iter()
                .zip(result.flags.iter())
                .filter(|(_, &flag)| flag)
                .map(|(&c, _)| c)
                .collect();
            Some(Diagnostics::compute(candidates.len(), &primes))
        } else {
            None
        };

        Ok(PrimalityResult {
            candidates: candidates.to_vec(),
            is_prime: result.flags,
            witnesses,
            prime_count: result.prime_count,
            strategy_used: self.config.strategy,
            diagnostics,
        })
    }
}
