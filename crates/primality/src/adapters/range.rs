//! Range adapter for interval prime scans.
//!
//! ## Purpose
//!
//! This module provides the range execution adapter: scan every integer in
//! an inclusive interval `[start, end]` and collect the primes found. This
//! is the mode for questions like "which primes lie between a and b".
//!
//! ## Design notes
//!
//! * **Bounded**: Interval spans are capped (see the validator) so a scan
//!   always terminates in reasonable time and memory.
//! * **Ascending**: Primes are reported in ascending order by construction.
//! * **Generics**: Bounds and reported primes keep the caller's type.
//!
//! ## Key concepts
//!
//! * **Inclusive bounds**: Both `start` and `end` are scanned.
//! * **Span cap**: `MAX_RANGE_SPAN` candidates at most per scan.
//!
//! ## Invariants
//!
//! * `start <= end` for a valid scan.
//! * Reported primes lie within `[start, end]` and are strictly ascending.
//!
//! ## Non-goals
//!
//! * This adapter does not support witness collection; a prime listing has
//!   no composites to witness.
//! * This adapter does not handle explicit candidate sets (use the batch
//!   adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Display;
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::engine::output::RangeScan;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::strategy::CheckStrategy;
use crate::primitives::convert::{from_u64, to_u64};
use crate::primitives::errors::PrimalityError;

// ============================================================================
// Range Primality Builder
// ============================================================================

/// Builder for the range prime scanner.
#[derive(Debug, Clone)]
pub struct RangePrimalityBuilder<T> {
    /// Lower bound of the interval (inclusive)
    pub start: T,

    /// Upper bound of the interval (inclusive)
    pub end: T,

    /// Trial-division strategy
    pub strategy: CheckStrategy,

    /// Whether to compute summary diagnostics
    pub return_diagnostics: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<PrimalityError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: PrimInt + Unsigned> Default for RangePrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Unsigned> RangePrimalityBuilder<T> {
    /// Create a new range builder with default parameters.
    fn new() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
            strategy: CheckStrategy::default(),
            return_diagnostics: false,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the interval to scan (both bounds inclusive).
    pub fn range(mut self, start: T, end: T) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the trial-division strategy.
    pub fn strategy(mut self, strategy: CheckStrategy) -> Self {
        self.strategy = strategy;
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

    /// Build the range scanner.
    pub fn build(self) -> Result<RangePrimality<T>, PrimalityError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(RangePrimality { config: self })
    }
}

// ============================================================================
// Range Primality Scanner
// ============================================================================

/// Range prime scanner.
#[derive(Debug)]
pub struct RangePrimality<T> {
    config: RangePrimalityBuilder<T>,
}

impl<T: PrimInt + Unsigned + Display> RangePrimality<T> {
    /// Scan the configured interval and collect the primes in it.
    pub fn scan(self) -> Result<RangeScan<T>, PrimalityError> {
        let start = to_u64(self.config.start, "start")?;
        let end = to_u64(self.config.end, "end")?;
        Validator::validate_range(start, end)?;

        let strategy = self.config.strategy;
        let mut primes = Vec::new();

        // Inclusive walk that cannot overflow at end == u64::MAX
        let mut p = start;
        loop {
            if strategy.check(p) {
                primes.push(from_u64::<T>(p));
            }
            if p == end {
                break;
            }
            p += 1;
        }

        // Span fits after validation; the cap keeps `+ 1` overflow-free
        let scanned = end - start + 1;

        let diagnostics = if self.config.return_diagnostics {
            Some(Diagnostics::compute(scanned as usize, &primes))
        } else {
            None
        };

        Ok(RangeScan {
            start: self.config.start,
            end: self.config.end,
            primes,
            scanned,
            strategy_used: strategy,
            diagnostics,
        })
    }
}
