//! Execution engine for primality check operations.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that walks a normalized
//! candidate set, applies the configured check strategy to each value, and
//! assembles verdict flags, optional composite witnesses, and the prime
//! count. The executor is the single place where strategy, classification,
//! and bookkeeping meet.
//!
//! ## Design notes
//!
//! * Operates on `u64` only; the adapters normalize and denormalize.
//! * Verdicts come from the configured strategy; witnesses come from
//!   classification, so composite evidence is strategy-independent.
//! * Allocates exactly the output vectors, nothing else.
//!
//! ## Invariants
//!
//! * `flags.len() == candidates.len()`, and likewise for witnesses when
//!   collected.
//! * `prime_count` equals the number of `true` flags.
//! * Witness entries are `Some` exactly for composite candidates (`p >= 4`
//!   and not prime).
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not convert candidate types (handled by adapters).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::classify::classify;
use crate::math::strategy::CheckStrategy;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for primality execution.
#[derive(Debug, Clone, Copy)]
pub struct PrimalityConfig {
    /// Trial-division strategy applied to every candidate.
    pub strategy: CheckStrategy,

    /// Whether to collect composite witnesses alongside verdicts.
    pub collect_witnesses: bool,
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        Self {
            strategy: CheckStrategy::default(),
            collect_witnesses: false,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Output from primality execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput {
    /// Per-candidate verdicts, in input order.
    pub flags: Vec<bool>,

    /// Per-candidate smallest-divisor witnesses (if collection was requested).
    pub witnesses: Option<Vec<Option<u64>>>,

    /// Number of `true` verdicts.
    pub prime_count: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for primality checks.
pub struct PrimalityExecutor;

impl PrimalityExecutor {
    /// Check every candidate under the given configuration.
    pub fn run_with_config(candidates: &[u64], config: PrimalityConfig) -> ExecutorOutput {
        let n = candidates.len();
        let mut flags = Vec::with_capacity(n);
        let mut witnesses = if config.collect_witnesses {
            Some(Vec::with_capacity(n))
        } else {
            None
        };
        let mut prime_count = 0;

        for &p in candidates {
            let verdict = config.strategy.check(p);
            if verdict {
                prime_count += 1;
            }
            flags.push(verdict);

            if let Some(w) = witnesses.as_mut() {
                w.push(classify(p).witness());
            }
        }

        ExecutorOutput {
            flags,
            witnesses,
            prime_count,
        }
    }
}
