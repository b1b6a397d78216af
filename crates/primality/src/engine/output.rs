//! Output types and result structures for primality operations.
//!
//! ## Purpose
//!
//! This module defines the `PrimalityResult` struct returned by batch checks
//! and the `RangeScan` struct returned by interval scans, together with their
//! query methods and human-readable formatting.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<_>>`.
//! * **Generics**: Results keep the caller's candidate type.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Order**: Batch results preserve the caller's candidate order.
//!
//! ## Key concepts
//!
//! * **Optional Outputs**: Witnesses and diagnostics are only populated when
//!   requested.
//! * **Witnesses**: Smallest divisors as checkable composite evidence.
//!
//! ## Invariants
//!
//! * All populated vectors have the same length as the candidate set.
//! * `prime_count` equals the number of `true` verdicts.
//! * Witness entries are `Some` exactly for composite candidates.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (responsibility of the
//!   engine).
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::strategy::CheckStrategy;

// ============================================================================
// Batch Result Structure
// ============================================================================

/// Output of a batch primality check.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimalityResult<T> {
    /// Candidates, in the caller's order.
    pub candidates: Vec<T>,

    /// Per-candidate verdicts, aligned with `candidates`.
    pub is_prime: Vec<bool>,

    /// Smallest-divisor witnesses for composites (if collection was requested).
    pub witnesses: Option<Vec<Option<T>>>,

    /// Number of prime candidates.
    pub prime_count: usize,

    /// Strategy used for the check.
    pub strategy_used: CheckStrategy,

    /// Summary statistics (if requested).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: PrimInt + Unsigned> PrimalityResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of candidates checked.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Check if composite witnesses were collected.
    pub fn has_witnesses(&self) -> bool {
        self.witnesses.is_some()
    }

    /// Verdict for the candidate at `index`, if in bounds.
    pub fn verdict(&self, index: usize) -> Option<bool> {
        self.is_prime.get(index).copied()
    }

    /// The prime candidates, in input order.
    pub fn primes(&self) -> Vec<T> {
        self.candidates
            .iter()
            .zip(self.is_prime.iter())
            .filter(|(_, &flag)| flag)
            .map(|(&c, _)| c)
            .collect()
    }
}

// ============================================================================
// Batch Display Implementation
// ============================================================================

impl<T: PrimInt + Unsigned + Display> Display for PrimalityResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Candidates: {}", self.candidates.len())?;
        writeln!(f, "  Primes:     {}", self.prime_count)?;
        writeln!(f, "  Strategy:   {}", self.strategy_used.name())?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Verdicts:")?;

        let has_witnesses = self.has_witnesses();

        // Build header
        write!(f, "{:>14} {:>8}", "Candidate", "Prime")?;
        if has_witnesses {
            write!(f, " {:>12}", "Witness")?;
        }
        writeln!(f)?;

        // Separator line
        let line_width = 23 + if has_witnesses { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 candidates)
        let n = self.candidates.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>14}", "...")?;
            }
            prev_idx = idx;

            let verdict = if self.is_prime[idx] { "yes" } else { "no" };
            write!(f, "{:>14} {:>8}", self.candidates[idx], verdict)?;

            if has_witnesses {
                if let Some(witnesses) = &self.witnesses {
                    match &witnesses[idx] {
                        Some(w) => write!(f, " {:>12}", w)?,
                        None => write!(f, " {:>12}", "-")?,
                    }
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

// ============================================================================
// Range Scan Structure
// ============================================================================

/// Output of an inclusive range scan.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeScan<T> {
    /// Lower bound of the scanned interval (inclusive).
    pub start: T,

    /// Upper bound of the scanned interval (inclusive).
    pub end: T,

    /// Primes found, in ascending order.
    pub primes: Vec<T>,

    /// Number of candidates scanned.
    pub scanned: u64,

    /// Strategy used for the scan.
    pub strategy_used: CheckStrategy,

    /// Summary statistics (if requested).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: PrimInt + Unsigned> RangeScan<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of primes found.
    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    /// Smallest prime in the interval, if any.
    pub fn smallest(&self) -> Option<T> {
        self.primes.first().copied()
    }

    /// Largest prime in the interval, if any.
    pub fn largest(&self) -> Option<T> {
        self.primes.last().copied()
    }
}

// ============================================================================
// Range Scan Display Implementation
// ============================================================================

impl<T: PrimInt + Unsigned + Display> Display for RangeScan<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Range:    [{}, {}]", self.start, self.end)?;
        writeln!(f, "  Scanned:  {}", self.scanned)?;
        writeln!(f, "  Primes:   {}", self.prime_count())?;
        writeln!(f, "  Strategy: {}", self.strategy_used.name())?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Primes Found:")?;

        // Show first 10 and last 10 if more than 20 primes
        let n = self.primes.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>14}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>14}", self.primes[idx])?;
        }

        Ok(())
    }
}
