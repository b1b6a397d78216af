//! Diagnostic summaries for primality check results.
//!
//! ## Purpose
//!
//! This module condenses a set of verdicts into summary statistics: how many
//! candidates were scanned, how many were prime, the observed prime density,
//! and the smallest and largest primes found.
//!
//! ## Design notes
//!
//! * **On demand**: Diagnostics are only computed when the builder requests
//!   them (`return_diagnostics()`).
//! * **Single pass**: All statistics come from one walk over the primes.
//! * **Generics**: The extremes keep the caller's candidate type.
//!
//! ## Invariants
//!
//! * `prime_count + non_prime_count == scanned`.
//! * `density` is in `[0, 1]` and is 0 for an empty scan.
//! * `smallest_prime <= largest_prime` whenever both are present.
//!
//! ## Non-goals
//!
//! * This module does not perform the checks themselves.
//! * This module does not estimate asymptotic density (no li(x) comparison).

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::{PrimInt, Unsigned};

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Summary statistics for a set of primality verdicts.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Number of candidates scanned.
    pub scanned: usize,

    /// Number of candidates found prime.
    pub prime_count: usize,

    /// Number of candidates found not prime (composites plus 0 and 1).
    pub non_prime_count: usize,

    /// Observed prime density: `prime_count / scanned`.
    pub density: f64,

    /// Smallest prime found, if any.
    pub smallest_prime: Option<T>,

    /// Largest prime found, if any.
    pub largest_prime: Option<T>,
}

impl<T: PrimInt + Unsigned> Diagnostics<T> {
    /// Compute diagnostics from a scan size and the primes it produced.
    pub fn compute(scanned: usize, primes: &[T]) -> Self {
        let prime_count = primes.len();
        let density = if scanned == 0 {
            0.0
        } else {
            prime_count as f64 / scanned as f64
        };

        let mut smallest = None;
        let mut largest = None;
        for &p in primes {
            smallest = Some(match smallest {
                Some(s) if s < p => s,
                _ => p,
            });
            largest = Some(match largest {
                Some(l) if l > p => l,
                _ => p,
            });
        }

        Self {
            scanned,
            prime_count,
            non_prime_count: scanned - prime_count,
            density,
            smallest_prime: smallest,
            largest_prime: largest,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: PrimInt + Unsigned + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Primality Diagnostics:")?;
        writeln!(f, "  Scanned:      {}", self.scanned)?;
        writeln!(f, "  Primes:       {}", self.prime_count)?;
        writeln!(f, "  Non-primes:   {}", self.non_prime_count)?;
        writeln!(f, "  Density:      {:.4}", self.density)?;
        if let Some(ref p) = self.smallest_prime {
            writeln!(f, "  Smallest:     {}", p)?;
        }
        if let Some(ref p) = self.largest_prime {
            writeln!(f, "  Largest:      {}", p)?;
        }
        Ok(())
    }
}
