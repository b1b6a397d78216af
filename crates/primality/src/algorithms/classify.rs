//! Candidate classification with composite witnesses.
//!
//! ## Purpose
//!
//! This module refines the boolean primality verdict into a classification
//! that carries evidence: composite candidates come with their smallest
//! divisor, making every negative answer independently checkable.
//!
//! ## Design notes
//!
//! * **Distinct edge variants**: 0 and 1 get their own variants rather than
//!   being lumped into `Composite`. Neither has a divisor in `2..=p/2`, so
//!   a witness-carrying variant would have nothing truthful to carry.
//! * **Const-evaluable**: `classify` is a `const fn` like the primitives it
//!   delegates to.
//!
//! ## Invariants
//!
//! * `classify(p).is_prime() == is_prime(p)` for every `p`.
//! * Every `Composite { witness }` satisfies `p % witness == 0` and
//!   `2 <= witness <= p / 2`.
//!
//! ## Non-goals
//!
//! * This module does not factorize beyond the first witness.

// Internal dependencies
use crate::math::trial::smallest_divisor;

// ============================================================================
// Classification
// ============================================================================

/// Classification of a primality candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The candidate 0. Not prime, by convention.
    Zero,

    /// The candidate 1. Not prime, by convention.
    One,

    /// A prime candidate.
    Prime,

    /// A composite candidate, with its smallest divisor as evidence.
    Composite {
        /// Smallest divisor `d >= 2` of the candidate.
        witness: u64,
    },
}

impl Classification {
    /// Get the name of the classification.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Classification::Zero => "Zero",
            Classification::One => "One",
            Classification::Prime => "Prime",
            Classification::Composite { .. } => "Composite",
        }
    }

    /// Whether the classified candidate is prime.
    #[inline]
    pub const fn is_prime(&self) -> bool {
        matches!(self, Classification::Prime)
    }

    /// The composite witness, if any.
    #[inline]
    pub const fn witness(&self) -> Option<u64> {
        match self {
            Classification::Composite { witness } => Some(*witness),
            _ => None,
        }
    }
}

// ============================================================================
// Classification Function
// ============================================================================

/// Classify a candidate.
///
/// 0, 1, 2, and 3 are answered by the explicit base-case convention; larger
/// candidates are classified by searching for their smallest divisor.
pub const fn classify(p: u64) -> Classification {
    match p {
        0 => Classification::Zero,
        1 => Classification::One,
        2 | 3 => Classification::Prime,
        _ => match smallest_divisor(p) {
            Some(witness) => Classification::Composite { witness },
            None => Classification::Prime,
        },
    }
}
