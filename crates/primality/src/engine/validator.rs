//! Input validation for primality configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for check configuration and
//! input data: candidate set requirements, range bounds, and builder
//! consistency.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Totality elsewhere**: The oracle itself never fails; only the
//!   configuration surface can.
//!
//! ## Key concepts
//!
//! * **Candidate sets**: Batch checks need at least one candidate.
//! * **Range bounds**: Scans need `start <= end` and a bounded span.
//! * **Builder consistency**: Each parameter may be set at most once.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not normalize candidates (see `primitives::convert`).
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the checks themselves.

// External dependencies
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::primitives::errors::PrimalityError;

/// Maximum number of candidates an inclusive range scan may cover.
///
/// An uncapped scan over `u64` could neither finish nor allocate its output,
/// so spans are bounded the same way iteration counts are elsewhere.
pub const MAX_RANGE_SPAN: u64 = 16_777_216;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for primality configuration and input data.
///
/// Provides static methods for validating check parameters and input data.
/// All methods return `Result<(), PrimalityError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a candidate set for batch checking.
    pub fn validate_candidates<T: PrimInt + Unsigned>(
        candidates: &[T],
    ) -> Result<(), PrimalityError> {
        if candidates.is_empty() {
            return Err(PrimalityError::EmptyInput);
        }
        Ok(())
    }

    // ========================================================================
    // Range Validation
    // ========================================================================

    /// Validate the bounds of an inclusive range scan.
    pub fn validate_range(start: u64, end: u64) -> Result<(), PrimalityError> {
        // Check 1: Ordering
        if start > end {
            return Err(PrimalityError::InvalidRange { start, end });
        }

        // Check 2: Span cap. `end - start` cannot overflow after check 1;
        // the saturating add keeps the reported span honest at u64::MAX.
        let span_minus_one = end - start;
        if span_minus_one >= MAX_RANGE_SPAN {
            return Err(PrimalityError::RangeTooLarge {
                span: span_minus_one.saturating_add(1),
                max: MAX_RANGE_SPAN,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PrimalityError> {
        if let Some(param) = duplicate_param {
            return Err(PrimalityError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
