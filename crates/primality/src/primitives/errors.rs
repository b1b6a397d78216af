//! Error types for primality operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring and
//! running primality checks, including input validation, range constraints,
//! and adapter limitations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. allowed spans).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty candidate sets, values wider than the oracle domain.
//! 2. **Range validation**: Descending intervals, spans above the scan cap.
//! 3. **Adapter constraints**: Features the selected execution adapter cannot provide.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.
//! * The core oracle itself never errors; it is total over `u64`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for primality operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimalityError {
    /// A batch check was requested with no candidates.
    EmptyInput,

    /// A candidate does not fit in the oracle's `u64` domain.
    ///
    /// Only reachable from `u128` inputs above `u64::MAX`; the message names
    /// the offending value and where it came from.
    CandidateOutOfRange(String),

    /// Range scans require `start <= end`.
    InvalidRange {
        /// Lower bound of the requested interval.
        start: u64,
        /// Upper bound of the requested interval.
        end: u64,
    },

    /// Range span exceeds the scan cap.
    RangeTooLarge {
        /// Number of candidates the interval would cover.
        span: u64,
        /// Maximum permitted span.
        max: u64,
    },

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Range").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PrimalityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Candidate set is empty"),
            Self::CandidateOutOfRange(msg) => {
                write!(f, "Candidate out of range: {msg} (must fit in u64)")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "Invalid range: start {start} is greater than end {end}")
            }
            Self::RangeTooLarge { span, max } => {
                write!(f, "Range too large: {span} candidates (must be at most {max})")
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PrimalityError {}
