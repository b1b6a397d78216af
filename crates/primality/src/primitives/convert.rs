//! Candidate normalization between generic unsigned integers and `u64`.
//!
//! ## Purpose
//!
//! The const-evaluable core operates on `u64`; the public API is generic over
//! unsigned machine integers. This module converts between the two at the
//! boundary, rejecting values the oracle domain cannot represent.
//!
//! ## Design notes
//!
//! * **Lossless in**: `to_u64`/`normalize` fail rather than truncate. The only
//!   failing source type is `u128`.
//! * **Infallible out**: `from_u64` is only called with values previously
//!   derived from the caller's type, so the reverse conversion cannot lose
//!   information.
//!
//! ## Non-goals
//!
//! * This module does not validate candidate sets (handled by the engine
//!   validator).
//! * This module does not support signed integers; negative candidates are
//!   ruled out by the type system.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Display;
use num_traits::{PrimInt, Unsigned};

// Internal dependencies
use crate::primitives::errors::PrimalityError;

/// Convert a single labeled value (e.g. a range bound) to `u64`.
pub fn to_u64<T: PrimInt + Unsigned + Display>(value: T, name: &str) -> Result<u64, PrimalityError> {
    value
        .to_u64()
        .ok_or_else(|| PrimalityError::CandidateOutOfRange(format!("{name}={value}")))
}

/// Normalize a slice of candidates to the oracle's `u64` domain.
pub fn normalize<T: PrimInt + Unsigned + Display>(
    candidates: &[T],
) -> Result<Vec<u64>, PrimalityError> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            c.to_u64()
                .ok_or_else(|| PrimalityError::CandidateOutOfRange(format!("candidate[{i}]={c}")))
        })
        .collect()
}

/// Convert a `u64` back to the caller's candidate type.
///
/// Callers only pass values obtained from `T` in the first place (witnesses
/// never exceed their candidate, scan values never exceed the range's end
/// bound), so the conversion cannot fail; the zero fallback is unreachable.
#[inline]
pub fn from_u64<T: PrimInt + Unsigned>(value: u64) -> T {
    T::from(value).unwrap_or_else(T::zero)
}
