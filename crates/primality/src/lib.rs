//! # Primality — const-evaluable primality testing for Rust
//!
//! Exact, deterministic primality testing by bounded trial division, usable
//! both at compile time and at run time, for **Rust** on `std` and `no_std`
//! targets.
//!
//! ## What is the oracle?
//!
//! The core of the crate is a pure function from a non-negative integer to a
//! boolean verdict. A candidate `p >= 4` is prime iff no divisor `d` with
//! `2 <= d <= p / 2` divides it evenly; 0 and 1 are not prime and 2 and 3 are
//! prime by explicit convention. Two strategies implement this contract: the
//! classic descending formulation (divisors from `p / 2` down to 2) and an
//! ascending formulation that stops at the square root. Their verdicts are
//! identical; only the division count differs.
//!
//! ## Quick Start
//!
//! ### One-call contract
//!
//! ```rust
//! use primality::is_prime;
//!
//! assert!(is_prime(97));
//! assert!(!is_prime(100));
//!
//! // The oracle is const-evaluable: verdicts can fold into constants.
//! const SEVEN_IS_PRIME: bool = is_prime(7);
//! assert!(SEVEN_IS_PRIME);
//! ```
//!
//! ### Typical Use
//!
//! ```rust
//! use primality::prelude::*;
//!
//! // Build the checker
//! let checker = Primality::new()
//!     .strategy(SqrtAscent)   // O(sqrt p) trial division
//!     .collect_witnesses()    // Smallest divisor for every composite
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Check an explicit candidate set
//! let report = checker.check(&[2u64, 9, 97, 100])?;
//!
//! assert_eq!(report.prime_count, 2);
//! println!("{}", report);
//! # Result::<(), PrimalityError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Candidates: 4
//!   Primes:     2
//!   Strategy:   SqrtAscent
//!
//! Verdicts:
//!      Candidate    Prime      Witness
//! ------------------------------------
//!              2      yes            -
//!              9       no            3
//!             97      yes            -
//!            100       no            2
//! ```
//!
//! ### Range Scans
//!
//! ```rust
//! use primality::prelude::*;
//!
//! let scan = Primality::new()
//!     .range(1u32, 50)        // Inclusive interval
//!     .return_diagnostics()   // Counts, density, extremes
//!     .adapter(Range)
//!     .build()?
//!     .scan()?;
//!
//! assert_eq!(scan.prime_count(), 15);
//! assert_eq!(scan.largest(), Some(47));
//! # Result::<(), PrimalityError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `check` method returns a `Result<PrimalityResult<T>, PrimalityError>`.
//!
//! - **`Ok(PrimalityResult<T>)`**: Contains verdicts, optional witnesses, and counts.
//! - **`Err(PrimalityError)`**: Indicates a configuration failure (e.g., empty input).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use primality::prelude::*;
//!
//! let checker = Primality::new().adapter(Batch).build()?;
//!
//! match checker.check(&[11u64, 12]) {
//!     Ok(report) => {
//!         println!("Primes found: {}", report.prime_count);
//!     }
//!     Err(e) => {
//!         eprintln!("Check failed: {}", e);
//!     }
//! }
//! # Result::<(), PrimalityError>::Ok(())
//! ```
//!
//! The oracle itself is total: `is_prime` accepts every `u64` and never
//! fails. Errors exist only on the configuration surface the builder adds.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! primality = { version = "0.5", default-features = false }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Prefer `is_prime` and `classify` directly; they are `const fn` and
//!   allocation-free
//! - Keep range scans small; scan output grows with the prime count
//! - Use narrower candidate types (`u16`, `u32`) where the domain allows
//!
//! ## References
//!
//! - Trial division: the oldest deterministic primality test; every composite
//!   `p` has a divisor at most `√p`, which bounds the search.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error types and conversion utilities.
mod primitives;

// Layer 2: Math - const trial-division core and check strategies.
mod math;

// Layer 3: Algorithms - candidate classification with witnesses.
mod algorithms;

// Layer 4: Evaluation - summary diagnostics over check results.
mod evaluation;

// Layer 5: Engine - orchestration, validation, and output types.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for primality checking.
mod api;

// The one-call contract, re-exported at the root.
pub use crate::math::trial::is_prime;

// Standard primality prelude.
pub mod prelude {
    pub use crate::api::{
        classify, is_prime,
        Adapter::{Batch, Range},
        CheckStrategy::{HalfDescent, SqrtAscent},
        Classification, Diagnostics, PrimalityBuilder as Primality, PrimalityError,
        PrimalityResult, RangeScan,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
