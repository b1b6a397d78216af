#![cfg(feature = "dev")]
//! Tests for the range adapter.
//!
//! These tests verify interval prime scans:
//! - Prime collection over inclusive bounds
//! - Degenerate and empty intervals
//! - Bound validation and the span cap
//! - Diagnostics and strategy selection
//!
//! ## Test Organization
//!
//! 1. **Basic Scans** - Known intervals
//! 2. **Degenerate Intervals** - Single candidates, prime-free stretches
//! 3. **Validation** - Descending bounds, oversized spans, domain limits
//! 4. **Configuration** - Strategies and diagnostics

use primality::internals::adapters::range::RangePrimalityBuilder;
use primality::internals::engine::validator::MAX_RANGE_SPAN;
use primality::internals::math::strategy::CheckStrategy;
use primality::internals::primitives::errors::PrimalityError;

// ============================================================================
// Basic Scan Tests
// ============================================================================

/// Test a scan over a well-known interval.
///
/// There are exactly 15 primes between 1 and 50.
#[test]
fn test_scan_to_fifty() {
    let scan = RangePrimalityBuilder::<u32>::default()
        .range(1, 50)
        .build()
        .unwrap()
        .scan()
        .unwrap();

    assert_eq!(
        scan.primes,
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
    );
    assert_eq!(scan.scanned, 50);
    assert_eq!(scan.smallest(), Some(2));
    assert_eq!(scan.largest(), Some(47));
}

/// Test that both bounds are inclusive.
#[test]
fn test_inclusive_bounds() {
    let scan = RangePrimalityBuilder::<u64>::default()
        .range(11, 13)
        .build()
        .unwrap()
        .scan()
        .unwrap();

    assert_eq!(scan.primes, vec![11, 13]);
    assert_eq!(scan.scanned, 3);
}

// ============================================================================
// Degenerate Interval Tests
// ============================================================================

/// Test a single-candidate interval.
#[test]
fn test_single_candidate() {
    let scan = RangePrimalityBuilder::<u64>::default()
        .range(2, 2)
        .build()
        .unwrap()
        .scan()
        .unwrap();

    assert_eq!(scan.primes, vec![2]);
    assert_eq!(scan.scanned, 1);
}

/// Test a prime-free interval.
///
/// 24 through 28 contains no primes.
#[test]
fn test_prime_free_interval() {
    let scan = RangePrimalityBuilder::<u64>::default()
        .range(24, 28)
        .build()
        .unwrap()
        .scan()
        .unwrap();

    assert!(scan.primes.is_empty());
    assert_eq!(scan.prime_count(), 0);
}

/// Test the interval covering only the base cases.
#[test]
fn test_base_case_interval() {
    let scan = RangePrimalityBuilder::<u64>::default()
        .range(0, 3)
        .build()
        .unwrap()
        .scan()
        .unwrap();

    assert_eq!(scan.primes, vec![2, 3]);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that descending bounds are rejected.
#[test]
fn test_descending_bounds_rejected() {
    let err = RangePrimalityBuilder::<u64>::default()
        .range(10, 5)
        .build()
        .unwrap()
        .scan()
        .unwrap_err();

    assert_eq!(err, PrimalityError::InvalidRange { start: 10, end: 5 });
}

/// Test that oversized spans are rejected before any scanning.
#[test]
fn test_oversized_span_rejected() {
    let err = RangePrimalityBuilder::<u64>::default()
        .range(0, MAX_RANGE_SPAN)
        .build()
        .unwrap()
        .scan()
        .unwrap_err();

    assert_eq!(
        err,
        PrimalityError::RangeTooLarge {
            span: MAX_RANGE_SPAN + 1,
            max: MAX_RANGE_SPAN,
        }
    );
}

/// Test that bounds above the u64 domain are rejected.
#[test]
fn test_out_of_domain_bound_rejected() {
    let err = RangePrimalityBuilder::<u128>::default()
        .range(0, u64::MAX as u128 + 1)
        .build()
        .unwrap()
        .scan()
        .unwrap_err();

    match err {
        PrimalityError::CandidateOutOfRange(msg) => assert!(msg.contains("end")),
        other => panic!("expected CandidateOutOfRange, got {:?}", other),
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test that the reference strategy yields the same scan.
#[test]
fn test_strategy_agreement() {
    let descending = RangePrimalityBuilder::<u64>::default()
        .range(0, 200)
        .strategy(CheckStrategy::HalfDescent)
        .build()
        .unwrap()
        .scan()
        .unwrap();

    let ascending = RangePrimalityBuilder::<u64>::default()
        .range(0, 200)
        .strategy(CheckStrategy::SqrtAscent)
        .build()
        .unwrap()
        .scan()
        .unwrap();

    assert_eq!(descending.primes, ascending.primes);
}

/// Test diagnostics over a scanned interval.
#[test]
fn test_scan_diagnostics() {
    let scan = RangePrimalityBuilder::<u32>::default()
        .range(1, 10)
        .return_diagnostics(true)
        .build()
        .unwrap()
        .scan()
        .unwrap();

    let diag = scan.diagnostics.expect("diagnostics requested");
    assert_eq!(diag.scanned, 10);
    assert_eq!(diag.prime_count, 4);
    assert_eq!(diag.density, 0.4);
    assert_eq!(diag.smallest_prime, Some(2));
    assert_eq!(diag.largest_prime, Some(7));
}
