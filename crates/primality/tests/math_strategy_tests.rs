#![cfg(feature = "dev")]
//! Tests for check strategies.
//!
//! These tests verify the strategy layer that packages the trial-division
//! primitives:
//! - Metadata (names, complexity classes, divisor order)
//! - Verdict dispatch to the underlying formulations
//! - Division bounds
//! - Witness stability across strategies
//!
//! ## Test Organization
//!
//! 1. **Strategy Metadata** - Names, complexity, order, defaults
//! 2. **Verdict Dispatch** - Strategy checks match the primitives
//! 3. **Division Bounds** - Worst-case cost figures
//! 4. **Witness Stability** - Witnesses independent of strategy

use primality::internals::math::strategy::CheckStrategy;
use primality::internals::math::trial::{half_descent, sqrt_ascent};

// ============================================================================
// Strategy Metadata Tests
// ============================================================================

/// Test strategy names and complexity classes.
#[test]
fn test_strategy_metadata() {
    assert_eq!(CheckStrategy::HalfDescent.name(), "HalfDescent");
    assert_eq!(CheckStrategy::SqrtAscent.name(), "SqrtAscent");

    assert_eq!(CheckStrategy::HalfDescent.complexity(), "O(p)");
    assert_eq!(CheckStrategy::SqrtAscent.complexity(), "O(sqrt p)");

    assert!(CheckStrategy::HalfDescent.descending());
    assert!(!CheckStrategy::SqrtAscent.descending());
}

/// Test that the default strategy is the optimized one.
#[test]
fn test_default_strategy() {
    assert_eq!(CheckStrategy::default(), CheckStrategy::SqrtAscent);
}

// ============================================================================
// Verdict Dispatch Tests
// ============================================================================

/// Test that strategy dispatch matches the underlying primitives.
#[test]
fn test_check_dispatch() {
    for p in [0u64, 1, 2, 3, 4, 9, 97, 100, 121, 1999] {
        assert_eq!(CheckStrategy::HalfDescent.check(p), half_descent(p));
        assert_eq!(CheckStrategy::SqrtAscent.check(p), sqrt_ascent(p));
    }
}

/// Test that both strategies produce identical verdicts.
#[test]
fn test_strategies_agree() {
    for p in 0u64..=2000 {
        assert_eq!(
            CheckStrategy::HalfDescent.check(p),
            CheckStrategy::SqrtAscent.check(p),
            "strategies disagree at {}",
            p
        );
    }
}

// ============================================================================
// Division Bound Tests
// ============================================================================

/// Test division bounds for base-case candidates.
///
/// Candidates below 4 are answered without any division.
#[test]
fn test_division_bound_base_cases() {
    for p in 0u64..4 {
        assert_eq!(CheckStrategy::HalfDescent.division_bound(p), 0);
        assert_eq!(CheckStrategy::SqrtAscent.division_bound(p), 0);
    }
}

/// Test division bounds for representative candidates.
#[test]
fn test_division_bound_values() {
    // Descending: every divisor in 2..=p/2
    assert_eq!(CheckStrategy::HalfDescent.division_bound(10), 4);
    assert_eq!(CheckStrategy::HalfDescent.division_bound(100), 49);

    // Ascending: 2 plus the odd divisors up to isqrt(p)
    assert_eq!(CheckStrategy::SqrtAscent.division_bound(10), 2);
    assert_eq!(CheckStrategy::SqrtAscent.division_bound(97), 5);
}

/// Test that the ascending bound never exceeds the descending bound.
#[test]
fn test_ascending_bound_is_cheaper() {
    for p in 4u64..=2000 {
        assert!(
            CheckStrategy::SqrtAscent.division_bound(p)
                <= CheckStrategy::HalfDescent.division_bound(p),
            "ascending bound exceeds descending at {}",
            p
        );
    }
}

// ============================================================================
// Witness Stability Tests
// ============================================================================

/// Test that witnesses are identical across strategies.
#[test]
fn test_witness_stability() {
    for p in 0u64..=500 {
        assert_eq!(
            CheckStrategy::HalfDescent.find_witness(p),
            CheckStrategy::SqrtAscent.find_witness(p),
            "witnesses differ at {}",
            p
        );
    }
}

/// Test witness values for representative composites.
#[test]
fn test_witness_values() {
    let strategy = CheckStrategy::default();
    assert_eq!(strategy.find_witness(4), Some(2));
    assert_eq!(strategy.find_witness(9), Some(3));
    assert_eq!(strategy.find_witness(97), None);
    assert_eq!(strategy.find_witness(0), None);
    assert_eq!(strategy.find_witness(1), None);
}
