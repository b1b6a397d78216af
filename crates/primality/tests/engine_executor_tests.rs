#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! These tests verify the executor that walks candidate sets:
//! - Verdict flags and prime counting
//! - Optional witness collection
//! - Strategy independence of verdicts
//! - Alignment invariants
//!
//! ## Test Organization
//!
//! 1. **Verdicts** - Flags and counts
//! 2. **Witnesses** - Collection on demand, composite-only entries
//! 3. **Strategy Independence** - Identical verdicts under both strategies
//! 4. **Edge Sets** - Empty input, edge candidates

use primality::internals::engine::executor::{
    ExecutorOutput, PrimalityConfig, PrimalityExecutor,
};
use primality::internals::math::strategy::CheckStrategy;

/// Run the executor with the given strategy and witness flag.
fn run(candidates: &[u64], strategy: CheckStrategy, collect_witnesses: bool) -> ExecutorOutput {
    PrimalityExecutor::run_with_config(
        candidates,
        PrimalityConfig {
            strategy,
            collect_witnesses,
        },
    )
}

// ============================================================================
// Verdict Tests
// ============================================================================

/// Test verdict flags and the prime count.
#[test]
fn test_verdicts_and_count() {
    let out = run(&[0, 1, 2, 3, 4, 9, 97], CheckStrategy::default(), false);

    assert_eq!(
        out.flags,
        vec![false, false, true, true, false, false, true]
    );
    assert_eq!(out.prime_count, 3);
    assert!(out.witnesses.is_none());
}

/// Test that flags align with candidates.
#[test]
fn test_alignment() {
    let candidates: Vec<u64> = (0..100).collect();
    let out = run(&candidates, CheckStrategy::default(), true);

    assert_eq!(out.flags.len(), candidates.len());
    assert_eq!(out.witnesses.as_ref().map(Vec::len), Some(candidates.len()));
    assert_eq!(
        out.prime_count,
        out.flags.iter().filter(|&&flag| flag).count()
    );
}

// ============================================================================
// Witness Tests
// ============================================================================

/// Test witness collection.
///
/// Witnesses are Some exactly for composites; 0 and 1 are non-prime without
/// a divisor in range, so they carry no witness.
#[test]
fn test_witness_collection() {
    let out = run(&[0, 1, 2, 4, 9, 97], CheckStrategy::default(), true);

    let witnesses = out.witnesses.expect("witnesses requested");
    assert_eq!(witnesses, vec![None, None, None, Some(2), Some(3), None]);
}

/// Test that witnesses are skipped when not requested.
#[test]
fn test_witnesses_on_demand() {
    let out = run(&[4, 9], CheckStrategy::default(), false);
    assert!(out.witnesses.is_none());
}

// ============================================================================
// Strategy Independence Tests
// ============================================================================

/// Test that both strategies produce identical executor output.
#[test]
fn test_strategy_independence() {
    let candidates: Vec<u64> = (0..500).collect();

    let descending = run(&candidates, CheckStrategy::HalfDescent, true);
    let ascending = run(&candidates, CheckStrategy::SqrtAscent, true);

    assert_eq!(descending.flags, ascending.flags);
    assert_eq!(descending.witnesses, ascending.witnesses);
    assert_eq!(descending.prime_count, ascending.prime_count);
}

// ============================================================================
// Edge Set Tests
// ============================================================================

/// Test the executor over an empty candidate set.
///
/// Validation happens in the adapters; the executor itself handles the
/// degenerate case gracefully.
#[test]
fn test_empty_candidates() {
    let out = run(&[], CheckStrategy::default(), true);

    assert!(out.flags.is_empty());
    assert_eq!(out.witnesses, Some(vec![]));
    assert_eq!(out.prime_count, 0);
}
