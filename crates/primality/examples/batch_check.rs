//! Comprehensive Primality Checking Examples
//!
//! This example demonstrates various checking scenarios:
//! - Basic batch checking with minimal configuration
//! - Witness collection for composite candidates
//! - Range scans with diagnostics
//! - Strategy comparison
//! - Compile-time verdicts
//!
//! Each scenario includes the expected output as comments.

use primality::prelude::*;

fn main() -> Result<(), PrimalityError> {
    println!("{}", "=".repeat(80));
    println!("Primality Checking - Comprehensive Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_basic_check()?;
    example_2_witnesses()?;
    example_3_range_scan()?;
    example_4_strategy_comparison()?;
    example_5_const_verdicts();

    Ok(())
}

/// Example 1: Basic Batch Check
/// Demonstrates the simplest usage with minimal configuration
fn example_1_basic_check() -> Result<(), PrimalityError> {
    println!("Example 1: Basic Batch Check");
    println!("{}", "-".repeat(80));

    let candidates = [2u64, 9, 97, 100];

    let checker = Primality::new().adapter(Batch).build()?;
    let report = checker.check(&candidates)?;

    println!("{}", report);

    /* Expected Output:
    Summary:
      Candidates: 4
      Primes:     2
      Strategy:   SqrtAscent

    Verdicts:
         Candidate    Prime
    -----------------------
                 2      yes
                 9       no
                97      yes
               100       no
    */

    println!();
    Ok(())
}

/// Example 2: Witness Collection
/// Shows the smallest-divisor evidence attached to composite verdicts
fn example_2_witnesses() -> Result<(), PrimalityError> {
    println!("Example 2: Witness Collection");
    println!("{}", "-".repeat(80));

    let candidates = [4u64, 91, 97, 121];

    let checker = Primality::new()
        .collect_witnesses()
        .adapter(Batch)
        .build()?;
    let report = checker.check(&candidates)?;

    if let Some(witnesses) = &report.witnesses {
        for (i, witness) in witnesses.iter().enumerate() {
            match witness {
                Some(d) => println!("  {} = {} * {}", candidates[i], d, candidates[i] / d),
                None => println!("  {} is prime", candidates[i]),
            }
        }
    }

    /* Expected Output:
      4 = 2 * 2
      91 = 7 * 13
      97 is prime
      121 = 11 * 11
    */

    println!();
    Ok(())
}

/// Example 3: Range Scan with Diagnostics
/// Scans an inclusive interval and summarizes prime density
fn example_3_range_scan() -> Result<(), PrimalityError> {
    println!("Example 3: Range Scan with Diagnostics");
    println!("{}", "-".repeat(80));

    let scan = Primality::new()
        .range(1u32, 100)
        .return_diagnostics()
        .adapter(Range)
        .build()?
        .scan()?;

    println!("{}", scan);

    /* Expected Output:
    Summary:
      Range:    [1, 100]
      Scanned:  100
      Primes:   25
      Strategy: SqrtAscent

    Primality Diagnostics:
      Scanned:      100
      Primes:       25
      Non-primes:   75
      Density:      0.2500
      Smallest:     2
      Largest:      97

    Primes Found:
                 2
                 3
                 ...
                97
    */

    println!();
    Ok(())
}

/// Example 4: Strategy Comparison
/// Both strategies implement the same contract at different costs
fn example_4_strategy_comparison() -> Result<(), PrimalityError> {
    println!("Example 4: Strategy Comparison");
    println!("{}", "-".repeat(80));

    let candidates = [101u64, 1_000, 4_999];

    for strategy in [HalfDescent, SqrtAscent] {
        let report = Primality::new()
            .strategy(strategy)
            .adapter(Batch)
            .build()?
            .check(&candidates)?;

        print!("  {:?} verdicts: [", strategy);
        for (i, &flag) in report.is_prime.iter().enumerate() {
            if i > 0 {
                print!(", ");
            }
            print!("{}", flag);
        }
        println!("]");
    }

    /* Expected Output:
      HalfDescent verdicts: [true, false, true]
      SqrtAscent verdicts: [true, false, true]
    */

    println!();
    Ok(())
}

/// Example 5: Compile-Time Verdicts
/// The oracle is const-evaluable; verdicts can fold into constants
fn example_5_const_verdicts() {
    println!("Example 5: Compile-Time Verdicts");
    println!("{}", "-".repeat(80));

    const MERSENNE_31: bool = is_prime(2_147_483_647);
    const WITNESS_OF_NINE: Option<u64> = classify(9).witness();

    println!("  2^31 - 1 prime at compile time: {}", MERSENNE_31);
    println!("  Witness of 9 at compile time:   {:?}", WITNESS_OF_NINE);

    /* Expected Output:
      2^31 - 1 prime at compile time: true
      Witness of 9 at compile time:   Some(3)
    */

    println!();
}
