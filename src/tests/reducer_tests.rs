// src/tests/reducer_tests.rs

//! tests for `engine/reducer.rs`

use crate::common::InvariantCounts;
use crate::data::invariant::InvariantCheckResult;
use crate::engine::reducer::{
    check_invariants,
    check_invariants_opt,
    normalize_log,
    CheckOptions,
};
use crate::tests::common::{invariant_literal, synthetic_log};

use ::more_asserts::assert_le;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use ::test_case::test_case;

// normalization

#[test_case("", ""; "empty")]
#[test_case("T0\nT1\n", "T0T1"; "lines joined")]
#[test_case("  T0 \n\tT1\r\n T11", "T0T1T11"; "per line trim")]
#[test_case("a b \n c", "a bc"; "inner whitespace kept")]
fn test_normalize_log(text: &str, expected: &str) {
    assert_eq!(normalize_log(text), expected);
}

// single-invariant literals

#[test_case("T0T1T2T3T4T11", [1, 0, 0]; "invariant 1")]
#[test_case("T0T1T5T6T11", [0, 1, 0]; "invariant 2")]
#[test_case("T0T1T7T8T9T10T11", [0, 0, 1]; "invariant 3")]
fn test_check_invariants_minimal(log: &str, counts: InvariantCounts) {
    let result: InvariantCheckResult = check_invariants(log);
    assert_eq!(result.invariant_counts, counts);
    assert!(result.fully_consumed);
    assert_eq!(result.leftover_transitions, "");
    assert_eq!(result.log_length, log.len());
    assert_eq!(result.leftover_length, 0);
}

// zero-match outcomes are normal results, not errors

#[test]
fn test_check_invariants_empty_input() {
    let result = check_invariants("");
    assert!(result.fully_consumed);
    assert_eq!(result.invariant_counts, [0, 0, 0]);
    assert_eq!(result.log_length, 0);
    assert_eq!(result.leftover_length, 0);
}

#[test]
fn test_check_invariants_no_anchors() {
    let result = check_invariants("hello world");
    assert!(!result.fully_consumed);
    assert_eq!(result.invariant_counts, [0, 0, 0]);
    assert_eq!(result.leftover_transitions, "hello world");
    assert_eq!(result.log_length, "hello world".len());
    assert_eq!(result.leftover_length, "hello world".len());
}

#[test]
fn test_check_invariants_incomplete_invariant() {
    let result = check_invariants("T0T1T2T3");
    assert!(!result.fully_consumed);
    assert_eq!(result.invariant_counts, [0, 0, 0]);
    assert_eq!(result.leftover_transitions, "T0T1T2T3");
}

// concatenation of individually consumable logs

#[test]
fn test_check_invariants_concatenation() {
    let log: String = invariant_literal(1) + &invariant_literal(3) + &invariant_literal(1);
    let result = check_invariants(&log);
    assert!(result.fully_consumed);
    assert_eq!(result.invariant_counts, [2, 0, 1]);
}

#[test]
fn test_check_invariants_multiline() {
    let result = check_invariants(" T0\n T1 \nT5\nT6\nT11 ");
    assert!(result.fully_consumed);
    assert_eq!(result.invariant_counts, [0, 1, 0]);
    assert_eq!(result.log_length, 11);
}

// filler preservation across passes

#[test]
fn test_check_invariants_filler_leftover() {
    let result = check_invariants("T0xT1yT2zT3wT4vT11");
    assert_eq!(result.invariant_counts, [1, 0, 0]);
    assert!(!result.fully_consumed);
    assert_eq!(result.leftover_transitions, "xyzwv");
    assert_eq!(result.leftover_length, 5);
}

#[test]
fn test_check_invariants_anchor_like_filler_survives() {
    // the first consumption preserves the stray T5, T0, T1 fragments;
    // they reappear in the leftover exactly once each
    let result = check_invariants("T0T1T2T5T3T6T4T11T0T1T11");
    assert_eq!(result.invariant_counts, [1, 0, 0]);
    assert!(!result.fully_consumed);
    assert_eq!(result.leftover_transitions, "T5T6T0T1T11");
}

// idempotence on terminal state

#[test]
fn test_check_invariants_idempotent_on_leftover() {
    let first = check_invariants("T0T1T2T5T3T6T4T11T0T1T11");
    let second = check_invariants(&first.leftover_transitions);
    assert_eq!(second.invariant_counts, [0, 0, 0]);
    assert_eq!(second.leftover_transitions, first.leftover_transitions);
}

// dash stripping variant

#[test]
fn test_check_invariants_dashes_kept_by_default() {
    let result = check_invariants("T0-T1-T5-T6-T11");
    assert_eq!(result.invariant_counts, [0, 1, 0]);
    assert!(!result.fully_consumed);
    assert_eq!(result.leftover_transitions, "----");
}

#[test]
fn test_check_invariants_strip_dashes() {
    let options = CheckOptions { strip_dashes: true };
    let result = check_invariants_opt("T0-T1-T5-T6-T11", &options);
    assert_eq!(result.invariant_counts, [0, 1, 0]);
    assert!(result.fully_consumed);
    assert_eq!(result.leftover_transitions, "");
}

// randomized logs: counts exact, lengths monotonic

#[test]
fn test_check_invariants_synthetic_logs() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (log, counts) = synthetic_log(&mut rng, 50);
        let result = check_invariants(&log);
        assert_eq!(result.invariant_counts, counts, "seed {}", seed);
        assert_le!(result.leftover_length, result.log_length);
        // benign filler holds no tokens; all anchors were consumed
        assert!(
            !result.leftover_transitions.contains('T'),
            "seed {}: unconsumed anchors in {:?}",
            seed,
            result.leftover_transitions,
        );
    }
}
