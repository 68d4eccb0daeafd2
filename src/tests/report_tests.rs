// src/tests/report_tests.rs

//! tests for `printer/report.rs` helper functions

use crate::printer::report::{bar_cells, count_tokens, leftover_preview};

use ::test_case::test_case;

#[test_case(0, 0, 40, 0; "no total")]
#[test_case(0, 3, 40, 0; "zero count")]
#[test_case(3, 3, 40, 40; "full bar")]
#[test_case(1, 3, 40, 13; "third rounds down")]
#[test_case(2, 3, 40, 27; "two thirds rounds up")]
#[test_case(1, 1, 0, 0; "zero width")]
fn test_bar_cells(count: u64, total: u64, width: usize, expected: usize) {
    assert_eq!(bar_cells(count, total, width), expected);
}

#[test_case("", 0; "empty")]
#[test_case("T", 0; "bare T")]
#[test_case("xTy", 0; "no digits")]
#[test_case("T0", 1; "one token")]
#[test_case("T0xT11 T5", 3; "three tokens")]
#[test_case("T123T4", 2; "long digits")]
fn test_count_tokens(text: &str, expected: usize) {
    assert_eq!(count_tokens(text), expected);
}

#[test]
fn test_leftover_preview_short_passthrough() {
    assert_eq!(leftover_preview("abc", 10), "abc");
}

#[test]
fn test_leftover_preview_zero_limit() {
    assert_eq!(leftover_preview("abc", 0), "");
}

#[test]
fn test_leftover_preview_truncates() {
    let leftover: String = "a".repeat(30);
    let preview: String = leftover_preview(&leftover, 10);
    assert_eq!(preview, format!("{} … {}", "a".repeat(5), "a".repeat(5)));
}

#[test]
fn test_leftover_preview_at_limit() {
    let leftover: String = "b".repeat(10);
    assert_eq!(leftover_preview(&leftover, 10), leftover);
}
