// src/tests/invariant_tests.rs

//! tests for `data/invariant.rs`

use crate::common::InvariantId;
use crate::data::invariant::{
    InvariantMatch,
    ANCHORS_PREFIX,
    ANCHOR_TERMINAL,
    INVARIANT_CATALOG,
};

use ::test_case::test_case;

#[test]
fn test_catalog_priority_order() {
    for (index, template) in INVARIANT_CATALOG.iter().enumerate() {
        assert_eq!(template.id as usize, index + 1);
    }
}

#[test]
fn test_catalog_openers_distinct() {
    let openers: Vec<&str> = INVARIANT_CATALOG
        .iter()
        .map(|template| template.opener())
        .collect();
    for (index, opener) in openers.iter().enumerate() {
        assert!(
            !openers[index + 1..].contains(opener),
            "duplicate continuation opener {:?}",
            opener,
        );
    }
}

#[test_case(1, &["T0", "T1", "T2", "T3", "T4", "T11"]; "invariant 1")]
#[test_case(2, &["T0", "T1", "T5", "T6", "T11"]; "invariant 2")]
#[test_case(3, &["T0", "T1", "T7", "T8", "T9", "T10", "T11"]; "invariant 3")]
fn test_anchors(id: InvariantId, expected: &[&str]) {
    let template = &INVARIANT_CATALOG[(id - 1) as usize];
    assert_eq!(template.anchors(), expected);
    assert_eq!(template.anchors().first(), Some(&ANCHORS_PREFIX[0]));
    assert_eq!(template.anchors().last(), Some(&ANCHOR_TERMINAL));
}

#[test_case(2, "T0..T1..T5..T6..T11")]
#[test_case(3, "T0..T1..T7..T8..T9..T10..T11")]
fn test_label(id: InvariantId, expected: &str) {
    assert_eq!(INVARIANT_CATALOG[(id - 1) as usize].label(), expected);
}

#[test]
fn test_match_fillers_of() {
    // a match over "T0xT1yyT5T6T11" located by hand
    let match_ = InvariantMatch {
        start: 0,
        end: 14,
        id: 2,
        fillers: vec![2..3, 5..7, 9..9, 11..11],
    };
    let log = "T0xT1yyT5T6T11";
    assert_eq!(match_.fillers_of(log), vec!["x", "yy", "", ""]);
    assert_eq!(match_.fillers_len(), 3);
}
