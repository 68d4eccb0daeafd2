// src/tests/common.rs

//! Shared helpers for _ticlib_ tests: transition-log builders.

use crate::common::{InvariantCounts, InvariantId, INVARIANT_COUNT};
use crate::data::invariant::INVARIANT_CATALOG;

use ::rand::Rng;

/// Minimal literal for one invariant; anchors only, no filler.
/// e.g. `invariant_literal(2)` is `"T0T1T5T6T11"`.
pub fn invariant_literal(id: InvariantId) -> String {
    invariant_with_filler(id, "")
}

/// One invariant with `filler` between every pair of consecutive anchors.
pub fn invariant_with_filler(
    id: InvariantId,
    filler: &str,
) -> String {
    let template = &INVARIANT_CATALOG[(id - 1) as usize];
    assert_eq!(template.id, id, "catalog out of priority order");

    template.anchors().join(filler)
}

/// Characters safe to use as filler; none can combine into a `T<digits>`
/// token or an anchor fragment.
const BENIGN_FILLER_CHARS: &[u8] = b"abcdefgh _-";

/// Random filler of length 0 to 7 that cannot interfere with anchors.
pub fn random_benign_filler(rng: &mut impl Rng) -> String {
    let len: usize = rng.random_range(0..8);
    (0..len)
        .map(|_| {
            let at: usize = rng.random_range(0..BENIGN_FILLER_CHARS.len());
            BENIGN_FILLER_CHARS[at] as char
        })
        .collect()
}

/// Build a log of `invariants` randomly-chosen invariants, each with
/// random benign filler between anchors, and return it with the
/// expected per-invariant counts. Every invariant is consumable; the
/// leftover of reducing such a log is exactly the preserved filler.
pub fn synthetic_log(
    rng: &mut impl Rng,
    invariants: usize,
) -> (String, InvariantCounts) {
    let mut log = String::new();
    let mut counts: InvariantCounts = [0; INVARIANT_COUNT];
    for _ in 0..invariants {
        let index: usize = rng.random_range(0..INVARIANT_COUNT);
        let id: InvariantId = INVARIANT_CATALOG[index].id;
        let filler: String = random_benign_filler(rng);
        log.push_str(&invariant_with_filler(id, &filler));
        counts[index] += 1;
    }

    (log, counts)
}
