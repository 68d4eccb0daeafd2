// src/data/invariant.rs

//! Passive data for the T-invariant engine: the invariant catalog
//! ([`INVARIANT_CATALOG`]), one located occurrence ([`InvariantMatch`]),
//! and the final run record ([`InvariantCheckResult`]).
//!
//! The catalog is the single source of truth for anchor tokens. The
//! [`locate`] scanner and the report printer both enumerate it; adding a
//! fourth invariant means adding one more [`InvariantTemplate`] entry here
//! and growing [`INVARIANT_COUNT`].
//!
//! [`locate`]: crate::engine::locator::locate
//! [`INVARIANT_COUNT`]: crate::common::INVARIANT_COUNT

use crate::common::{Count, InvariantCounts, InvariantId, LogOffset, LogSz, INVARIANT_COUNT};

use std::fmt;
use std::ops::Range;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// anchor tokens
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Anchor tokens every invariant begins with, in order.
pub const ANCHORS_PREFIX: [&str; 2] = ["T0", "T1"];

/// Anchor token every invariant ends with.
pub const ANCHOR_TERMINAL: &str = "T11";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// InvariantTemplate
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One recognized T-invariant shape: the shared prefix `T0` `T1`, a
/// diverging `middle` run of anchors, and the shared terminal `T11`,
/// with arbitrary filler allowed between consecutive anchors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvariantTemplate {
    /// 1-based identifier; doubles as matching priority (lowest wins).
    pub id: InvariantId,
    /// The anchors between the shared prefix and the shared terminal.
    pub middle: &'static [&'static str],
}

impl InvariantTemplate {
    /// The anchor token the `middle` run begins with; distinct per
    /// template, so it decides which continuation can start at an offset.
    pub const fn opener(&self) -> &'static str {
        self.middle[0]
    }

    /// Full anchor sequence, prefix through terminal.
    pub fn anchors(&self) -> Vec<&'static str> {
        let mut anchors: Vec<&'static str> =
            Vec::with_capacity(ANCHORS_PREFIX.len() + self.middle.len() + 1);
        anchors.extend_from_slice(&ANCHORS_PREFIX);
        anchors.extend_from_slice(self.middle);
        anchors.push(ANCHOR_TERMINAL);

        anchors
    }

    /// Label like `"T0..T1..T5..T6..T11"`, used by the report printer.
    pub fn label(&self) -> String {
        self.anchors().join("..")
    }
}

impl fmt::Display for InvariantTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invariant {} ({})", self.id, self.label())
    }
}

/// The three recognized T-invariants, in matching priority order.
pub const INVARIANT_CATALOG: [InvariantTemplate; INVARIANT_COUNT] = [
    InvariantTemplate {
        id: 1,
        middle: &["T2", "T3", "T4"],
    },
    InvariantTemplate {
        id: 2,
        middle: &["T5", "T6"],
    },
    InvariantTemplate {
        id: 3,
        middle: &["T7", "T8", "T9", "T10"],
    },
];

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// InvariantMatch
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One located invariant occurrence within a transition log.
///
/// Transient; only valid against the exact log string it was located in.
/// `fillers` are the gap ranges between consecutive anchors, in order:
/// after `T0`, after `T1`, between the middle anchors, and before `T11`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvariantMatch {
    /// Offset of the first byte of the matched `T0`.
    pub start: LogOffset,
    /// Offset one past the last byte of the matched `T11`.
    pub end: LogOffset,
    /// Which template matched.
    pub id: InvariantId,
    /// Gap ranges between consecutive anchors; may be empty ranges.
    pub fillers: Vec<Range<LogOffset>>,
}

impl InvariantMatch {
    /// The filler substrings of this match, resolved against `log`.
    pub fn fillers_of<'a>(&self, log: &'a str) -> Vec<&'a str> {
        self.fillers
            .iter()
            .map(|range| &log[range.clone()])
            .collect()
    }

    /// Total length of the preserved filler within the matched span.
    pub fn fillers_len(&self) -> LogSz {
        self.fillers.iter().map(|range| range.len()).sum()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// InvariantCheckResult
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Final record of one reduction run; created once by
/// [`check_invariants`], immutable thereafter, consumed read-only by
/// reporting code.
///
/// [`check_invariants`]: crate::engine::reducer::check_invariants
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvariantCheckResult {
    /// `true` when `leftover_transitions` is empty; the log decomposed
    /// entirely into recognized invariants.
    pub fully_consumed: bool,
    /// Unconsumed content after the reduction loop, whitespace-trimmed.
    pub leftover_transitions: String,
    /// Occurrence counts ordered by `InvariantId` (1, 2, 3).
    pub invariant_counts: InvariantCounts,
    /// Length of the normalized input log.
    pub log_length: LogSz,
    /// Length of `leftover_transitions`.
    pub leftover_length: LogSz,
}

impl InvariantCheckResult {
    /// Sum of all per-invariant counts.
    pub fn total_matched(&self) -> Count {
        self.invariant_counts.iter().sum()
    }
}
