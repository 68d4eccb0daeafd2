// src/engine/reducer.rs

//! The Reduction Loop: normalize a raw transition log, then repeatedly
//! [`locate`] and [`consume`] invariant occurrences until none remain,
//! counting each invariant, and snapshot the outcome as an
//! [`InvariantCheckResult`].
//!
//! "No invariants found" is a normal outcome, not an error; this module
//! has no error type.

use crate::common::{InvariantCounts, LogSz, INVARIANT_COUNT};
use crate::data::invariant::InvariantCheckResult;
use crate::engine::locator::{consume, locate};

use ::more_asserts::debug_assert_lt;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// normalization
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Flatten a raw multi-line log into the newline-free stream the engine
/// operates on: each line trimmed of leading/trailing whitespace, all
/// lines concatenated without separators.
pub fn normalize_log(text: &str) -> String {
    let mut flat: String = String::with_capacity(text.len());
    for line in text.lines() {
        flat.push_str(line.trim());
    }

    flat
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Reduction Loop
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Tunables for one reduction run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CheckOptions {
    /// Strip all `-` characters from the remaining stream after the
    /// reduction loop, before the whitespace trim. Historical variant
    /// behavior; off in the canonical engine.
    pub strip_dashes: bool,
}

/// [`check_invariants_opt`] with default [`CheckOptions`].
pub fn check_invariants(text: &str) -> InvariantCheckResult {
    check_invariants_opt(text, &CheckOptions::default())
}

/// Normalize `text`, then repeatedly remove the leftmost invariant
/// occurrence until none remains, counting each invariant.
///
/// Terminates in at most `log_length` iterations: every consumption
/// strictly shortens the stream (each invariant deletes at least its
/// prefix and terminal anchors).
pub fn check_invariants_opt(
    text: &str,
    options: &CheckOptions,
) -> InvariantCheckResult {
    defn!("(text len {}, {:?})", text.len(), options);

    let mut log: String = normalize_log(text);
    let log_length: LogSz = log.len();
    defo!("normalized len {}", log_length);

    let mut invariant_counts: InvariantCounts = [0; INVARIANT_COUNT];
    while let Some(match_) = locate(&log) {
        let shorter: String = consume(&log, &match_);
        debug_assert_lt!(shorter.len(), log.len());
        invariant_counts[(match_.id - 1) as usize] += 1;
        log = shorter;
    }
    defo!("counts {:?}, remaining len {}", invariant_counts, log.len());

    if options.strip_dashes {
        log.retain(|c| c != '-');
    }
    let leftover_transitions: String = log.trim().to_string();
    let leftover_length: LogSz = leftover_transitions.len();
    let fully_consumed: bool = leftover_transitions.is_empty();
    defx!("fully_consumed {}, leftover len {}", fully_consumed, leftover_length);

    InvariantCheckResult {
        fully_consumed,
        leftover_transitions,
        invariant_counts,
        log_length,
        leftover_length,
    }
}
