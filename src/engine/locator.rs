// src/engine/locator.rs

//! The Match Locator ([`locate`]) and the Consumption Step ([`consume`]).
//!
//! `locate` finds the earliest position in a transition log at which any
//! invariant of the [`INVARIANT_CATALOG`] can be fully satisfied. The
//! search reproduces the observable behavior of a lazy backtracking
//! matcher with ordered alternation: every filler gap is the shortest
//! that still lets the next anchor be found, the three continuations are
//! tried in catalog priority order, and anchors are plain substrings
//! (so `T1` may match inside `T10` or `T11`).
//!
//! `consume` splices a located match out of the log: the anchors are
//! deleted, the filler between them is preserved verbatim so later
//! passes can still see it.
//!
//! [`INVARIANT_CATALOG`]: crate::data::invariant::INVARIANT_CATALOG

use crate::common::LogOffset;
use crate::data::invariant::{
    InvariantMatch,
    InvariantTemplate,
    ANCHORS_PREFIX,
    ANCHOR_TERMINAL,
    INVARIANT_CATALOG,
};

use std::ops::Range;

use ::memchr::memmem;
use ::more_asserts::debug_assert_lt;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// token searching
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Find the next occurrence of literal `token` at or after `from`.
///
/// Plain substring search, no token-boundary awareness; same contract as
/// a regex literal.
pub(crate) fn find_token(log: &str, from: LogOffset, token: &str) -> Option<LogOffset> {
    if from > log.len() {
        return None;
    }

    memmem::find(log[from..].as_bytes(), token.as_bytes()).map(|index| from + index)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Match Locator
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Find the leftmost satisfiable invariant occurrence in `log`.
///
/// Returns `None` when no invariant can be completed anywhere; the log
/// is untouched in that case (this function never mutates).
pub fn locate(log: &str) -> Option<InvariantMatch> {
    defn!("(log len {})", log.len());

    let anchor_t0: &str = ANCHORS_PREFIX[0];
    let mut from: LogOffset = 0;
    while let Some(start) = find_token(log, from, anchor_t0) {
        defo!("try prefix occurrence at {}", start);
        match locate_from(log, start) {
            Some(match_) => {
                defx!("found invariant {} at [{}..{})", match_.id, match_.start, match_.end);
                return Some(match_);
            }
            None => {}
        }
        from = start + 1;
    }
    defx!("no match");

    None
}

/// Try to complete a match whose `T0` sits at `start`.
///
/// Walks `T1` occurrences ascending (shortest prefix gap first). If the
/// continuation cannot be completed from the earliest `T1` it cannot be
/// completed from a later one either, but walking them keeps the trial
/// order identical to the backtracking matcher this engine replaces.
fn locate_from(log: &str, start: LogOffset) -> Option<InvariantMatch> {
    let after_t0: LogOffset = start + ANCHORS_PREFIX[0].len();
    let anchor_t1: &str = ANCHORS_PREFIX[1];

    let mut t1_from: LogOffset = after_t0;
    while let Some(at_t1) = find_token(log, t1_from, anchor_t1) {
        let after_t1: LogOffset = at_t1 + anchor_t1.len();
        if let Some(match_) = locate_continuation(log, start, after_t0, at_t1, after_t1) {
            return Some(match_);
        }
        t1_from = at_t1 + 1;
    }

    None
}

/// Try the three continuations after a matched prefix, in lazy order:
/// candidate openers (`T2`/`T5`/`T7`) by ascending position, lowest
/// template id first at equal positions (unreachable; openers are
/// distinct tokens so only one template can start at a given offset).
fn locate_continuation(
    log: &str,
    start: LogOffset,
    after_t0: LogOffset,
    at_t1: LogOffset,
    after_t1: LogOffset,
) -> Option<InvariantMatch> {
    let mut opener_from: LogOffset = after_t1;
    loop {
        let mut best: Option<(LogOffset, &InvariantTemplate)> = None;
        for template in INVARIANT_CATALOG.iter() {
            let at: LogOffset = match find_token(log, opener_from, template.opener()) {
                Some(at) => at,
                None => continue,
            };
            best = match best {
                Some((at_best, _)) if at_best <= at => best,
                _ => Some((at, template)),
            };
        }
        // no continuation opener remains anywhere ahead
        let (at_opener, template) = best?;
        defo!("try invariant {} opener {} at {}", template.id, template.opener(), at_opener);

        let mut fillers: Vec<Range<LogOffset>> = Vec::with_capacity(template.middle.len() + 2);
        fillers.push(after_t0..at_t1);
        fillers.push(after_t1..at_opener);
        match complete_template(log, at_opener, template, &mut fillers) {
            Some(end) => {
                return Some(InvariantMatch {
                    start,
                    end,
                    id: template.id,
                    fillers,
                });
            }
            None => {}
        }
        opener_from = at_opener + 1;
    }
}

/// Chain the remaining `middle` anchors from the opener at `at_opener`,
/// then the terminal `T11`, each at its first occurrence. Pushes the gap
/// ranges onto `fillers` and returns the offset one past the terminal.
fn complete_template(
    log: &str,
    at_opener: LogOffset,
    template: &InvariantTemplate,
    fillers: &mut Vec<Range<LogOffset>>,
) -> Option<LogOffset> {
    let mut pos: LogOffset = at_opener + template.opener().len();
    for anchor in template.middle[1..].iter() {
        let at: LogOffset = find_token(log, pos, anchor)?;
        fillers.push(pos..at);
        pos = at + anchor.len();
    }
    let at_terminal: LogOffset = find_token(log, pos, ANCHOR_TERMINAL)?;
    fillers.push(pos..at_terminal);

    Some(at_terminal + ANCHOR_TERMINAL.len())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Consumption Step
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Splice one located match out of `log`: everything before the match,
/// then the preserved filler gaps in order, then everything after.
///
/// Pure transformation; always strictly shorter than `log` because every
/// invariant deletes at least its prefix and terminal anchors.
pub fn consume(log: &str, match_: &InvariantMatch) -> String {
    defñ!("(log len {}, invariant {} at [{}..{}))", log.len(), match_.id, match_.start, match_.end);

    let matched_len: usize = match_.end - match_.start;
    let mut shorter: String = String::with_capacity(log.len() - matched_len + match_.fillers_len());
    shorter.push_str(&log[..match_.start]);
    for gap in match_.fillers.iter() {
        shorter.push_str(&log[gap.clone()]);
    }
    shorter.push_str(&log[match_.end..]);
    debug_assert_lt!(shorter.len(), log.len());

    shorter
}
