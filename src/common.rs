// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling, command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// transition log measurements
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Byte offset into a normalized transition log (transition tokens are
/// ASCII so byte offsets and char offsets coincide).
pub type LogOffset = usize;

/// Byte length of a normalized transition log or of its leftover.
pub type LogSz = usize;

/// A count of invariant occurrences.
pub type Count = u64;

/// Identifier of a T-invariant in the catalog; `1`, `2`, or `3`.
pub type InvariantId = u8;

/// How many distinct T-invariants the catalog recognizes.
pub const INVARIANT_COUNT: usize = 3;

/// Per-invariant occurrence counts, ordered by `InvariantId`.
pub type InvariantCounts = [Count; INVARIANT_COUNT];
