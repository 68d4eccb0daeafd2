// src/tests/mod.rs

//! Tests for _ticlib_.
//!
//! Tests are placed at `src/tests/`, inside the `ticlib`. This is a
//! reasonable trade-off of separation and crate-internal access.

pub mod common;
pub mod invariant_tests;
pub mod reducer_tests;
pub mod report_tests;
