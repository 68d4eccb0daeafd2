// src/data/mod.rs

pub mod invariant;
