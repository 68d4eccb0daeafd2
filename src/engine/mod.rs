// src/engine/mod.rs

pub mod locator;
pub mod reducer;
