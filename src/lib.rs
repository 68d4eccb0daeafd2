// src/lib.rs

pub mod common;
pub mod data;
pub mod debug;
pub mod engine;
pub mod printer;
#[cfg(test)]
pub mod tests;
