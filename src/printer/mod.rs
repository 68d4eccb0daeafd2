// src/printer/mod.rs

pub mod report;
