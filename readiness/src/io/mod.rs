//! I/O and nondeterminism for the assessment: config, bank files, RNG, rendering.

pub mod bank_store;
pub mod config;
pub mod noise;
pub mod report;
