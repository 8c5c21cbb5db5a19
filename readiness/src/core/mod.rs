//! Deterministic, pure logic for the assessment.
//!
//! Core modules must be free of I/O side effects. Randomness enters only
//! through the [`scoring::NoiseSource`] seam, so tests can script it.

pub mod bank;
pub mod dimensions;
pub mod error;
pub mod flow;
pub mod invariants;
pub mod progress;
pub mod question;
pub mod scoring;
pub mod types;
