//! MindMatch: library crate for the therapist recommendation platform.
//!
//! The interesting part lives in [`matching`]; `config`, `error`, and
//! `telemetry` carry the service plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
