//! Error types for the fallible surfaces around the generator
//!
//! The generator core itself cannot fail. Errors only arise from host
//! argument dispatch, snapshot reloads and configuration parsing.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RandomError {
    #[error("random expects at most 2 arguments, got {given}")]
    TooManyArguments { given: usize },

    #[error("Snapshot checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Register {index} is degenerate: {value:#018x} has no tracked high bits set")]
    DegenerateRegister { index: usize, value: u64 },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
