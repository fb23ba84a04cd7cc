//! Snapshot - Save/Restore Generator Registers
//!
//! Exposes the raw register file for debugging and replay. A snapshot can
//! only be loaded back if it passes the same checks a freshly seeded state
//! would.
//!
//! # Critical Invariants
//!
//! - **Continuity**: a restored state continues the exact sequence of the
//!   state it was taken from (no warm-up on restore)
//! - **Integrity**: the checksum must match the registers
//! - **Non-degeneracy**: every register keeps its tracked high bits non-zero

use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::state::{first_degenerate, GeneratorState};
use crate::error::RandomError;

/// Register file snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Raw LFSR registers
    pub registers: [u64; 4],

    /// SHA256 of the registers (little-endian bytes), lowercase hex
    pub checksum: String,
}

impl StateSnapshot {
    /// Build a snapshot with a freshly computed checksum
    pub fn new(registers: [u64; 4]) -> Self {
        Self {
            registers,
            checksum: compute_checksum(&registers),
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, RandomError> {
        serde_json::to_string(self)
            .map_err(|e| RandomError::InvalidSnapshot(format!("Serialization failed: {}", e)))
    }

    /// Parse from JSON
    ///
    /// Only checks the shape; [`validate`](Self::validate) runs on restore.
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        serde_json::from_str(json)
            .map_err(|e| RandomError::InvalidSnapshot(format!("Deserialization failed: {}", e)))
    }

    /// Check checksum, then non-degeneracy
    pub fn validate(&self) -> Result<(), RandomError> {
        let actual = compute_checksum(&self.registers);
        if actual != self.checksum {
            return Err(RandomError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }

        if let Some(index) = first_degenerate(&self.registers) {
            return Err(RandomError::DegenerateRegister {
                index,
                value: self.registers[index],
            });
        }

        Ok(())
    }
}

impl GeneratorState {
    /// Rebuild a valid state from a snapshot
    ///
    /// # Example
    /// ```
    /// use math_random_core_rs::rng::{self, GeneratorState};
    ///
    /// let mut state = GeneratorState::new();
    /// rng::seed(&mut state, 5.0);
    /// let snapshot = state.snapshot().unwrap();
    ///
    /// let mut restored = GeneratorState::from_snapshot(&snapshot).unwrap();
    /// assert_eq!(rng::step(&mut state), rng::step(&mut restored));
    /// ```
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Result<Self, RandomError> {
        snapshot.validate()?;
        debug!("restored generator registers {:016x?}", snapshot.registers);
        Ok(Self {
            regs: snapshot.registers,
            valid: true,
        })
    }
}

fn compute_checksum(registers: &[u64; 4]) -> String {
    let mut hasher = Sha256::new();
    for reg in registers {
        hasher.update(reg.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
