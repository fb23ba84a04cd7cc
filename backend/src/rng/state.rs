//! Generator state for the combined Tausworthe PRNG
//!
//! Four 64-bit LFSR registers plus a validity flag. The registers are
//! meaningless until the state has been seeded.
//!
//! # Critical Invariants
//!
//! - **Non-degeneracy**: once valid, the high-order `k` bits of every
//!   register are not all zero (see [`TW223_PARAMS`])
//! - **Single owner**: one state per logical generator, never shared

use super::snapshot::StateSnapshot;

/// Parameters of one LFSR component: register width `k`, feedback shift `q`
/// and output shift `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfsrParams {
    pub k: u32,
    pub q: u32,
    pub s: u32,
}

impl LfsrParams {
    /// Smallest register value whose top `k` bits are not all zero.
    pub const fn min_register(&self) -> u64 {
        1u64 << (64 - self.k)
    }

    /// Mask selecting the top `k` bits of a register.
    pub const fn high_mask(&self) -> u64 {
        !0u64 << (64 - self.k)
    }
}

/// L'Ecuyer 1991, table 3, first entry (L=64, J=4, k=223).
pub const TW223_PARAMS: [LfsrParams; 4] = [
    LfsrParams { k: 63, q: 31, s: 18 },
    LfsrParams { k: 58, q: 19, s: 28 },
    LfsrParams { k: 55, q: 24, s: 7 },
    LfsrParams { k: 47, q: 21, s: 8 },
];

/// Register file of the combined generator
///
/// Created invalid; becomes valid through [`seed`](super::seed) or a
/// checked snapshot restore.
///
/// # Example
/// ```
/// use math_random_core_rs::rng::{self, GeneratorState};
///
/// let mut state = GeneratorState::new();
/// assert!(!state.is_valid());
///
/// rng::seed(&mut state, 42.0);
/// assert!(state.is_valid());
/// assert!(state.is_non_degenerate());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    pub(crate) regs: [u64; 4],
    pub(crate) valid: bool,
}

impl GeneratorState {
    /// Create an unseeded state
    pub const fn new() -> Self {
        Self {
            regs: [0; 4],
            valid: false,
        }
    }

    /// Whether the state has been seeded (or restored)
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Raw register values
    ///
    /// Unspecified while the state is invalid.
    pub fn registers(&self) -> [u64; 4] {
        self.regs
    }

    /// Check the non-degeneracy invariant on every register
    pub fn is_non_degenerate(&self) -> bool {
        first_degenerate(&self.regs).is_none()
    }

    /// Capture the registers for debugging or replay
    ///
    /// Returns `None` while the state is invalid.
    pub fn snapshot(&self) -> Option<StateSnapshot> {
        self.valid.then(|| StateSnapshot::new(self.regs))
    }
}

/// Index of the first register whose tracked high bits are all zero.
pub(crate) fn first_degenerate(registers: &[u64; 4]) -> Option<usize> {
    registers
        .iter()
        .zip(TW223_PARAMS.iter())
        .position(|(&reg, params)| reg & params.high_mask() == 0)
}
