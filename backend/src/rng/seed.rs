//! Seeding for the combined Tausworthe generator
//!
//! Any `f64` (including NaN and infinities) maps to a valid,
//! non-degenerate register file. A chaotic recurrence `x = x * PI + E`
//! spreads the seed over the four registers; any register that lands
//! below its component's minimum gets that minimum added.

use std::f64::consts::{E, PI};

use log::debug;

use super::state::{GeneratorState, TW223_PARAMS};
use super::tausworthe::step;

/// Outputs discarded after seeding
pub const WARMUP_STEPS: usize = 10;

/// Fill the registers from `seed`, mark the state valid and warm it up
///
/// # Example
/// ```
/// use math_random_core_rs::rng::{self, GeneratorState};
///
/// let mut a = GeneratorState::new();
/// let mut b = GeneratorState::new();
/// rng::seed(&mut a, 7.0);
/// rng::seed(&mut b, 7.0);
/// assert_eq!(a, b);
/// ```
pub fn seed(state: &mut GeneratorState, seed: f64) {
    seed_registers(state, seed);
    for _ in 0..WARMUP_STEPS {
        step(state);
    }
    debug!("seeded generator with {} (registers {:016x?})", seed, state.regs);
}

/// Derive the raw registers from `seed` without the warm-up pass.
pub(crate) fn seed_registers(state: &mut GeneratorState, mut seed: f64) {
    for (reg, params) in state.regs.iter_mut().zip(TW223_PARAMS.iter()) {
        let m = params.min_register();
        // Separate multiply and add; a fused op would change the bit pattern
        seed = seed * PI + E;
        let mut bits = seed.to_bits();
        if bits < m {
            bits += m;
        }
        *reg = bits;
    }
    state.valid = true;
}
