//! Range extraction
//!
//! Maps one raw generator word to the distribution a caller asked for and
//! owns the lazy-seeding policy: an unseeded state is seeded with `0.0` on
//! first use.
//!
//! Range bounds are not validated. Inverted or fractional ranges yield
//! whatever the arithmetic produces.

use log::trace;

use super::seed::seed;
use super::state::GeneratorState;
use super::tausworthe::step;

/// Requested output distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RandomArgs {
    /// Uniform double in [0, 1)
    Unit,
    /// Integer-valued double in [1, max]
    UpTo(f64),
    /// Integer-valued double in [min, max]
    Between(f64, f64),
}

/// Draw one value
///
/// # Example
/// ```
/// use math_random_core_rs::rng::{self, GeneratorState, RandomArgs};
///
/// let mut state = GeneratorState::new();
/// let d = rng::extract(&mut state, RandomArgs::Unit);
/// assert!(state.is_valid());
/// assert!((0.0..1.0).contains(&d));
///
/// let die = rng::extract(&mut state, RandomArgs::UpTo(6.0));
/// assert!((1.0..=6.0).contains(&die));
/// ```
pub fn extract(state: &mut GeneratorState, args: RandomArgs) -> f64 {
    if !state.valid {
        trace!("lazy seeding generator with default seed");
        seed(state, 0.0);
    }

    let d = f64::from_bits(step(state)) - 1.0;
    match args {
        RandomArgs::Unit => d,
        RandomArgs::UpTo(r1) => (d * r1).floor() + 1.0,
        RandomArgs::Between(r1, r2) => (d * (r2 - r1 + 1.0)).floor() + r1,
    }
}

/// Explicitly seed the state, replacing any previous (or lazy) state
pub fn reseed(state: &mut GeneratorState, value: f64) {
    seed(state, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_seed_matches_zero_seed() {
        let mut lazy = GeneratorState::new();
        let mut explicit = GeneratorState::new();
        reseed(&mut explicit, 0.0);

        for _ in 0..20 {
            assert_eq!(
                extract(&mut lazy, RandomArgs::Unit).to_bits(),
                extract(&mut explicit, RandomArgs::Unit).to_bits()
            );
        }
    }

    #[test]
    fn test_first_draws_for_seed_zero() {
        let mut state = GeneratorState::new();
        assert_eq!(extract(&mut state, RandomArgs::Unit), 0.794206292431241);
        assert_eq!(extract(&mut state, RandomArgs::Unit), 0.698852465637164);
    }

    #[test]
    fn test_range_forms_for_seed_zero() {
        let mut state = GeneratorState::new();
        assert_eq!(extract(&mut state, RandomArgs::UpTo(6.0)), 5.0);

        let mut state = GeneratorState::new();
        assert_eq!(extract(&mut state, RandomArgs::Between(10.0, 20.0)), 18.0);
    }

    #[test]
    fn test_inverted_range_is_not_rejected() {
        // d * (1 - 5 + 1) + 5 with d = 0.794...
        let mut state = GeneratorState::new();
        let v = extract(&mut state, RandomArgs::Between(5.0, 1.0));
        assert_eq!(v, (0.794206292431241f64 * -3.0).floor() + 5.0);
        assert_eq!(v, 2.0);
    }
}
