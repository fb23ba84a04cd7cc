//! Host-facing `random` / `random_seed` operations
//!
//! [`MathRandom`] is the per-context owner of one generator. It performs the
//! argument-count dispatch a script host would do before handing off to the
//! generator core.

use log::debug;

use crate::config::RandomConfig;
use crate::error::RandomError;
use crate::rng::{self, GeneratorState, RandomArgs, StateSnapshot};

/// One generator per evaluation context
///
/// # Example
/// ```
/// use math_random_core_rs::MathRandom;
///
/// let mut math = MathRandom::new();
/// math.random_seed(1.0);
///
/// let d = math.random(&[]).unwrap();
/// assert!((0.0..1.0).contains(&d));
///
/// let n = math.random(&[10.0, 20.0]).unwrap();
/// assert!((10.0..=20.0).contains(&n));
///
/// assert!(math.random(&[1.0, 2.0, 3.0]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MathRandom {
    state: GeneratorState,
}

impl MathRandom {
    /// Create a context whose generator is seeded lazily
    pub fn new() -> Self {
        Self {
            state: GeneratorState::new(),
        }
    }

    /// Create a context from configuration, seeding now if a seed is given
    pub fn from_config(config: &RandomConfig) -> Self {
        let mut math = Self::new();
        if let Some(seed) = config.seed {
            debug!("seeding from config");
            math.random_seed(seed);
        }
        math
    }

    /// `random()`, `random(m)` or `random(m, n)`
    ///
    /// More than two arguments are rejected before the generator is touched.
    pub fn random(&mut self, args: &[f64]) -> Result<f64, RandomError> {
        let args = match *args {
            [] => RandomArgs::Unit,
            [r1] => RandomArgs::UpTo(r1),
            [r1, r2] => RandomArgs::Between(r1, r2),
            _ => return Err(RandomError::TooManyArguments { given: args.len() }),
        };
        Ok(rng::extract(&mut self.state, args))
    }

    /// `random_seed(x)`
    pub fn random_seed(&mut self, seed: f64) {
        rng::reseed(&mut self.state, seed);
    }

    /// The owned generator state
    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    /// Register snapshot, `None` until the generator has been seeded
    pub fn snapshot(&self) -> Option<StateSnapshot> {
        self.state.snapshot()
    }

    /// Replace the generator with a validated snapshot
    ///
    /// On error the current state is left untouched.
    pub fn restore(&mut self, snapshot: &StateSnapshot) -> Result<(), RandomError> {
        self.state = GeneratorState::from_snapshot(snapshot)?;
        Ok(())
    }
}
