//! Seedable combined Tausworthe PRNG
//!
//! Four 64-bit LFSR components (L'Ecuyer 1991, table 3, first entry)
//! xor-combined into one stream with period 2^223 - 1.
//!
//! # Components
//!
//! - **state**: register file and non-degeneracy checks
//! - **tausworthe**: one-tick step producing a double's bit pattern in [1, 2)
//! - **seed**: seed-to-register derivation plus warm-up
//! - **extract**: range mapping and lazy seeding
//! - **snapshot**: register export and checked reload
//!
//! Every operation takes the state explicitly; nothing here is global.

mod extract;
mod seed;
mod snapshot;
mod state;
mod tausworthe;

pub use extract::{extract, reseed, RandomArgs};
pub use seed::{seed, WARMUP_STEPS};
pub use snapshot::StateSnapshot;
pub use state::{GeneratorState, LfsrParams, TW223_PARAMS};
pub use tausworthe::{step, EXPONENT_ONE, MANTISSA_MASK};
