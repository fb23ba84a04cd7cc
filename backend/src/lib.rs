//! Math Random Core - Rust Engine
//!
//! Seedable pseudorandom generator behind a script-level `math.random`.
//!
//! # Architecture
//!
//! - **rng**: combined Tausworthe generator (state, step, seed, extract, snapshot)
//! - **host**: per-context `random` / `random_seed` entry points
//! - **config**: serde-loadable construction options
//! - **ffi**: Python bindings (feature `pyo3`)
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same sequence, bit for bit
//! 2. Every seeded register keeps its tracked high bits non-zero
//! 3. Generator state is owned per context, never global

// Module declarations
pub mod config;
pub mod error;
pub mod host;
pub mod rng;

// Re-exports for convenience
pub use config::RandomConfig;
pub use error::RandomError;
pub use host::MathRandom;
pub use rng::{GeneratorState, RandomArgs, StateSnapshot};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn math_random_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random::PyMathRandom>()?;
    Ok(())
}
