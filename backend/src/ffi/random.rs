//! PyO3 wrapper for MathRandom
//!
//! Exposes one generator context to Python with Lua-style `random` and
//! `randomseed` methods.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::error::RandomError;
use crate::host::MathRandom;
use crate::rng::StateSnapshot;

fn to_py_err(err: RandomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for [`MathRandom`]
///
/// # Example (from Python)
///
/// ```python
/// from math_random_core_rs import MathRandom
///
/// rng = MathRandom()          # seeded lazily with 0.0
/// rng.randomseed(42)
/// print(rng.random())         # [0, 1)
/// print(rng.random(6))        # 1..6
/// print(rng.random(10, 20))   # 10..20
/// ```
#[pyclass(name = "MathRandom")]
pub struct PyMathRandom {
    inner: MathRandom,
}

#[pymethods]
impl PyMathRandom {
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<f64>) -> Self {
        let mut inner = MathRandom::new();
        if let Some(seed) = seed {
            inner.random_seed(seed);
        }
        Self { inner }
    }

    /// Draw a value; accepts 0, 1 or 2 numbers
    ///
    /// Raises TypeError for non-numeric arguments and ValueError for more
    /// than two.
    #[pyo3(signature = (*args))]
    fn random(&mut self, args: &Bound<'_, PyTuple>) -> PyResult<f64> {
        let args: Vec<f64> = args.extract()?;
        self.inner.random(&args).map_err(to_py_err)
    }

    fn randomseed(&mut self, seed: f64) {
        self.inner.random_seed(seed);
    }

    /// Register snapshot as JSON, or None before the first seeding
    fn snapshot_json(&self) -> PyResult<Option<String>> {
        self.inner
            .snapshot()
            .map(|s| s.to_json())
            .transpose()
            .map_err(to_py_err)
    }

    fn restore_json(&mut self, json: &str) -> PyResult<()> {
        let snapshot = StateSnapshot::from_json(json).map_err(to_py_err)?;
        self.inner.restore(&snapshot).map_err(to_py_err)
    }
}
