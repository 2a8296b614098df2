//! PyO3 wrapper for the xoshiro256** generator
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::prelude::*;

use crate::checkpoint::RngSnapshot;
use crate::rng::{Xoshiro256StarStar, STATE_SIZE};

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from xoshiro_core import Generator
///
/// rng = Generator(0xDEADBEEF)
/// rng.next()
/// print(rng.next_int(0, 1000), round(rng.next_double(), 5))  # 792 0.3319
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: Xoshiro256StarStar,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator seeded through SplitMix64
    #[new]
    fn new(seed: u64) -> Self {
        PyGenerator {
            inner: Xoshiro256StarStar::new(seed),
        }
    }

    /// Restore a generator from four state words
    ///
    /// # Errors
    ///
    /// Raises ValueError for the all-zero state
    #[staticmethod]
    fn from_state(state: [u64; STATE_SIZE]) -> PyResult<Self> {
        let inner = Xoshiro256StarStar::from_state(state)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(PyGenerator { inner })
    }

    /// Restore a generator from a JSON checkpoint
    #[staticmethod]
    fn from_checkpoint(json: &str) -> PyResult<Self> {
        let inner = RngSnapshot::from_json(json)
            .and_then(|snapshot| snapshot.restore())
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(PyGenerator { inner })
    }

    /// Next raw 64-bit value
    fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Next double in [0.0, 1.0)
    fn next_double(&mut self) -> f64 {
        self.inner.next_f64()
    }

    /// Next int in [from, from + |to - from|); returns `from` without drawing
    /// when both bounds are equal
    fn next_int(&mut self, from: i32, to: i32) -> i32 {
        self.inner.next_int(from, to)
    }

    fn jump(&mut self) {
        self.inner.jump();
    }

    fn long_jump(&mut self) {
        self.inner.long_jump();
    }

    /// Current state words
    fn state(&self) -> Vec<u64> {
        self.inner.state().to_vec()
    }

    /// Serialize the current state as a JSON checkpoint
    fn checkpoint(&self) -> PyResult<String> {
        RngSnapshot::capture(&self.inner)
            .to_json()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }
}
