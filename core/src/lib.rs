//! Xoshiro Core - Deterministic PRNG
//!
//! xoshiro256** generator with SplitMix64 seeding and jump-based stream
//! partitioning for parallel work.
//!
//! # Architecture
//!
//! - **splitmix**: SplitMix64 seed mixer
//! - **rng**: The xoshiro256** generator (draws, ranged ints, doubles, jumps)
//! - **streams**: Non-overlapping parallel streams derived by jumping
//! - **checkpoint**: Save/restore of generator state
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (same seed, same sequence)
//! 2. Generator state is caller-owned; there is no global state
//! 3. The state is never all zeros
//!
//! Not suitable for cryptographic use.

// Module declarations
pub mod checkpoint;
pub mod rng;
pub mod splitmix;
pub mod streams;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, RngSnapshot};
pub use rng::{StateError, Xoshiro256StarStar, STATE_SIZE};
pub use splitmix::SplitMix64;
pub use streams::{split_chains, split_streams, JumpStreams, LongJumpChains};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xoshiro_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    Ok(())
}
