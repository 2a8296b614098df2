//! Checkpoint - Save/Load Generator State
//!
//! Captures a generator's full 256-bit state so a run can be paused and
//! resumed later with the exact same continuation.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator yields the same draws as the
//!   captured one would have
//! - **Integrity**: The stored checksum must match the stored state words
//! - **Validity**: The all-zero state is never restored

use crate::rng::{StateError, Xoshiro256StarStar, STATE_SIZE};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Checkpoint errors
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Checksum mismatch: expected {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("Invalid generator state: {0}")]
    InvalidState(#[from] StateError),
}

/// Serializable generator snapshot
///
/// # Example
/// ```
/// use xoshiro_core::{RngSnapshot, Xoshiro256StarStar};
///
/// let mut rng = Xoshiro256StarStar::new(12345);
/// rng.next_u64();
///
/// let json = RngSnapshot::capture(&rng).to_json().unwrap();
/// let mut restored = RngSnapshot::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(rng.next_u64(), restored.next_u64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngSnapshot {
    /// Raw state words at time of capture
    pub state: [u64; STATE_SIZE],

    /// SHA256 of the state words (little-endian bytes), lowercase hex
    pub checksum: String,
}

impl RngSnapshot {
    /// Capture the current state of `rng`
    pub fn capture(rng: &Xoshiro256StarStar) -> Self {
        let state = rng.state();
        Self {
            state,
            checksum: compute_state_checksum(&state),
        }
    }

    /// Rebuild a generator from this snapshot
    ///
    /// # Errors
    /// - [`CheckpointError::ChecksumMismatch`] if the state words were altered
    /// - [`CheckpointError::InvalidState`] if the state is all zeros
    pub fn restore(&self) -> Result<Xoshiro256StarStar, CheckpointError> {
        let actual = compute_state_checksum(&self.state);
        if actual != self.checksum {
            return Err(CheckpointError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }

        Ok(Xoshiro256StarStar::from_state(self.state)?)
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Xoshiro256StarStar> for RngSnapshot {
    fn from(rng: &Xoshiro256StarStar) -> Self {
        Self::capture(rng)
    }
}

/// Compute deterministic SHA256 hash of state words
pub fn compute_state_checksum(state: &[u64; STATE_SIZE]) -> String {
    let mut hasher = Sha256::new();
    for word in state {
        hasher.update(word.to_le_bytes());
    }
    let result = hasher.finalize();

    format!("{:x}", result)
}
