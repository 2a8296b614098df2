//! Deterministic random number generation
//!
//! Uses the xoshiro256** algorithm, seeded through SplitMix64.
//! The generator state is caller-owned: there is no global or hidden state.

mod xoshiro;

pub use xoshiro::{seed_state, StateError, Xoshiro256StarStar, STATE_SIZE};
