//! Parallel stream partitioning
//!
//! Derives independent generators from one seeded root using
//! [`Xoshiro256StarStar::jump`] and [`Xoshiro256StarStar::long_jump`].
//! Streams produced by consecutive jumps never overlap for the first 2^128
//! draws each, so they can be handed to separate threads without any
//! synchronization.
//!
//! # Example
//! ```
//! use xoshiro_core::{split_streams, Xoshiro256StarStar};
//!
//! let root = Xoshiro256StarStar::new(2024);
//! let mut workers = split_streams(root, 4);
//! assert_eq!(workers.len(), 4);
//! assert_eq!(workers[0], root);
//! assert_ne!(workers[1].next_u64(), workers[2].next_u64());
//! ```

use crate::rng::Xoshiro256StarStar;

/// Iterator over generators spaced 2^128 draws apart
///
/// The first item is the root itself; each following item is the previous
/// one advanced by one `jump`.
#[derive(Debug, Clone)]
pub struct JumpStreams {
    current: Xoshiro256StarStar,
}

impl JumpStreams {
    pub fn new(root: Xoshiro256StarStar) -> Self {
        Self { current: root }
    }
}

impl Iterator for JumpStreams {
    type Item = Xoshiro256StarStar;

    fn next(&mut self) -> Option<Self::Item> {
        let stream = self.current;
        self.current.jump();
        Some(stream)
    }
}

/// Iterator over generators spaced 2^192 draws apart
///
/// Each item is the start of a chain that can itself be split with
/// [`JumpStreams`] into 2^64 non-overlapping streams.
#[derive(Debug, Clone)]
pub struct LongJumpChains {
    current: Xoshiro256StarStar,
}

impl LongJumpChains {
    pub fn new(root: Xoshiro256StarStar) -> Self {
        Self { current: root }
    }
}

impl Iterator for LongJumpChains {
    type Item = Xoshiro256StarStar;

    fn next(&mut self) -> Option<Self::Item> {
        let chain = self.current;
        self.current.long_jump();
        Some(chain)
    }
}

/// Split `root` into `count` non-overlapping streams
///
/// Stream `i` is `root` jumped `i` times. `count == 0` returns an empty vec.
pub fn split_streams(root: Xoshiro256StarStar, count: usize) -> Vec<Xoshiro256StarStar> {
    JumpStreams::new(root).take(count).collect()
}

/// Split `root` into `count` long-jump chain starting points
pub fn split_chains(root: Xoshiro256StarStar, count: usize) -> Vec<Xoshiro256StarStar> {
    LongJumpChains::new(root).take(count).collect()
}
