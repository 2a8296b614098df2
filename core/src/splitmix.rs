//! SplitMix64 seed mixer
//!
//! Expands a single 64-bit seed into as many well-mixed words as needed.
//! Used to fill the xoshiro256** state so that closely spaced seeds
//! (0, 1, 2, ...) still produce unrelated generator states.

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

/// SplitMix64 generator
///
/// # Example
/// ```
/// use xoshiro_core::SplitMix64;
///
/// let mut mixer = SplitMix64::new(0);
/// assert_eq!(mixer.next_u64(), 0xe220a8397b1dcdaf);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the counter by the golden-ratio increment and mix it.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }
}
