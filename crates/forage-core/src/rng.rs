//! Deterministic RNG helpers.
//!
//! Spawn placement and receptacle layout draw from these so an episode is replayable from its
//! seed. Not cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f32 {
        let bits = self.next_u32() >> 8;
        bits as f32 / (1u32 << 24) as f32
    }

    /// Uniform in `[lo, hi)`; returns `lo` when the range is empty.
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        lo + (hi - lo) * self.next_unit()
    }

    /// Uniform index in `0..len`; `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() on an empty range");
        (self.next_u64() % (len.max(1) as u64)) as usize
    }

    fn chance(&mut self, probability: f32) -> bool {
        self.next_unit() < probability
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::GOLDEN_GAMMA);
        mix64(self.state)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Independent stream for `(seed, agent, stream)`.
pub fn derive_seed(seed: u64, agent: u64, stream: u64) -> u64 {
    mix64(seed ^ mix64(agent.wrapping_add(SplitMix64::GOLDEN_GAMMA)) ^ mix64(stream))
}

/// Stream ids used by the agent crates.
pub mod streams {
    pub const SPAWN: u64 = 1;
    pub const RECEPTACLES: u64 = 2;
    pub const NODES: u64 = 3;
}
