use crate::{rng, AgentId, SplitMix64};

/// Per-step timing shared by every agent stepped in the same tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32, seed: u64) -> Self {
        Self {
            tick,
            dt_seconds,
            seed,
        }
    }

    /// The following tick with the same step size and seed.
    pub fn next(self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            ..self
        }
    }

    pub fn rng_for_agent(&self, agent: AgentId, stream: u64) -> SplitMix64 {
        SplitMix64::new(rng::derive_seed(self.seed, agent.stable_id(), stream))
    }
}
