//! Threshold-gated reward shaping and event rewards.

use forage_core::math::clamp01;
use forage_core::Vec3;

use crate::config::RewardConfig;
use crate::observation::{Objective, ObservationDeltas};

#[derive(Debug, Clone)]
pub struct RewardShaper {
    config: RewardConfig,
}

impl RewardShaper {
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Per-step shaping.
    ///
    /// Outside `threshold` of the hover point only the distance delta counts; inside it only the
    /// alignment deltas do.
    pub fn shape(
        &self,
        deltas: &ObservationDeltas,
        beak_position: Vec3,
        hover_point: Vec3,
        threshold: f32,
    ) -> f32 {
        if beak_position.distance(hover_point) > threshold {
            -deltas.distance * self.config.distance_scale
        } else {
            deltas.front_align * self.config.alignment_scale
                + deltas.up_align * self.config.alignment_scale
        }
    }

    /// [`shape`](Self::shape) with the configured proximity threshold.
    pub fn shape_for(
        &self,
        deltas: &ObservationDeltas,
        beak_position: Vec3,
        objective: &Objective,
    ) -> f32 {
        let threshold = self.config.proximity_threshold;
        self.shape(deltas, beak_position, objective.hover_point(threshold), threshold)
    }

    pub fn extraction(&self, gained: f32, agent_forward: Vec3, node_up: Vec3) -> f32 {
        let facing = agent_forward.normalized().dot(-node_up.normalized());
        gained * self.config.extraction_scale + self.config.alignment_bonus * clamp01(facing)
    }

    pub fn delivery(&self) -> f32 {
        self.config.delivery_reward
    }

    pub fn boundary(&self) -> f32 {
        self.config.boundary_penalty
    }
}
