//! Fixed-width observation encoding with per-feature deltas.

use forage_core::{Pose, Quat, Vec3};

/// Features emitted when delivery is disabled, and for the neutral observation.
pub const BASE_FEATURES: usize = 10;
/// Features emitted when delivery is enabled (adds the carrying flag).
pub const DELIVERY_FEATURES: usize = 11;

/// Where the agent is currently heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objective {
    pub point: Vec3,
    pub up_axis: Vec3,
}

impl Objective {
    pub fn new(point: Vec3, up_axis: Vec3) -> Self {
        Self {
            point,
            up_axis: up_axis.normalized(),
        }
    }

    /// Shaping reference: the objective pushed out along its up axis by `0.9 * threshold`, so it
    /// lies just outside a `threshold`-radius sphere around the objective itself.
    pub fn hover_point(&self, threshold: f32) -> Vec3 {
        self.point + self.up_axis * (threshold * 0.9)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObservationDeltas {
    pub distance: f32,
    pub front_align: f32,
    pub up_align: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub features: Vec<f32>,
    pub deltas: ObservationDeltas,
}

impl Observation {
    /// All-zero observation used when there is no objective.
    pub fn neutral() -> Self {
        Self {
            features: vec![0.0; BASE_FEATURES],
            deltas: ObservationDeltas::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn is_neutral(&self) -> bool {
        self.features.len() == BASE_FEATURES && self.features.iter().all(|f| *f == 0.0)
    }
}

/// Encodes the agent's state relative to its objective.
///
/// Keeps the previous distance and alignments so each call can report how they changed.
#[derive(Debug, Clone)]
pub struct ObservationEncoder {
    area_diameter: f32,
    include_carry_flag: bool,
    last_distance: f32,
    last_front_align: f32,
    last_up_align: f32,
}

impl ObservationEncoder {
    pub fn new(area_diameter: f32, include_carry_flag: bool) -> Self {
        Self {
            area_diameter,
            include_carry_flag,
            last_distance: 0.0,
            last_front_align: 0.0,
            last_up_align: 0.0,
        }
    }

    pub fn feature_count(&self) -> usize {
        if self.include_carry_flag {
            DELIVERY_FEATURES
        } else {
            BASE_FEATURES
        }
    }

    pub fn reset(&mut self) {
        self.last_distance = 0.0;
        self.last_front_align = 0.0;
        self.last_up_align = 0.0;
    }

    /// `rotation` is the agent's orientation; `beak` is the pose of its interaction point.
    pub fn encode(
        &mut self,
        rotation: Quat,
        beak: Pose,
        objective: &Objective,
        carrying: bool,
    ) -> Observation {
        let mut features = Vec::with_capacity(self.feature_count());
        features.extend_from_slice(&rotation.normalized().to_array());

        let to_objective = objective.point - beak.position;
        let direction = to_objective.normalized();
        features.extend_from_slice(&direction.to_array());

        // Dotted against the objective's absolute position, not a centred offset.
        let front_align = direction.dot(-objective.point.normalized());
        features.push(front_align);

        let up_align = beak.forward().normalized().dot(-objective.up_axis.normalized());
        features.push(up_align);

        let distance = to_objective.length() / self.area_diameter;
        features.push(distance);

        if self.include_carry_flag {
            features.push(if carrying { 1.0 } else { 0.0 });
        }

        let deltas = ObservationDeltas {
            distance: distance - self.last_distance,
            front_align: front_align - self.last_front_align,
            up_align: up_align - self.last_up_align,
        };
        self.last_distance = distance;
        self.last_front_align = front_align;
        self.last_up_align = up_align;

        Observation { features, deltas }
    }
}
