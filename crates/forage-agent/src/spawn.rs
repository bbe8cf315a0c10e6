//! Episode-start placement of the agent and of receptacles.

use forage_core::math::look_angles;
use forage_core::{
    Category, DeterministicRng, Pose, Quat, Receptacle, ReceptacleId, ResourceNode, Vec3,
};

use crate::config::{EnvironmentConfig, SpawnConfig};
use crate::world::SpatialQuery;
use crate::{ForageError, Result};

/// A candidate agent placement; angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPose {
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
}

impl SpawnPose {
    pub fn rotation(&self) -> Quat {
        Quat::from_pitch_yaw_degrees(self.pitch, self.yaw)
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation())
    }
}

/// Finds a collision-free agent pose.
#[derive(Debug, Clone)]
pub struct SpawnPlanner {
    config: SpawnConfig,
    center: Vec3,
}

impl SpawnPlanner {
    pub fn new(config: SpawnConfig, center: Vec3) -> Self {
        Self { config, center }
    }

    /// Try up to `attempts` candidates and return the first whose clearance sphere is free.
    ///
    /// `in_front` places candidates a short way out along a random node's up axis, facing it.
    /// With no nodes the free-flight placement is used instead.
    pub fn find_safe_pose(
        &self,
        nodes: &[ResourceNode],
        in_front: bool,
        rng: &mut dyn DeterministicRng,
        query: &dyn SpatialQuery,
    ) -> Result<SpawnPose> {
        let in_front = in_front && !nodes.is_empty();
        for _ in 0..self.config.attempts {
            let candidate = if in_front {
                self.in_front_of(nodes, rng)
            } else {
                self.free_flight(rng)
            };
            if query.is_clear(candidate.position, self.config.clearance_radius) {
                tracing::debug!(
                    x = candidate.position.x,
                    y = candidate.position.y,
                    z = candidate.position.z,
                    in_front,
                    "spawn position found"
                );
                return Ok(candidate);
            }
        }

        tracing::error!(
            attempts = self.config.attempts,
            in_front,
            "could not find a safe position to spawn"
        );
        Err(ForageError::NoSafeSpawn {
            attempts: self.config.attempts,
        })
    }

    fn in_front_of(&self, nodes: &[ResourceNode], rng: &mut dyn DeterministicRng) -> SpawnPose {
        let node = &nodes[rng.index(nodes.len())];
        let range = self.config.front_distance;
        let distance = rng.range_f32(range.min, range.max);
        let position = node.position + node.up_axis * distance;
        let (pitch, yaw) = look_angles(node.position - position);
        SpawnPose {
            position,
            pitch,
            yaw,
        }
    }

    fn free_flight(&self, rng: &mut dyn DeterministicRng) -> SpawnPose {
        let height = rng.range_f32(self.config.height.min, self.config.height.max);
        let radius = rng.range_f32(self.config.radius.min, self.config.radius.max);
        let heading = Quat::from_pitch_yaw_degrees(0.0, rng.range_f32(-180.0, 180.0));
        let position = self.center + Vec3::UP * height + heading.rotate(Vec3::FORWARD) * radius;
        let pitch = rng.range_f32(self.config.pitch.min, self.config.pitch.max);
        let yaw = rng.range_f32(-180.0, 180.0);
        SpawnPose {
            position,
            pitch,
            yaw,
        }
    }
}

/// Creates the episode's receptacles.
pub trait ReceptacleSpawner {
    fn spawn(
        &mut self,
        rng: &mut dyn DeterministicRng,
        ground: &dyn SpatialQuery,
    ) -> Vec<Receptacle>;
}

/// Places one receptacle per category on the ground, on a ring around the area centre.
#[derive(Debug, Clone)]
pub struct RingSpawner {
    categories: Vec<Category>,
    center: Vec3,
    min_radius: f32,
    max_radius: f32,
    probe_height: f32,
    probe_depth: f32,
    spacing: f32,
}

impl RingSpawner {
    pub fn new(categories: impl IntoIterator<Item = Category>, env: &EnvironmentConfig) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            center: env.center,
            min_radius: env.receptacle_min_radius,
            max_radius: env.area_diameter * env.receptacle_radius_fraction,
            probe_height: env.receptacle_probe_height,
            probe_depth: env.area_diameter,
            spacing: env.receptacle_spacing,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl ReceptacleSpawner for RingSpawner {
    fn spawn(
        &mut self,
        rng: &mut dyn DeterministicRng,
        ground: &dyn SpatialQuery,
    ) -> Vec<Receptacle> {
        let mut out = Vec::with_capacity(self.categories.len());
        for (idx, category) in self.categories.iter().copied().enumerate() {
            let heading = Quat::from_pitch_yaw_degrees(0.0, rng.range_f32(-180.0, 180.0));
            let radius = rng.range_f32(self.min_radius, self.max_radius);
            let top = self.center
                + Vec3::UP * self.probe_height
                + heading.rotate(Vec3::FORWARD) * radius;

            match ground.ground_below(top, self.probe_depth) {
                Some(point) => out.push(
                    Receptacle::new(ReceptacleId(idx as u32), category, point)
                        .with_spacing(self.spacing),
                ),
                None => tracing::warn!(category = %category, "could not place receptacle"),
            }
        }
        out
    }
}

/// Spawner that hands out a fixed layout every episode.
#[derive(Debug, Clone, Default)]
pub struct FixedSpawner {
    pub receptacles: Vec<Receptacle>,
}

impl FixedSpawner {
    pub fn new(receptacles: Vec<Receptacle>) -> Self {
        Self { receptacles }
    }
}

impl ReceptacleSpawner for FixedSpawner {
    fn spawn(
        &mut self,
        _rng: &mut dyn DeterministicRng,
        _ground: &dyn SpatialQuery,
    ) -> Vec<Receptacle> {
        // Fresh copies so stacks from the previous episode are dropped.
        self.receptacles
            .iter()
            .map(|r| {
                Receptacle::new(r.id, r.category, r.position)
                    .with_spacing(r.spacing)
                    .with_up_axis(r.up_axis)
            })
            .collect()
    }
}
