//! Seams to the physical/render collaborator.
//!
//! The agent never integrates physics itself: it reads poses, writes forces and orientations, and
//! reacts to contact events the collaborator reports.

use forage_core::{NodeId, Pose, Quat, ReceptacleId, Vec3};

/// The agent's rigid body as seen by the decision loop.
pub trait AgentBody {
    /// Root pose of the body.
    fn pose(&self) -> Pose;

    /// Pose of the interaction point (tip of the extraction tool) in world space.
    fn interaction_pose(&self) -> Pose;

    fn apply_force(&mut self, force: Vec3);

    fn set_rotation(&mut self, rotation: Quat);

    /// Teleport and zero linear/angular velocity.
    fn place(&mut self, pose: Pose);

    /// Stop or resume physical simulation of the body.
    fn set_asleep(&mut self, _asleep: bool) {}
}

/// Geometry queries used for placement.
pub trait SpatialQuery {
    /// No collider overlaps the sphere.
    fn is_clear(&self, center: Vec3, radius: f32) -> bool;

    /// First solid point straight below `from`, within `max_distance`.
    fn ground_below(&self, from: Vec3, max_distance: f32) -> Option<Vec3>;
}

/// What the agent touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    /// Extraction zone of a resource node.
    Extraction(NodeId),
    /// Drop zone of a receptacle.
    DropZone(ReceptacleId),
    /// Solid boundary of the area.
    Boundary,
    Other,
}

/// A contact reported by the collaborator.
///
/// `point` is the closest point on the touched collider to the agent's interaction point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub target: ContactTarget,
    pub point: Vec3,
}

impl ContactEvent {
    pub fn new(target: ContactTarget, point: Vec3) -> Self {
        Self { target, point }
    }
}
