//! Kinematic stand-in for the physics engine.
//!
//! A point-mass body with linear drag, spherical extraction and drop zones, and a circular
//! boundary. Good enough to exercise the agent end to end; not a physics simulation.

use forage_agent::{AgentBody, ContactEvent, ContactTarget, SpatialQuery};
use forage_core::{Pose, Quat, Receptacle, ResourceNode, Vec3};

/// Distance from the body origin to the interaction point, along forward.
pub const BEAK_LENGTH: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct KinematicBody {
    pose: Pose,
    velocity: Vec3,
    pending_force: Vec3,
    mass: f32,
    drag: f32,
    asleep: bool,
}

impl KinematicBody {
    pub fn new(mass: f32, drag: f32) -> Self {
        Self {
            pose: Pose::default(),
            velocity: Vec3::ZERO,
            pending_force: Vec3::ZERO,
            mass: mass.max(1e-3),
            drag: drag.max(0.0),
            asleep: false,
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advance by `dt`, consuming the force applied since the last call.
    pub fn integrate(&mut self, dt: f32) {
        let force = std::mem::take(&mut self.pending_force);
        if self.asleep {
            self.velocity = Vec3::ZERO;
            return;
        }
        let damping = (1.0 - self.drag * dt).max(0.0);
        self.velocity = self.velocity * damping + force * (dt / self.mass);
        self.pose.position += self.velocity * dt;
    }

    fn push_inside(&mut self, center: Vec3, radius: f32) {
        let offset = (self.pose.position - center).flattened();
        let distance = offset.length();
        if distance > radius {
            let pulled = offset * (radius / distance);
            self.pose.position = Vec3::new(
                center.x + pulled.x,
                self.pose.position.y,
                center.z + pulled.z,
            );
            self.velocity = Vec3::ZERO;
        }
    }
}

impl AgentBody for KinematicBody {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn interaction_pose(&self) -> Pose {
        Pose::new(
            self.pose.position + self.pose.forward() * BEAK_LENGTH,
            self.pose.rotation,
        )
    }

    fn apply_force(&mut self, force: Vec3) {
        self.pending_force += force;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    fn place(&mut self, pose: Pose) {
        self.pose = pose;
        self.velocity = Vec3::ZERO;
        self.pending_force = Vec3::ZERO;
    }

    fn set_asleep(&mut self, asleep: bool) {
        self.asleep = asleep;
        if asleep {
            self.velocity = Vec3::ZERO;
        }
    }
}

/// Static geometry of one area.
#[derive(Debug, Clone)]
pub struct SimWorld {
    pub center: Vec3,
    /// Horizontal radius of the boundary wall.
    pub boundary_radius: f32,
    /// Radius of each node's extraction sphere.
    pub node_radius: f32,
    /// Radius of each receptacle's drop sphere.
    pub drop_radius: f32,
    obstacles: Vec<(Vec3, f32)>,
}

impl SimWorld {
    pub fn new(center: Vec3, area_diameter: f32) -> Self {
        Self {
            center,
            boundary_radius: area_diameter * 0.5,
            node_radius: 0.05,
            drop_radius: 0.3,
            obstacles: Vec::new(),
        }
    }

    /// Treat each node's extraction sphere as solid for spawn checks.
    pub fn set_nodes(&mut self, nodes: &[ResourceNode]) {
        self.obstacles = nodes
            .iter()
            .map(|n| (n.position, self.node_radius))
            .collect();
    }

    /// Keep the body inside the wall and above the ground; report what it touches.
    pub fn resolve<'a>(
        &self,
        body: &mut KinematicBody,
        nodes: &[ResourceNode],
        receptacles: impl Iterator<Item = &'a Receptacle>,
    ) -> Vec<ContactEvent> {
        let mut contacts = Vec::new();

        let horizontal = (body.pose.position - self.center).flattened().length();
        if horizontal > self.boundary_radius {
            body.push_inside(self.center, self.boundary_radius);
            contacts.push(ContactEvent::new(ContactTarget::Boundary, body.pose.position));
        }
        if body.pose.position.y < self.center.y {
            body.pose.position.y = self.center.y;
            body.velocity.y = body.velocity.y.max(0.0);
        }

        let beak = body.interaction_pose().position;
        for node in nodes {
            if let Some(point) = closest_point(beak, node.position, self.node_radius) {
                contacts.push(ContactEvent::new(ContactTarget::Extraction(node.id), point));
            }
        }
        for receptacle in receptacles {
            if let Some(point) = closest_point(beak, receptacle.drop_point(), self.drop_radius) {
                contacts.push(ContactEvent::new(ContactTarget::DropZone(receptacle.id), point));
            }
        }
        contacts
    }
}

/// Closest point of the sphere to `p`, if `p` is inside it.
fn closest_point(p: Vec3, center: Vec3, radius: f32) -> Option<Vec3> {
    (p.distance(center) <= radius).then_some(p)
}

impl SpatialQuery for SimWorld {
    fn is_clear(&self, center: Vec3, radius: f32) -> bool {
        let horizontal = (center - self.center).flattened().length();
        if horizontal + radius > self.boundary_radius || center.y - radius < self.center.y {
            return false;
        }
        self.obstacles
            .iter()
            .all(|(c, r)| center.distance(*c) > radius + r)
    }

    fn ground_below(&self, from: Vec3, max_distance: f32) -> Option<Vec3> {
        let drop = from.y - self.center.y;
        (drop >= 0.0 && drop <= max_distance).then(|| Vec3::new(from.x, self.center.y, from.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_bounds_speed() {
        let mut body = KinematicBody::new(1.0, 4.0);
        for _ in 0..2000 {
            body.apply_force(Vec3::new(2.0, 0.0, 0.0));
            body.integrate(0.02);
        }
        assert!((body.velocity().x - 0.5).abs() < 0.05);
    }

    #[test]
    fn spawn_checks_respect_obstacles_and_walls() {
        let mut world = SimWorld::new(Vec3::ZERO, 20.0);
        world.set_nodes(&[ResourceNode::new(
            forage_core::NodeId(0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::UP,
        )]);
        assert!(!world.is_clear(Vec3::new(0.0, 1.05, 0.0), 0.05));
        assert!(world.is_clear(Vec3::new(0.0, 1.2, 0.0), 0.05));
        assert!(!world.is_clear(Vec3::new(11.0, 1.0, 0.0), 0.05));
        assert!(!world.is_clear(Vec3::new(0.0, 0.01, 3.0), 0.05));
    }
}
