//! Action vectors and smoothed orientation control.

use forage_core::math::{move_towards, wrap_degrees};
use forage_core::{Quat, Vec3};

use crate::config::AgentConfig;

/// Number of components in an action vector.
pub const ACTION_LEN: usize = 5;

/// One step of policy output: movement plus requested pitch/yaw rates, each in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActionVector {
    pub movement: Vec3,
    pub pitch: f32,
    pub yaw: f32,
}

impl ActionVector {
    pub fn new(movement: Vec3, pitch: f32, yaw: f32) -> Self {
        Self {
            movement: Vec3::new(
                sanitize(movement.x),
                sanitize(movement.y),
                sanitize(movement.z),
            ),
            pitch: sanitize(pitch),
            yaw: sanitize(yaw),
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }

    /// Missing trailing components read as zero; extra components are ignored.
    pub fn from_slice(values: &[f32]) -> Self {
        let at = |i: usize| values.get(i).copied().unwrap_or(0.0);
        Self::new(Vec3::new(at(0), at(1), at(2)), at(3), at(4))
    }

    pub fn to_array(self) -> [f32; ACTION_LEN] {
        [
            self.movement.x,
            self.movement.y,
            self.movement.z,
            self.pitch,
            self.yaw,
        ]
    }
}

impl From<[f32; ACTION_LEN]> for ActionVector {
    fn from(values: [f32; ACTION_LEN]) -> Self {
        Self::from_slice(&values)
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// What the physical collaborator should apply this step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actuation {
    pub force: Vec3,
    pub rotation: Quat,
}

/// Integrates pitch/yaw requests into an orientation.
///
/// Requested rates are approached at `rotation_smoothing` per second rather than applied directly.
#[derive(Debug, Clone, Default)]
pub struct Actuator {
    smooth_pitch: f32,
    smooth_yaw: f32,
    pitch_deg: f32,
    yaw_deg: f32,
}

impl Actuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch_deg
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_deg
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_pitch_yaw_degrees(self.pitch_deg, self.yaw_deg)
    }

    /// Set the absolute orientation and clear any pending smoothing.
    pub fn set_orientation(&mut self, pitch_deg: f32, yaw_deg: f32, max_pitch_deg: f32) {
        self.pitch_deg = pitch_deg.clamp(-max_pitch_deg, max_pitch_deg);
        self.yaw_deg = wrap_degrees(yaw_deg);
        self.smooth_pitch = 0.0;
        self.smooth_yaw = 0.0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn step(&mut self, action: &ActionVector, dt: f32, config: &AgentConfig) -> Actuation {
        let force = action.movement * config.move_force;

        let rate = config.rotation_smoothing * dt;
        self.smooth_pitch = move_towards(self.smooth_pitch, action.pitch, rate);
        self.smooth_yaw = move_towards(self.smooth_yaw, action.yaw, rate);

        let pitch = self.pitch_deg + self.smooth_pitch * dt * config.pitch_speed;
        self.pitch_deg = pitch.clamp(-config.max_pitch_deg, config.max_pitch_deg);
        self.yaw_deg = wrap_degrees(self.yaw_deg + self.smooth_yaw * dt * config.yaw_speed);

        Actuation {
            force,
            rotation: self.rotation(),
        }
    }
}
