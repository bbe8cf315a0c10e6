use forage_agent::{ActionVector, Actuator, AgentConfig};
use forage_core::{Quat, Vec3};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn action_components_are_clamped() {
    let action = ActionVector::from([2.0, -3.0, 0.5, f32::NAN, -0.25]);
    assert_eq!(action.movement, Vec3::new(1.0, -1.0, 0.5));
    assert_eq!(action.pitch, 0.0);
    assert_eq!(action.yaw, -0.25);
}

#[test]
fn short_action_slices_pad_with_zero() {
    let action = ActionVector::from_slice(&[0.5, 0.5]);
    assert_eq!(action.to_array(), [0.5, 0.5, 0.0, 0.0, 0.0]);
}

#[test]
fn force_scales_with_move_force() {
    let config = AgentConfig::default();
    let mut actuator = Actuator::new();
    let action = ActionVector::new(Vec3::new(1.0, 0.0, -0.5), 0.0, 0.0);
    let out = actuator.step(&action, 0.02, &config);
    assert_eq!(out.force, Vec3::new(2.0, 0.0, -1.0));
}

#[test]
fn rotation_requests_are_smoothed() {
    let config = AgentConfig::default();
    let mut actuator = Actuator::new();
    let action = ActionVector::new(Vec3::ZERO, 1.0, 0.0);

    actuator.step(&action, 0.02, &config);
    // Smoothed rate moves 2/s * 0.02s = 0.04 toward 1; 0.04 * 0.02s * 100 deg/s.
    assert!(approx(actuator.pitch_degrees(), 0.08));
    assert!(approx(actuator.yaw_degrees(), 0.0));
}

#[test]
fn pitch_is_clamped_to_max() {
    let config = AgentConfig::default();
    let mut actuator = Actuator::new();
    let up = ActionVector::new(Vec3::ZERO, 1.0, 0.0);
    let down = ActionVector::new(Vec3::ZERO, -1.0, 0.0);

    for _ in 0..200 {
        actuator.step(&up, 0.1, &config);
        assert!(actuator.pitch_degrees() <= config.max_pitch_deg);
    }
    assert_eq!(actuator.pitch_degrees(), config.max_pitch_deg);

    for _ in 0..400 {
        actuator.step(&down, 0.1, &config);
        assert!(actuator.pitch_degrees() >= -config.max_pitch_deg);
    }
    assert_eq!(actuator.pitch_degrees(), -config.max_pitch_deg);
}

#[test]
fn yaw_wraps_instead_of_clamping() {
    let config = AgentConfig::default();
    let mut actuator = Actuator::new();
    actuator.set_orientation(0.0, 179.0, config.max_pitch_deg);

    let out = actuator.step(&ActionVector::new(Vec3::ZERO, 0.0, 1.0), 0.1, &config);
    // 0.2 smoothed * 0.1s * 100 deg/s = 2 degrees past 179.
    assert!(approx(actuator.yaw_degrees(), -179.0));
    assert_eq!(out.rotation, Quat::from_pitch_yaw_degrees(0.0, actuator.yaw_degrees()));
}

#[test]
fn set_orientation_clamps_pitch_and_reset_zeroes() {
    let mut actuator = Actuator::new();
    actuator.set_orientation(120.0, 540.0, 80.0);
    assert_eq!(actuator.pitch_degrees(), 80.0);
    assert!(approx(actuator.yaw_degrees(), -180.0));

    actuator.reset();
    assert_eq!(actuator.pitch_degrees(), 0.0);
    assert_eq!(actuator.rotation(), Quat::from_pitch_yaw_degrees(0.0, 0.0));
}
