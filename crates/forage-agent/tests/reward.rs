use forage_agent::{Objective, ObservationDeltas, RewardConfig, RewardShaper};
use forage_core::Vec3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

fn deltas(distance: f32, front_align: f32, up_align: f32) -> ObservationDeltas {
    ObservationDeltas {
        distance,
        front_align,
        up_align,
    }
}

#[test]
fn moving_away_outside_threshold_is_not_rewarded() {
    let shaper = RewardShaper::new(RewardConfig::default());
    let far = Vec3::new(5.0, 0.0, 0.0);

    let away = shaper.shape(&deltas(0.05, 0.3, 0.3), far, Vec3::ZERO, 0.5);
    assert!(away <= 0.0);
    assert!(approx(away, -0.05 * 0.001));

    let closer = shaper.shape(&deltas(-0.05, -0.3, -0.3), far, Vec3::ZERO, 0.5);
    assert!(closer > 0.0);
}

#[test]
fn inside_threshold_only_alignment_counts() {
    let shaper = RewardShaper::new(RewardConfig::default());
    let near = Vec3::new(0.1, 0.0, 0.0);

    let a = shaper.shape(&deltas(0.0, 0.2, 0.1), near, Vec3::ZERO, 0.5);
    let b = shaper.shape(&deltas(0.9, 0.2, 0.1), near, Vec3::ZERO, 0.5);
    assert_eq!(a, b);
    assert!(approx(a, 0.3 * 0.001));
}

#[test]
fn scales_are_configurable() {
    let config = RewardConfig {
        distance_scale: 1.0,
        alignment_scale: 2.0,
        ..RewardConfig::default()
    };
    let shaper = RewardShaper::new(config);
    let far = Vec3::new(9.0, 0.0, 0.0);
    let outside = shaper.shape(&deltas(0.25, 0.0, 0.0), far, Vec3::ZERO, 0.5);
    assert!(approx(outside, -0.25));
    let inside = shaper.shape(&deltas(0.0, 0.25, 0.25), Vec3::ZERO, Vec3::ZERO, 0.5);
    assert!(approx(inside, 1.0));
}

#[test]
fn shape_for_measures_against_the_hover_point() {
    let shaper = RewardShaper::new(RewardConfig::default());
    let objective = Objective::new(Vec3::ZERO, Vec3::UP);
    // The hover point is 0.45 above the objective; this beak is at the hover point, inside.
    let at_hover = Vec3::new(0.0, 0.45, 0.0);
    let reward = shaper.shape_for(&deltas(1.0, 0.5, 0.0), at_hover, &objective);
    assert!(approx(reward, 0.5 * 0.001));

    // Just below the objective the hover point is 0.95 away, outside.
    let below = Vec3::new(0.0, -0.5, 0.0);
    let reward = shaper.shape_for(&deltas(1.0, 0.5, 0.0), below, &objective);
    assert!(approx(reward, -0.001));
}

#[test]
fn extraction_bonus_depends_on_facing_into_the_node() {
    let shaper = RewardShaper::new(RewardConfig::default());
    let into = shaper.extraction(0.1, Vec3::DOWN, Vec3::UP);
    let away = shaper.extraction(0.1, Vec3::UP, Vec3::UP);
    let side = shaper.extraction(0.1, Vec3::FORWARD, Vec3::UP);

    assert!(approx(into, 0.01 + 0.02));
    assert!(approx(away, 0.01));
    assert!(approx(side, 0.01));
}

#[test]
fn event_rewards_use_config_values() {
    let shaper = RewardShaper::new(RewardConfig::default());
    assert_eq!(shaper.delivery(), 0.1);
    assert_eq!(shaper.boundary(), -0.5);
}
