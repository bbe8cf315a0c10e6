//! Stand-ins for the trained model and the image classifier.

use forage_agent::{ActionVector, Observation, Policy};
use forage_classify::{Prediction, Scorer};
use forage_core::{
    Category, Depiction, DeterministicRng, NodeId, ResourceNode, Sample, SampleShape, Vec3,
};

/// Flies the interaction point straight at the objective, easing off when close.
#[derive(Debug, Clone)]
pub struct SeekPolicy {
    area_diameter: f32,
    /// Distance below which thrust ramps down linearly.
    slow_radius: f32,
}

impl SeekPolicy {
    pub fn new(area_diameter: f32) -> Self {
        Self {
            area_diameter,
            slow_radius: 0.25,
        }
    }
}

impl Policy for SeekPolicy {
    fn decide(&mut self, observation: &Observation) -> ActionVector {
        if observation.is_neutral() || observation.len() < 10 {
            return ActionVector::idle();
        }
        let f = &observation.features;
        let direction = Vec3::new(f[4], f[5], f[6]);
        let distance = f[9] * self.area_diameter;
        let thrust = (distance / self.slow_radius).clamp(0.2, 1.0);
        ActionVector::new(direction * thrust, 0.0, 0.0)
    }
}

/// Scores a sample by how close its mean lies to each class prototype.
#[derive(Debug, Clone)]
pub struct PrototypeScorer {
    shape: SampleShape,
    prototypes: Vec<f32>,
}

impl PrototypeScorer {
    /// Prototypes evenly spaced in `[0, 1]`, one per class.
    pub fn evenly_spaced(shape: SampleShape, classes: usize) -> Self {
        let step = 1.0 / classes.max(1) as f32;
        let prototypes = (0..classes).map(|i| (i as f32 + 0.5) * step).collect();
        Self { shape, prototypes }
    }

    pub fn prototype(&self, class: Category) -> Option<f32> {
        class.ordinal().and_then(|i| self.prototypes.get(i).copied())
    }

    pub fn classes(&self) -> usize {
        self.prototypes.len()
    }
}

impl Scorer for PrototypeScorer {
    fn input_shape(&self) -> SampleShape {
        self.shape
    }

    fn score(&self, sample: &Sample) -> Prediction {
        let mean = sample.mean();
        Prediction::new(self.prototypes.iter().map(|p| -(mean - p).abs()).collect())
    }
}

/// Layout for generated nodes.
#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub count: u32,
    pub radius: (f32, f32),
    pub height: (f32, f32),
    pub samples_per_node: usize,
    /// Amplitude of the per-value noise added to the prototype.
    pub noise: f32,
    /// One in this many samples is malformed.
    pub malformed_every: usize,
}

impl Default for NodeLayout {
    fn default() -> Self {
        Self {
            count: 6,
            radius: (1.0, 6.0),
            height: (0.5, 2.0),
            samples_per_node: 5,
            noise: 0.15,
            malformed_every: 7,
        }
    }
}

/// Nodes scattered around `center`, each depicting a random class of `scorer`.
pub fn generate_nodes(
    layout: &NodeLayout,
    center: Vec3,
    scorer: &PrototypeScorer,
    rng: &mut dyn DeterministicRng,
) -> Vec<ResourceNode> {
    let shape = scorer.input_shape();
    let mut counter = 0usize;
    (0..layout.count)
        .map(|id| {
            let angle = rng.range_f32(-std::f32::consts::PI, std::f32::consts::PI);
            let radius = rng.range_f32(layout.radius.0, layout.radius.1);
            let height = rng.range_f32(layout.height.0, layout.height.1);
            let position =
                center + Vec3::new(angle.sin() * radius, height, angle.cos() * radius);
            let up = Vec3::new(rng.range_f32(-0.5, 0.5), 1.0, rng.range_f32(-0.5, 0.5));

            let class = Category(rng.index(scorer.classes().max(1)) as i32);
            let base = scorer.prototype(class).unwrap_or(0.0);
            let samples = (0..layout.samples_per_node)
                .map(|_| {
                    counter += 1;
                    if layout.malformed_every > 0 && counter % layout.malformed_every == 0 {
                        return Sample::filled(SampleShape::new(1, 1, 1), base);
                    }
                    let data = (0..shape.len())
                        .map(|_| base + rng.range_f32(-layout.noise, layout.noise))
                        .collect();
                    Sample::new(shape, data)
                })
                .collect();

            ResourceNode::new(NodeId(id), position, up).with_depiction(Depiction::new(samples))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prototype_scorer_prefers_the_nearest_prototype() {
        let scorer = PrototypeScorer::evenly_spaced(SampleShape::new(2, 2, 1), 4);
        let sample = Sample::filled(SampleShape::new(2, 2, 1), 0.62);
        assert_eq!(scorer.score(&sample).predicted_class(), Category(2));
    }

    #[test]
    fn seek_policy_idles_without_objective() {
        let mut policy = SeekPolicy::new(20.0);
        assert_eq!(policy.decide(&Observation::neutral()), ActionVector::idle());
    }
}
