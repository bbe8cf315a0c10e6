use forage_core::{Sample, SampleShape};

use crate::Prediction;

/// Opaque scoring backend (a model, a lookup, a test double).
///
/// Implementations must be synchronous and side-effect-free. The classifier validates sample shapes
/// before calling [`Scorer::score`], so a scorer only ever sees inputs of `input_shape()`.
pub trait Scorer {
    fn input_shape(&self) -> SampleShape;

    fn score(&self, sample: &Sample) -> Prediction;
}

impl<T: Scorer + ?Sized> Scorer for Box<T> {
    fn input_shape(&self) -> SampleShape {
        (**self).input_shape()
    }

    fn score(&self, sample: &Sample) -> Prediction {
        (**self).score(sample)
    }
}

/// Adapts a closure into a [`Scorer`].
pub struct FnScorer<F>
where
    F: Fn(&Sample) -> Prediction,
{
    shape: SampleShape,
    score_fn: F,
}

impl<F> FnScorer<F>
where
    F: Fn(&Sample) -> Prediction,
{
    pub fn new(shape: SampleShape, score_fn: F) -> Self {
        Self { shape, score_fn }
    }
}

impl<F> Scorer for FnScorer<F>
where
    F: Fn(&Sample) -> Prediction,
{
    fn input_shape(&self) -> SampleShape {
        self.shape
    }

    fn score(&self, sample: &Sample) -> Prediction {
        (self.score_fn)(sample)
    }
}
