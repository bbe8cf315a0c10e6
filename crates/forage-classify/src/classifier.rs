use forage_core::{Category, Depiction, Sample};

use crate::{most_common_by, Leaders, Scorer};

/// Wraps a [`Scorer`] with input validation and batch helpers.
///
/// A sample whose shape does not match the scorer's input is classified as
/// [`Category::INVALID`] instead of being scored; batches containing such samples still aggregate.
pub struct Classifier<S: Scorer> {
    scorer: S,
}

impl<S: Scorer> Classifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn classify(&self, sample: &Sample) -> Category {
        let expected = self.scorer.input_shape();
        if !sample.matches(expected) {
            tracing::warn!(
                expected = ?expected,
                actual = ?sample.shape,
                len = sample.data.len(),
                "sample shape does not match scorer input"
            );
            return Category::INVALID;
        }
        self.scorer.score(sample).predicted_class()
    }

    /// One category per sample, in input order.
    pub fn classify_batch(&self, samples: &[Sample]) -> Vec<Category> {
        samples.iter().map(|s| self.classify(s)).collect()
    }

    pub fn most_common(&self, samples: &[Sample]) -> Leaders {
        most_common_by(samples.iter(), |s| self.classify(s))
    }

    pub fn classify_depiction(&self, depiction: &Depiction) -> Leaders {
        self.most_common(&depiction.samples)
    }
}
