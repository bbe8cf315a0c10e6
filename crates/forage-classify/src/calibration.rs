use forage_core::Sample;

use crate::{Classifier, Leaders, Scorer};

/// Samples known to show one label, used to discover which scorer ordinal that label maps to.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledSet {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl LabelledSet {
    pub fn new(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelReport {
    pub name: String,
    pub leaders: Leaders,
}

impl<S: Scorer> Classifier<S> {
    /// Majority class per labelled set, in input order.
    pub fn calibrate(&self, sets: &[LabelledSet]) -> Vec<LabelReport> {
        sets.iter()
            .map(|set| {
                let leaders = self.most_common(&set.samples);
                for class in leaders.iter() {
                    tracing::info!(
                        label = %set.name,
                        class = %class,
                        votes = leaders.count(),
                        "label maps to class"
                    );
                }
                LabelReport {
                    name: set.name.clone(),
                    leaders,
                }
            })
            .collect()
    }
}
