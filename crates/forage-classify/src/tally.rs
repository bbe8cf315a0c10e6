use std::collections::{BTreeMap, BTreeSet};

use forage_core::Category;

use crate::Prediction;

/// Running majority vote over predicted classes.
///
/// The final leader set depends only on the multiset of recorded classes: every class whose count
/// equals the maximum. Intermediate leader sets may differ with input order.
#[derive(Debug, Clone, Default)]
pub struct VoteTally {
    counts: BTreeMap<Category, usize>,
    leaders: BTreeSet<Category>,
    leader_count: usize,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, class: Category) {
        let count = self.counts.entry(class).or_insert(0);
        *count += 1;
        let count = *count;

        if count > self.leader_count {
            self.leaders.clear();
            self.leaders.insert(class);
            self.leader_count = count;
        } else if count == self.leader_count {
            self.leaders.insert(class);
        }
    }

    pub fn count(&self, class: Category) -> usize {
        self.counts.get(&class).copied().unwrap_or(0)
    }

    pub fn leader_count(&self) -> usize {
        self.leader_count
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Current leaders. The invalid sentinel is dropped whenever a valid class ties with it.
    pub fn leaders(&self) -> Leaders {
        let has_valid = self.leaders.iter().any(|c| c.is_valid());
        let set = self
            .leaders
            .iter()
            .copied()
            .filter(|c| !has_valid || c.is_valid())
            .collect();
        Leaders {
            classes: set,
            count: self.leader_count,
        }
    }

    pub fn into_leaders(self) -> Leaders {
        self.leaders()
    }
}

/// The most frequent class(es) of a batch and how often they occurred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leaders {
    classes: BTreeSet<Category>,
    count: usize,
}

impl Leaders {
    pub fn classes(&self) -> &BTreeSet<Category> {
        &self.classes
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn contains(&self, class: Category) -> bool {
        self.classes.contains(&class)
    }

    pub fn is_tie(&self) -> bool {
        self.classes.len() > 1
    }

    /// A single deterministic pick: the lowest leading ordinal.
    ///
    /// `None` for an empty batch; `Some(Category::INVALID)` when only malformed samples led.
    pub fn primary(&self) -> Option<Category> {
        self.classes.iter().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.classes.iter().copied()
    }
}

/// Majority vote of `score` over `samples`.
pub fn most_common<S, I, F>(samples: I, mut score: F) -> Leaders
where
    I: IntoIterator<Item = S>,
    F: FnMut(S) -> Prediction,
{
    most_common_by(samples, |s| score(s).predicted_class())
}

/// Majority vote when the caller already maps samples straight to a class.
pub fn most_common_by<S, I, F>(samples: I, mut classify: F) -> Leaders
where
    I: IntoIterator<Item = S>,
    F: FnMut(S) -> Category,
{
    let mut tally = VoteTally::new();
    for sample in samples {
        tally.record(classify(sample));
    }
    tally.into_leaders()
}
