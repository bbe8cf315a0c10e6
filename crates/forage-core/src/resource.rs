use crate::{Depiction, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full capacity a node is reset to.
pub const FULL_CAPACITY: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

/// A depletable resource with an extraction point facing along `up_axis`.
///
/// `remaining` only changes through [`ResourceNode::feed`] and [`ResourceNode::reset`]; a node that
/// reaches zero stays in its area but is skipped by target selection until reset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceNode {
    pub id: NodeId,
    pub position: Vec3,
    pub up_axis: Vec3,
    pub depiction: Depiction,
    remaining: f32,
}

impl ResourceNode {
    pub fn new(id: NodeId, position: Vec3, up_axis: Vec3) -> Self {
        Self {
            id,
            position,
            up_axis: up_axis.normalized(),
            depiction: Depiction::default(),
            remaining: FULL_CAPACITY,
        }
    }

    pub fn with_depiction(mut self, depiction: Depiction) -> Self {
        self.depiction = depiction;
        self
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn has_resource(&self) -> bool {
        self.remaining > 0.0
    }

    /// Removes up to `amount` and returns what was actually taken.
    ///
    /// Non-positive amounts are a no-op. Once the node runs dry `remaining` is pinned at exactly 0.
    pub fn feed(&mut self, amount: f32) -> f32 {
        if !(amount > 0.0) || !self.has_resource() {
            return 0.0;
        }
        let taken = amount.min(self.remaining);
        self.remaining -= amount;
        if self.remaining <= f32::EPSILON {
            self.remaining = 0.0;
        }
        taken
    }

    pub fn reset(&mut self) {
        self.remaining = FULL_CAPACITY;
    }
}
