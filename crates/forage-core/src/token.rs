use crate::{Category, NodeId, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A classified item produced when a node is drained. Owned by the agent until delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub category: Category,
    pub source: NodeId,
}

impl Token {
    pub fn new(category: Category, source: NodeId) -> Self {
        Self { category, source }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReceptacleId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DepositOutcome {
    Accepted { stack_height: usize },
    /// Category mismatch; the token was discarded.
    Rejected,
}

/// A category-tagged destination holding a stack of matching tokens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Receptacle {
    pub id: ReceptacleId,
    pub category: Category,
    /// Base of the stack.
    pub position: Vec3,
    pub up_axis: Vec3,
    /// Vertical distance between stacked tokens.
    pub spacing: f32,
    stack: Vec<Token>,
}

impl Receptacle {
    pub fn new(id: ReceptacleId, category: Category, position: Vec3) -> Self {
        Self {
            id,
            category,
            position,
            up_axis: Vec3::UP,
            spacing: 0.0,
            stack: Vec::new(),
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn with_up_axis(mut self, up_axis: Vec3) -> Self {
        self.up_axis = up_axis.normalized();
        self
    }

    /// Consumes the token either way; only a matching category lands on the stack.
    pub fn deposit(&mut self, token: Token) -> DepositOutcome {
        if token.category != self.category {
            return DepositOutcome::Rejected;
        }
        self.stack.push(token);
        DepositOutcome::Accepted {
            stack_height: self.stack.len(),
        }
    }

    pub fn stack(&self) -> &[Token] {
        &self.stack
    }

    pub fn top(&self) -> Option<&Token> {
        self.stack.last()
    }

    /// Where the next token lands: the base, raised one spacing per token already stacked.
    pub fn drop_point(&self) -> Vec3 {
        self.position + Vec3::UP * (self.spacing * self.stack.len() as f32)
    }
}
