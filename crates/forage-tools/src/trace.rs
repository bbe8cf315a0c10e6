use forage_core::{AgentId, Category, NodeId, ReceptacleId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TraceKind {
    EpisodeBegin {
        episode: u64,
    },
    TargetChanged {
        node: Option<NodeId>,
    },
    Extracted {
        node: NodeId,
        amount: f32,
    },
    NodeDrained {
        node: NodeId,
    },
    TokenCreated {
        node: NodeId,
        category: Category,
    },
    TokenDelivered {
        receptacle: ReceptacleId,
        category: Category,
        stack_height: usize,
    },
    TokenRejected {
        receptacle: ReceptacleId,
        category: Category,
    },
    /// Held token had no receptacle for its category.
    TokenDiscarded {
        category: Category,
    },
    BoundaryHit,
}

impl TraceKind {
    pub fn tag(&self) -> &'static str {
        match self {
            TraceKind::EpisodeBegin { .. } => "episode.begin",
            TraceKind::TargetChanged { .. } => "target.changed",
            TraceKind::Extracted { .. } => "node.extracted",
            TraceKind::NodeDrained { .. } => "node.drained",
            TraceKind::TokenCreated { .. } => "token.created",
            TraceKind::TokenDelivered { .. } => "token.delivered",
            TraceKind::TokenRejected { .. } => "token.rejected",
            TraceKind::TokenDiscarded { .. } => "token.discarded",
            TraceKind::BoundaryHit => "boundary.hit",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub agent: AgentId,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: TraceKind,
}

impl TraceEvent {
    pub fn new(tick: u64, agent: AgentId, kind: TraceKind) -> Self {
        Self { tick, agent, kind }
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[derive(Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn count(&self, tag: &str) -> usize {
        self.events.iter().filter(|e| e.kind.tag() == tag).count()
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

impl<T: TraceSink + ?Sized> TraceSink for Box<T> {
    fn emit(&mut self, event: TraceEvent) {
        (**self).emit(event);
    }
}
