//! Deterministic, engine-agnostic data model for the forage agent.
//!
//! Everything here is plain data plus the few invariants the agent relies on: resource nodes that
//! clamp at empty, receptacles that only stack matching tokens, and replayable RNG streams.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod math;
pub mod resource;
pub mod rng;
pub mod sample;
pub mod tick;
pub mod token;

pub use agent::AgentId;
pub use math::{Pose, Quat, Vec3};
pub use resource::{NodeId, ResourceNode, FULL_CAPACITY};
pub use rng::{DeterministicRng, SplitMix64};
pub use sample::{Category, Depiction, Sample, SampleShape};
pub use tick::TickContext;
pub use token::{DepositOutcome, Receptacle, ReceptacleId, Token};
