//! Foraging-and-delivery agent.
//!
//! The agent seeks the nearest resource node that still has resource, drains it, classifies what it
//! drained into a token, and carries the token to the receptacle for its category. Physics and
//! rendering stay outside: they are reached through [`AgentBody`] and [`SpatialQuery`] and report
//! [`ContactEvent`]s back.
//!
//! With `delivery_enabled = false` the same controller runs the plain foraging task: drained nodes
//! yield nothing and the agent moves straight on to the next node.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actuation;
pub mod area;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod observation;
pub mod policy;
pub mod reward;
pub mod selector;
pub mod spawn;
pub mod world;

pub use actuation::{ActionVector, Actuation, Actuator, ACTION_LEN};
pub use area::ResourceArea;
pub use catalog::CategoryCatalog;
pub use config::{
    AgentConfig, CategoryEntry, EnvironmentConfig, FloatRange, ForageConfig, RewardConfig,
    SpawnConfig,
};
pub use controller::{
    AgentController, AgentState, FnClassifier, ObjectiveKind, StepOutcome, TokenClassifier,
};
pub use error::{ForageError, Result};
pub use observation::{
    Objective, Observation, ObservationDeltas, ObservationEncoder, BASE_FEATURES,
    DELIVERY_FEATURES,
};
pub use policy::{FnPolicy, IdlePolicy, Policy};
pub use reward::RewardShaper;
pub use selector::TargetSelector;
pub use spawn::{FixedSpawner, ReceptacleSpawner, RingSpawner, SpawnPlanner, SpawnPose};
pub use world::{AgentBody, ContactEvent, ContactTarget, SpatialQuery};
