//! Tooling primitives for the forage agent.
//!
//! Decision events are recorded as plain data so a run can be inspected or replayed offline.
//! Rendering them is left to whatever consumes the log.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceKind, TraceLog, TraceSink, VecTraceSink};
