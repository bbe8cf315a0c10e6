//! Umbrella crate that re-exports the `forage-*` building blocks.
//!
//! Most users want the `agent` feature (on by default) and start from
//! [`agent::AgentController`](forage_agent::AgentController).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use forage_core as core;

#[cfg(feature = "classify")]
#[cfg_attr(docsrs, doc(cfg(feature = "classify")))]
pub use forage_classify as classify;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use forage_tools as tools;

#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub use forage_agent as agent;
