//! Classification aggregation.
//!
//! A scorer turns one sample into per-class scores; this crate turns those scores into a class
//! (argmax, lowest ordinal on ties), guards the scorer against malformed input, and reduces a batch
//! to its most common class(es) with a deterministic result for any input order.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod calibration;
pub mod classifier;
pub mod prediction;
pub mod scorer;
pub mod tally;

pub use calibration::{LabelReport, LabelledSet};
pub use classifier::Classifier;
pub use prediction::Prediction;
pub use scorer::{FnScorer, Scorer};
pub use tally::{most_common, most_common_by, Leaders, VoteTally};
