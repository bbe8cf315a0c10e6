use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the agent crate.
///
/// Gameplay conditions (malformed samples, missing objectives, mismatched deliveries) are not
/// errors; they have local fallbacks. Only configuration problems and a malformed environment
/// abort.
#[derive(Debug, Error)]
pub enum ForageError {
    #[error("failed to read config from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("no safe spawn position found after {attempts} attempts")]
    NoSafeSpawn { attempts: u32 },

    #[error("freeze/unfreeze is not supported in training mode")]
    FreezeInTraining,
}

pub type Result<T> = std::result::Result<T, ForageError>;
