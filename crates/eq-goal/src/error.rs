// error.rs — Error types for the goal engine.

use thiserror::Error;

/// Errors that can occur during goal engine operations.
#[derive(Debug, Error)]
pub enum GoalError {
    /// An event was recorded against an index outside the goal list.
    /// Recoverable: the manager's score and goals are left untouched.
    #[error("goal index {index} is out of range ({len} goal(s) tracked)")]
    OutOfRange { index: usize, len: usize },

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize event data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The settings file exists but could not be parsed.
    #[error("invalid config at {path}: {source}")]
    ConfigError {
        path: String,
        source: toml::de::Error,
    },

    /// A notification dispatch failed (non-fatal).
    #[error("notification error: {0}")]
    NotificationError(String),
}
