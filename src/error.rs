//! Error types
//!
//! Only start-up concerns can fail. The simulation itself never errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Transition requested to a screen that was never registered
    #[error("unknown screen state '{0}'")]
    UnknownState(String),

    /// Missing or undecodable sprite sheet
    #[error("failed to load resource {path}: {reason}")]
    ResourceLoad { path: PathBuf, reason: String },

    /// Config file present but invalid
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
