//! Error types for the simulation core.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors surfaced by the simulation and its config layer.
///
/// Precondition violations fail loudly through `InvalidParam` rather than
/// silently producing NaN state.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid caller-supplied parameter (non-positive radius, dt, table
    /// dimension, coincident aim points, ...).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Config file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config JSON could not be parsed or written.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
