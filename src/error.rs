//! Error types
//!
//! Gameplay never fails: crashing into an obstacle is a state transition.
//! The only real errors are bad viewport sizes and bad tuning values.

use thiserror::Error;

/// Simulation configuration errors
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid viewport {width}x{height}: width must be positive and height must fit two gaps")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
