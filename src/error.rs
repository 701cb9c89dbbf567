//! Error handling module for eggsample
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these; the binary wraps them in `anyhow` at the edge.

use thiserror::Error;

/// Main error type for eggsample
#[derive(Error, Debug)]
pub enum EggsampleError {
    /// A cook was asked to prepare or serve before any ingredients were added
    #[error("Uninitialized state: {0}")]
    Uninitialized(String),

    /// IO errors (writing the serving report, reading config)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (validation of loaded values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// State errors (mutex poisoning on a shared tray)
    #[error("State error: {0}")]
    State(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for eggsample operations
pub type Result<T> = std::result::Result<T, EggsampleError>;

impl EggsampleError {
    /// Create an uninitialized state error
    pub fn uninitialized(msg: impl Into<String>) -> Self {
        Self::Uninitialized(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }
}
