//! Crate error types
//!
//! The policy gate itself is infallible: a missing or malformed environment
//! value is a valid input that maps to the safe default. Errors only arise in
//! the surrounding configuration plumbing.

use thiserror::Error;

/// Errors from configuration loading and setup
#[derive(Error, Debug)]
pub enum ModePolicyError {
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Logging subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModePolicyError {
    /// Create an invalid-configuration error from a message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        ModePolicyError::InvalidConfig(msg.into())
    }
}

/// Result type alias for crate operations
pub type ModePolicyResult<T> = Result<T, ModePolicyError>;
