//! Unified error types.

use thiserror::Error;

/// Top-level error for all formatters.
#[derive(Error, Debug)]
pub enum PoolviewError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl PoolviewError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PoolviewError::InvalidInput(reason.into())
    }
}
