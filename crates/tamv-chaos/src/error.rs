//! Error types for the unified API.

use tamv_chaos_core::ChaosError;
use tamv_chaos_seal::SealError;
use thiserror::Error;

/// Errors that can occur during TAMV Chaos operations.
#[derive(Debug, Error)]
pub enum TamvError {
    /// Generator error.
    #[error("chaos error: {0}")]
    Chaos(#[from] ChaosError),

    /// Sealing error.
    #[error("seal error: {0}")]
    Seal(#[from] SealError),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Invalid identifier prefix.
    #[error("invalid id prefix {0:?}: use 1-32 ASCII letters, digits or '_'")]
    InvalidPrefix(String),
}

/// Result type for TAMV Chaos operations.
pub type Result<T> = std::result::Result<T, TamvError>;
