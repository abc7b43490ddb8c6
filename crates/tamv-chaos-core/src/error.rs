//! Error types for TAMV Chaos Core.

use thiserror::Error;

/// Errors that can occur when building or using a chaos engine.
#[derive(Debug, Error)]
pub enum ChaosError {
    #[error("seed must be finite and strictly between 0 and 1, got {0}")]
    InvalidSeed(f64),

    #[error("rate must be finite and in (0, 4), got {0}")]
    InvalidRate(f64),

    #[error("seed {seed} is degenerate at rate {rate}: {reason}")]
    DegenerateSeed {
        seed: f64,
        rate: f64,
        reason: &'static str,
    },

    #[error("base64 decoding error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("unmasked bytes are not valid text: {0}")]
    InvalidText(String),

    #[error("character {ch:?} at index {index} does not fit in a single byte")]
    UnsupportedCharacter { ch: char, index: usize },
}

/// Result type for chaos operations.
pub type Result<T> = std::result::Result<T, ChaosError>;
