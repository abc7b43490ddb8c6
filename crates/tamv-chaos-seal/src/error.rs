//! Error types for sealing.

use thiserror::Error;

/// Errors that can occur while sealing or opening payloads.
#[derive(Debug, Error)]
pub enum SealError {
    /// Encryption error.
    #[error("encryption error: {0}")]
    EncryptionError(String),

    /// Decryption failed: wrong key, wrong context, or tampered ciphertext.
    #[error("decryption error: {0}")]
    DecryptionError(String),

    /// Key derivation error.
    #[error("key derivation error: {0}")]
    KeyDerivationError(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Opened plaintext is not UTF-8.
    #[error("sealed text is not valid UTF-8: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}

/// Result type for seal operations.
pub type Result<T> = std::result::Result<T, SealError>;
