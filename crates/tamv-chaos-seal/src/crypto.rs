//! Key and nonce types for ChaCha20-Poly1305.

use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SealError};

const DERIVE_CONTEXT: &str = "tamv-chaos-seal-v1 sealing key";

/// A 256-bit symmetric key for ChaCha20-Poly1305.
#[derive(Clone)]
pub struct SealingKey([u8; 32]);

impl SealingKey {
    /// Generate a new random key.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derive a key from high-entropy secret material and a purpose label.
    ///
    /// Blake3 in key-derivation mode. There is no work factor, so
    /// human-chosen passwords need a password hash before this.
    pub fn derive(secret: &[u8], purpose: &[u8]) -> Result<Self> {
        if secret.is_empty() {
            return Err(SealError::KeyDerivationError(
                "secret material is empty".into(),
            ));
        }
        let mut hasher = blake3::Hasher::new_derive_key(DERIVE_CONTEXT);
        hasher.update(&(secret.len() as u64).to_le_bytes());
        hasher.update(secret);
        hasher.update(purpose);
        Ok(Self(*hasher.finalize().as_bytes()))
    }

    /// Encrypt and authenticate `plaintext`, binding `aad` to the ciphertext.
    pub fn encrypt(&self, plaintext: &[u8], nonce: &SealNonce, aad: &[u8]) -> Result<Vec<u8>> {
        let cipher = ChaCha20Poly1305::new_from_slice(&self.0)
            .map_err(|e| SealError::EncryptionError(e.to_string()))?;

        cipher
            .encrypt(Nonce::from_slice(&nonce.0), Payload { msg: plaintext, aad })
            .map_err(|e| SealError::EncryptionError(e.to_string()))
    }

    /// Verify and decrypt `ciphertext`. `aad` must match what was sealed.
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &SealNonce, aad: &[u8]) -> Result<Vec<u8>> {
        let cipher = ChaCha20Poly1305::new_from_slice(&self.0)
            .map_err(|e| SealError::DecryptionError(e.to_string()))?;

        cipher
            .decrypt(Nonce::from_slice(&nonce.0), Payload { msg: ciphertext, aad })
            .map_err(|e| SealError::DecryptionError(e.to_string()))
    }
}

impl fmt::Debug for SealingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SealingKey(..)")
    }
}

/// A 96-bit nonce for ChaCha20-Poly1305.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealNonce(pub [u8; 12]);

impl SealNonce {
    /// Generate a new random nonce.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 12];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}
