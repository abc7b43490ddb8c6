//! Sealed payload envelope.
//!
//! A [`SealedPayload`] carries everything needed to open it except the key:
//! the algorithm, the nonce and the authenticated ciphertext.

use serde::{Deserialize, Serialize};

use crate::crypto::{SealNonce, SealingKey};
use crate::error::{Result, SealError};

/// Format identifier for sealed payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SealFormat {
    /// ChaCha20-Poly1305 with 256-bit key.
    ChaCha20Poly1305 = 1,
}

/// An authenticated, encrypted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedPayload {
    /// Encryption algorithm used.
    pub format: SealFormat,

    /// Nonce used for encryption (fresh per seal).
    pub nonce: SealNonce,

    /// The encrypted data (includes authentication tag).
    pub ciphertext: Vec<u8>,
}

impl SealedPayload {
    /// Seal `plaintext` under `key` with a fresh random nonce.
    ///
    /// `aad` is authenticated but not encrypted; the same bytes must be
    /// supplied to [`open`](Self::open).
    pub fn seal(plaintext: &[u8], key: &SealingKey, aad: &[u8]) -> Result<Self> {
        let nonce = SealNonce::generate();
        let ciphertext = key.encrypt(plaintext, &nonce, aad)?;

        Ok(Self {
            format: SealFormat::ChaCha20Poly1305,
            nonce,
            ciphertext,
        })
    }

    /// Verify and decrypt.
    pub fn open(&self, key: &SealingKey, aad: &[u8]) -> Result<Vec<u8>> {
        match self.format {
            SealFormat::ChaCha20Poly1305 => key.decrypt(&self.ciphertext, &self.nonce, aad),
        }
    }

    /// Seal a string.
    pub fn seal_text(text: &str, key: &SealingKey, aad: &[u8]) -> Result<Self> {
        Self::seal(text.as_bytes(), key, aad)
    }

    /// Open a payload sealed with [`seal_text`](Self::seal_text).
    pub fn open_text(&self, key: &SealingKey, aad: &[u8]) -> Result<String> {
        Ok(String::from_utf8(self.open(key, aad)?)?)
    }

    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf)
            .map_err(|e| SealError::SerializationError(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| SealError::SerializationError(e.to_string()))
    }

    /// Get the size of the ciphertext.
    pub fn ciphertext_len(&self) -> usize {
        self.ciphertext.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seal_open_roundtrip() {
        let key = SealingKey::generate();
        let plaintext = b"hello, sealed world!";

        let sealed = SealedPayload::seal(plaintext, &key, b"").unwrap();
        assert_eq!(sealed.ciphertext_len(), plaintext.len() + 16);
        assert_eq!(sealed.open(&key, b"").unwrap(), plaintext);
    }

    #[test]
    fn test_nonce_fresh_per_seal() {
        let key = SealingKey::generate();
        let a = SealedPayload::seal(b"same", &key, b"").unwrap();
        let b = SealedPayload::seal(b"same", &key, b"").unwrap();
        assert_ne!(a.nonce, b.nonce);
        assert_ne!(a.ciphertext, b.ciphertext);
    }

    #[test]
    fn test_envelope_serialization() {
        let key = SealingKey::generate();
        let sealed = SealedPayload::seal(b"test", &key, b"").unwrap();

        let bytes = sealed.to_bytes().unwrap();
        let recovered = SealedPayload::from_bytes(&bytes).unwrap();

        assert_eq!(sealed, recovered);
        assert_eq!(recovered.open(&key, b"").unwrap(), b"test");
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            SealedPayload::from_bytes(&[0xff, 0x00, 0x13]),
            Err(SealError::SerializationError(_))
        ));
    }

    #[test]
    fn test_wrong_key_fails() {
        let key1 = SealingKey::generate();
        let key2 = SealingKey::generate();

        let sealed = SealedPayload::seal(b"secret", &key1, b"").unwrap();
        assert!(sealed.open(&key2, b"").is_err());
    }

    #[test]
    fn test_text_roundtrip() {
        let key = SealingKey::derive(b"session secret", b"chat").unwrap();
        let sealed = SealedPayload::seal_text("héllo \u{1F680}", &key, b"msg-1").unwrap();
        assert_eq!(sealed.open_text(&key, b"msg-1").unwrap(), "héllo \u{1F680}");
        assert!(sealed.open_text(&key, b"msg-2").is_err());
    }

    proptest! {
        #[test]
        fn prop_seal_open(data in prop::collection::vec(any::<u8>(), 0..256), aad in prop::collection::vec(any::<u8>(), 0..32)) {
            let key = SealingKey::generate();
            let sealed = SealedPayload::seal(&data, &key, &aad).unwrap();
            prop_assert_eq!(sealed.open(&key, &aad).unwrap(), data);
        }
    }
}
