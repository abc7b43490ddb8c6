//! Cosmetic XOR cipher over text and byte buffers.
//!
//! **Not encryption.** There is no nonce and no authentication, and the
//! keystream is fixed by the seed: two messages masked with the same seed
//! leak their XOR. Use it for visual effects and obfuscated display only.
//! Real confidentiality belongs to the `tamv-chaos-seal` crate.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::engine::ChaosEngine;
use crate::error::{ChaosError, Result};

/// How text is turned into bytes before masking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    /// Mask the UTF-8 encoding, one key byte per encoded byte.
    /// Round-trips every string.
    #[default]
    Utf8,
    /// Mask one key byte per character. Characters must be at most U+00FF.
    /// Matches the legacy single-byte-per-character ciphertext.
    Latin1,
}

impl ChaosEngine {
    /// Mask `text` in [`TextMode::Utf8`] and encode it as padded base64.
    ///
    /// Resets the engine first.
    pub fn encrypt_text(&mut self, text: &str) -> String {
        let mut bytes = text.as_bytes().to_vec();
        self.keystream_from_seed().apply(&mut bytes);
        STANDARD.encode(bytes)
    }

    /// Reverse [`encrypt_text`](Self::encrypt_text).
    ///
    /// Legacy ciphertext made with one key byte per character differs from
    /// this mode for characters above U+007F. Decode it with
    /// [`decrypt_text_with`](Self::decrypt_text_with) and [`TextMode::Latin1`].
    pub fn decrypt_text(&mut self, encoded: &str) -> Result<String> {
        self.decrypt_text_with(encoded, TextMode::Utf8)
    }

    /// Mask `text` with an explicit text mode.
    pub fn encrypt_text_with(&mut self, text: &str, mode: TextMode) -> Result<String> {
        match mode {
            TextMode::Utf8 => Ok(self.encrypt_text(text)),
            TextMode::Latin1 => {
                let mut bytes = latin1_bytes(text)?;
                self.keystream_from_seed().apply(&mut bytes);
                Ok(STANDARD.encode(bytes))
            }
        }
    }

    /// Decode base64, regenerate the keystream from the seed and unmask.
    ///
    /// Fails with [`ChaosError::Decode`] on malformed base64, and with
    /// [`ChaosError::InvalidText`] if the unmasked bytes are not UTF-8 in
    /// [`TextMode::Utf8`].
    pub fn decrypt_text_with(&mut self, encoded: &str, mode: TextMode) -> Result<String> {
        let mut bytes = STANDARD.decode(encoded)?;
        self.keystream_from_seed().apply(&mut bytes);

        match mode {
            TextMode::Utf8 => {
                String::from_utf8(bytes).map_err(|e| ChaosError::InvalidText(e.to_string()))
            }
            TextMode::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }

    /// XOR the seed's keystream over a byte buffer.
    ///
    /// Resets first, so applying it twice returns the input.
    pub fn process_buffer(&mut self, data: &[u8]) -> Vec<u8> {
        let mut out = data.to_vec();
        self.keystream_from_seed().apply(&mut out);
        out
    }
}

fn latin1_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| ChaosError::UnsupportedCharacter { ch, index }))
        .collect()
}
