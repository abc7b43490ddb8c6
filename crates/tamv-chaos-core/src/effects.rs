//! The cosmetic effects interface.
//!
//! Everything reachable through [`CosmeticEffects`] is presentation-grade:
//! masking for display, short identifiers, animation input. None of it
//! protects data. Authenticated encryption lives in `tamv-chaos-seal` and
//! shares no types with this trait.

use crate::engine::{ChaosEngine, ChaosSnapshot};
use crate::error::Result;
use crate::hash::ChaoticHash;

/// A source of deterministic, non-cryptographic visual effects.
pub trait CosmeticEffects {
    /// Obfuscate text for display. Reversible with [`unmask_text`](Self::unmask_text).
    ///
    /// Uses the implementor's configured [`TextMode`](crate::TextMode).
    fn mask_text(&mut self, text: &str) -> Result<String>;

    /// Reverse [`mask_text`](Self::mask_text).
    fn unmask_text(&mut self, masked: &str) -> Result<String>;

    /// Obfuscate a byte buffer. Self-inverse.
    fn mask_bytes(&mut self, data: &[u8]) -> Vec<u8>;

    /// Short stable identifier for `input`.
    fn fingerprint(&mut self, input: &str) -> ChaoticHash;

    /// Advance one animation frame.
    fn frame(&mut self) -> ChaosSnapshot;
}

impl CosmeticEffects for ChaosEngine {
    fn mask_text(&mut self, text: &str) -> Result<String> {
        let mode = self.text_mode();
        self.encrypt_text_with(text, mode)
    }

    fn unmask_text(&mut self, masked: &str) -> Result<String> {
        let mode = self.text_mode();
        self.decrypt_text_with(masked, mode)
    }

    fn mask_bytes(&mut self, data: &[u8]) -> Vec<u8> {
        self.process_buffer(data)
    }

    fn fingerprint(&mut self, input: &str) -> ChaoticHash {
        self.chaotic_hash(input)
    }

    fn frame(&mut self) -> ChaosSnapshot {
        self.pulse().tick()
    }
}
