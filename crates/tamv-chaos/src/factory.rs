//! The factory: one validated configuration, many independent engines.
//!
//! There is no process-wide engine. Each animation component, masking call
//! site or ID generator gets its own instance from a factory, so no two
//! logical users ever share a keystream position by accident.

use tamv_chaos_core::{ChaosEngine, ChaosParams, ChaoticHash, TextMode};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::shared::SharedEngine;

/// Builds engines from a validated [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct ChaosFactory {
    params: ChaosParams,
    text_mode: TextMode,
}

impl ChaosFactory {
    /// Validate `config` and create a factory.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let params = config.params()?;
        tracing::debug!(
            seed = params.seed(),
            rate = params.rate(),
            text_mode = ?config.text_mode,
            "chaos factory ready"
        );
        Ok(Self {
            params,
            text_mode: config.text_mode,
        })
    }

    /// Parse a JSON configuration and create a factory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(&EngineConfig::from_json_str(json)?)
    }

    /// The validated parameters every engine starts from.
    pub fn params(&self) -> ChaosParams {
        self.params
    }

    /// The configured text mode.
    pub fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    /// A fresh engine in the configured text mode, owned by the caller.
    pub fn engine(&self) -> ChaosEngine {
        ChaosEngine::new(self.params).with_text_mode(self.text_mode)
    }

    /// An engine that can be shared across threads.
    pub fn shared(&self) -> SharedEngine {
        SharedEngine::new(self.engine())
    }

    /// An identifier generator with its own engine.
    pub fn id_generator(&self, prefix: &str) -> Result<IdGenerator> {
        IdGenerator::new(self.engine(), prefix)
    }

    /// Mask text using the configured text mode. Not encryption.
    pub fn encrypt_text(&self, text: &str) -> Result<String> {
        Ok(self.engine().encrypt_text_with(text, self.text_mode)?)
    }

    /// Reverse [`encrypt_text`](Self::encrypt_text).
    pub fn decrypt_text(&self, encoded: &str) -> Result<String> {
        Ok(self.engine().decrypt_text_with(encoded, self.text_mode)?)
    }

    /// Mask a byte buffer. Self-inverse.
    pub fn process_buffer(&self, data: &[u8]) -> Vec<u8> {
        self.engine().process_buffer(data)
    }

    /// Chaotic hash of `input` from the configured seed.
    pub fn chaotic_hash(&self, input: &str) -> ChaoticHash {
        self.engine().chaotic_hash(input)
    }
}

impl Default for ChaosFactory {
    fn default() -> Self {
        Self {
            params: ChaosParams::default(),
            text_mode: TextMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TamvError;
    use tamv_chaos_core::CosmeticEffects;

    #[test]
    fn test_engines_are_independent() {
        let factory = ChaosFactory::default();
        let mut a = factory.engine();
        let mut b = factory.engine();

        a.sequence(50);
        assert_eq!(b.next(), 0.9154268270360655);
        assert_ne!(a.state(), b.state());
    }

    #[test]
    fn test_text_roundtrip_default_mode() {
        let factory = ChaosFactory::default();
        let masked = factory.encrypt_text("abc").unwrap();
        assert_eq!(masked, "iCy5");
        assert_eq!(factory.decrypt_text(&masked).unwrap(), "abc");
    }

    #[test]
    fn test_latin1_mode_from_config() {
        let factory = ChaosFactory::from_json_str(r#"{"text_mode": "latin1"}"#).unwrap();
        assert_eq!(factory.encrypt_text("héllo wörld").unwrap(), "gae2EpEgd/d0dT8=");
        assert!(matches!(
            factory.encrypt_text("\u{1F680}"),
            Err(TamvError::Chaos(_))
        ));
    }

    #[test]
    fn test_owned_and_shared_engines_mask_alike() {
        fn mask<E: CosmeticEffects>(effects: &mut E) -> String {
            effects.mask_text("héllo wörld").unwrap()
        }

        let factory = ChaosFactory::from_json_str(r#"{"text_mode": "latin1"}"#).unwrap();
        let owned = mask(&mut factory.engine());
        let shared = mask(&mut factory.shared());
        assert_eq!(owned, "gae2EpEgd/d0dT8=");
        assert_eq!(owned, shared);
        assert_eq!(factory.engine().text_mode(), TextMode::Latin1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(ChaosFactory::from_json_str(r#"{"seed": 0}"#).is_err());
        assert!(ChaosFactory::from_json_str(r#"{"rate": 4.5}"#).is_err());
        assert!(ChaosFactory::from_json_str("not json").is_err());
    }

    #[test]
    fn test_hash_and_buffer() {
        let factory = ChaosFactory::default();
        assert_eq!(factory.chaotic_hash("abc").to_hex(), "0525178E");
        let masked = factory.process_buffer(b"payload");
        assert_eq!(factory.process_buffer(&masked), b"payload");
    }
}
