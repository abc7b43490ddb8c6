//! A chaos engine shared between threads.
//!
//! Every operation runs start to finish under one lock, so a reset and the
//! keystream that follows it can never interleave with another caller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tamv_chaos_core::{ChaosEngine, ChaosSnapshot, ChaoticHash, CosmeticEffects};

use crate::error::Result;

/// A cloneable handle to one engine behind a mutex.
///
/// Text masking uses the wrapped engine's text mode.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<ChaosEngine>>,
}

impl SharedEngine {
    /// Wrap an engine.
    pub fn new(engine: ChaosEngine) -> Self {
        let params = engine.params();
        tracing::debug!(
            seed = params.seed(),
            rate = params.rate(),
            text_mode = ?engine.text_mode(),
            "shared engine created"
        );
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // Every operation leaves the engine consistent, so a panic in another
    // holder does not invalidate the state.
    fn lock(&self) -> MutexGuard<'_, ChaosEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut ChaosEngine) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    /// Return to the seed.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Advance one step.
    pub fn next(&self) -> f64 {
        self.lock().next()
    }

    /// Advance `n` steps atomically.
    pub fn sequence(&self, n: usize) -> Vec<f64> {
        self.lock().sequence(n)
    }

    /// The current state and entropy.
    pub fn current_state(&self) -> ChaosSnapshot {
        self.lock().current_state()
    }

    /// Mask text. Not encryption.
    pub fn encrypt_text(&self, text: &str) -> Result<String> {
        Ok(self.lock().mask_text(text)?)
    }

    /// Reverse [`encrypt_text`](Self::encrypt_text).
    pub fn decrypt_text(&self, encoded: &str) -> Result<String> {
        Ok(self.lock().unmask_text(encoded)?)
    }

    /// Mask a byte buffer. Self-inverse.
    pub fn process_buffer(&self, data: &[u8]) -> Vec<u8> {
        self.lock().process_buffer(data)
    }

    /// Chaotic hash of `input`.
    pub fn chaotic_hash(&self, input: &str) -> ChaoticHash {
        self.lock().chaotic_hash(input)
    }
}

impl CosmeticEffects for SharedEngine {
    fn mask_text(&mut self, text: &str) -> tamv_chaos_core::Result<String> {
        self.lock().mask_text(text)
    }

    fn unmask_text(&mut self, masked: &str) -> tamv_chaos_core::Result<String> {
        self.lock().unmask_text(masked)
    }

    fn mask_bytes(&mut self, data: &[u8]) -> Vec<u8> {
        SharedEngine::process_buffer(self, data)
    }

    fn fingerprint(&mut self, input: &str) -> ChaoticHash {
        SharedEngine::chaotic_hash(self, input)
    }

    fn frame(&mut self) -> ChaosSnapshot {
        self.lock().pulse().tick()
    }
}
