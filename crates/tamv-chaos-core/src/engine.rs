//! The logistic-map generator.
//!
//! A [`ChaosEngine`] holds one scalar `x` and advances it with
//! `x = r * x * (1 - x)`. Every derived operation (keystream, cipher, hash)
//! resets to the seed first, so its output depends on the seed alone.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::cipher::TextMode;
use crate::error::Result;
use crate::keystream::Keystream;
use crate::params::ChaosParams;

/// Observable generator state, used to drive animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaosSnapshot {
    /// The current scalar state.
    pub x: f64,
    /// `|sin(x * pi * 100)| * 100`, in `[0, 100]`.
    pub entropy: f64,
}

impl ChaosSnapshot {
    /// Build the snapshot for a given state.
    pub fn from_state(x: f64) -> Self {
        Self {
            x,
            entropy: (x * PI * 100.0).sin().abs() * 100.0,
        }
    }

    /// Map `x` linearly onto `[min, max]`.
    pub fn scaled(&self, min: f64, max: f64) -> f64 {
        min + self.x * (max - min)
    }

    /// Entropy normalised to `[0, 1]`.
    pub fn entropy_ratio(&self) -> f64 {
        self.entropy / 100.0
    }
}

/// A deterministic chaotic stream generator.
///
/// Not thread-safe by itself: every advancing operation takes `&mut self`.
/// Share one across threads through a mutex, or build one per logical use.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaosEngine {
    params: ChaosParams,
    x: f64,
    text_mode: TextMode,
}

impl ChaosEngine {
    /// Create an engine from validated parameters.
    pub fn new(params: ChaosParams) -> Self {
        Self {
            params,
            x: params.seed(),
            text_mode: TextMode::default(),
        }
    }

    /// Set the text mode used by [`CosmeticEffects`](crate::CosmeticEffects) masking.
    ///
    /// [`encrypt_text`](Self::encrypt_text) and
    /// [`decrypt_text`](Self::decrypt_text) always use [`TextMode::Utf8`].
    pub fn with_text_mode(mut self, text_mode: TextMode) -> Self {
        self.text_mode = text_mode;
        self
    }

    /// The text mode used for effects masking.
    pub fn text_mode(&self) -> TextMode {
        self.text_mode
    }

    /// Create an engine with the given seed at the default rate.
    ///
    /// Rejects seeds outside `(0, 1)` and seeds on short cycles.
    pub fn with_seed(seed: f64) -> Result<Self> {
        Ok(Self::new(ChaosParams::with_seed(seed)?))
    }

    /// The parameters this engine was built with.
    pub fn params(&self) -> ChaosParams {
        self.params
    }

    /// The current scalar state.
    pub fn state(&self) -> f64 {
        self.x
    }

    /// Return to the seed.
    pub fn reset(&mut self) {
        self.x = self.params.seed();
    }

    /// Advance one step and return the new state.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.x = self.params.rate() * self.x * (1.0 - self.x);
        self.x
    }

    /// Advance `n` steps, collecting every state in order.
    ///
    /// Continues from the current position; call [`reset`](Self::reset) first
    /// for a reproducible sequence.
    pub fn sequence(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next()).collect()
    }

    /// The current state and its derived entropy.
    pub fn current_state(&self) -> ChaosSnapshot {
        ChaosSnapshot::from_state(self.x)
    }

    /// Key bytes drawn from the current position onward.
    pub fn keystream(&mut self) -> Keystream<'_> {
        Keystream::new(self)
    }

    /// Key bytes drawn from the seed.
    pub fn keystream_from_seed(&mut self) -> Keystream<'_> {
        self.reset();
        Keystream::new(self)
    }
}

impl Default for ChaosEngine {
    fn default() -> Self {
        Self::new(ChaosParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DEFAULT_RATE, DEFAULT_SEED};

    #[test]
    fn test_first_step_exact() {
        let mut engine = ChaosEngine::default();
        let expected = 3.9999 * 0.35461234 * (1.0 - 0.35461234);
        assert_eq!(engine.next(), expected);
        assert_eq!(expected, 0.9154268270360655);
    }

    #[test]
    fn test_known_prefix() {
        let mut engine = ChaosEngine::default();
        let seq = engine.sequence(3);
        let expected = [0.9154268270360655, 0.30967446345984984, 0.8550833829438017];
        for (got, want) in seq.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_sequence_zero_is_empty() {
        let mut engine = ChaosEngine::default();
        assert!(engine.sequence(0).is_empty());
        assert_eq!(engine.state(), DEFAULT_SEED);
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut engine = ChaosEngine::default();
        let first = engine.sequence(10);
        assert_ne!(engine.state(), DEFAULT_SEED);

        engine.reset();
        assert_eq!(engine.state(), DEFAULT_SEED);
        assert_eq!(engine.sequence(10), first);
    }

    #[test]
    fn test_sequence_continues_without_reset() {
        let mut engine = ChaosEngine::default();
        let a = engine.sequence(5);
        let b = engine.sequence(5);

        let mut fresh = ChaosEngine::default();
        let all = fresh.sequence(10);
        assert_eq!([a, b].concat(), all);
    }

    #[test]
    fn test_stays_bounded() {
        let mut engine = ChaosEngine::default();
        for i in 0..10_000 {
            let x = engine.next();
            assert!(!x.is_nan(), "NaN at step {i}");
            assert!(x > 0.0 && x < 1.0, "x = {x} out of range at step {i}");
        }
    }

    #[test]
    fn test_current_state_entropy() {
        let mut engine = ChaosEngine::default();
        engine.next();
        let snap = engine.current_state();
        assert_eq!(snap.x, engine.state());
        let expected = (snap.x * PI * 100.0).sin().abs() * 100.0;
        assert_eq!(snap.entropy, expected);
        assert!((0.0..=100.0).contains(&snap.entropy));
    }

    #[test]
    fn test_snapshot_scaling() {
        let snap = ChaosSnapshot::from_state(0.25);
        assert_eq!(snap.scaled(0.0, 4.0), 1.0);
        assert_eq!(snap.scaled(10.0, 20.0), 12.5);
        assert!(snap.entropy_ratio() <= 1.0);
    }

    #[test]
    fn test_with_seed_rejects_degenerate() {
        assert!(ChaosEngine::with_seed(0.0).is_err());
        assert!(ChaosEngine::with_seed(1.0 - 1.0 / DEFAULT_RATE).is_err());
        assert!(ChaosEngine::with_seed(0.2).is_ok());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = ChaosEngine::with_seed(0.2).unwrap();
        let mut b = ChaosEngine::with_seed(0.2000001).unwrap();
        let sa = a.sequence(64);
        let sb = b.sequence(64);
        assert_ne!(sa, sb);
    }
}
