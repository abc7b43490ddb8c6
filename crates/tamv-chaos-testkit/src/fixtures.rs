//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use tamv_chaos::{ChaosEngine, ChaosFactory, EngineConfig, IdGenerator, SharedEngine};
use tamv_chaos_seal::SealingKey;

/// A test fixture with a factory and a deterministic sealing key.
pub struct TestFixture {
    pub factory: ChaosFactory,
    pub key: SealingKey,
}

impl TestFixture {
    /// Create a fixture with the default configuration.
    pub fn new() -> Self {
        Self {
            factory: ChaosFactory::default(),
            key: SealingKey::from_bytes([0x42; 32]),
        }
    }

    /// Create a fixture with a specific seed.
    ///
    /// Panics if the seed is rejected; fixtures are for tests.
    pub fn with_seed(seed: f64) -> Self {
        let factory = ChaosFactory::new(&EngineConfig::with_seed(seed))
            .unwrap_or_else(|e| panic!("fixture seed {seed} rejected: {e}"));
        Self {
            factory,
            key: SealingKey::from_bytes([0x42; 32]),
        }
    }

    /// A fresh engine.
    pub fn engine(&self) -> ChaosEngine {
        self.factory.engine()
    }

    /// A fresh shared engine.
    pub fn shared(&self) -> SharedEngine {
        self.factory.shared()
    }

    /// A reproducible identifier generator (salt 0).
    pub fn ids(&self, prefix: &str) -> IdGenerator {
        IdGenerator::with_salt(self.engine(), prefix, 0)
            .unwrap_or_else(|e| panic!("fixture prefix {prefix:?} rejected: {e}"))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create fixtures with distinct, evenly spread seeds.
pub fn multi_seed_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| TestFixture::with_seed((i as f64 + 1.0) / (count as f64 + 2.0) + 0.0123))
        .collect()
}
