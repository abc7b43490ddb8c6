//! Short display identifiers such as `post-2A406476`.
//!
//! Each generator owns its effects source and a counter. Identifiers are
//! unique per generator until the 32-bit hash collides; they are labels for
//! the UI, not database keys.

use rand::Rng;
use tamv_chaos_core::{ChaosEngine, CosmeticEffects};

use crate::error::{Result, TamvError};

const MAX_PREFIX_LEN: usize = 32;

/// Generates `prefix-HASH` identifiers from a chaotic hash.
///
/// The hashed input is `counter:salt:prefix`, so a fixed salt makes the
/// sequence reproducible and a random salt makes it differ between runs.
#[derive(Debug)]
pub struct IdGenerator<E: CosmeticEffects = ChaosEngine> {
    effects: E,
    prefix: String,
    salt: u64,
    counter: u64,
}

impl<E: CosmeticEffects> IdGenerator<E> {
    /// Create a generator with a random salt.
    pub fn new(effects: E, prefix: &str) -> Result<Self> {
        Self::with_salt(effects, prefix, rand::thread_rng().gen())
    }

    /// Create a generator with a fixed salt.
    pub fn with_salt(effects: E, prefix: &str, salt: u64) -> Result<Self> {
        validate_prefix(prefix)?;
        tracing::debug!(prefix, "id generator created");
        Ok(Self {
            effects,
            prefix: prefix.to_string(),
            salt,
            counter: 0,
        })
    }

    /// The identifier prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// How many identifiers have been issued.
    pub fn issued(&self) -> u64 {
        self.counter
    }

    /// Issue the next identifier.
    pub fn next_id(&mut self) -> String {
        let input = format!("{}:{:016x}:{}", self.counter, self.salt, self.prefix);
        let hash = self.effects.fingerprint(&input);
        self.counter += 1;

        let id = format!("{}-{}", self.prefix, hash);
        tracing::trace!(%id, counter = self.counter, "issued id");
        id
    }
}

impl<E: CosmeticEffects> Iterator for IdGenerator<E> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_id())
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    let ok = !prefix.is_empty()
        && prefix.len() <= MAX_PREFIX_LEN
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if ok {
        Ok(())
    } else {
        Err(TamvError::InvalidPrefix(prefix.to_string()))
    }
}
