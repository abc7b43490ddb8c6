//! # TAMV Chaos Core
//!
//! Pure primitives for TAMV Chaos: a logistic-map generator and the cosmetic
//! effects derived from it.
//!
//! This crate contains no I/O and no logging. It is pure computation over a
//! single floating-point state.
//!
//! ## Key Types
//!
//! - [`ChaosParams`] - Validated seed and growth rate
//! - [`ChaosEngine`] - The generator: `x = r * x * (1 - x)`
//! - [`Keystream`] - Key bytes `floor(x * 255)` drawn from an engine
//! - [`ChaoticHash`] - 32-bit rolling hash shown as 8 uppercase hex chars
//! - [`CosmeticEffects`] - The interface UI code should depend on
//!
//! ## Not Cryptography
//!
//! The XOR cipher in [`cipher`] has no nonce and no authentication, and its
//! keystream is fixed by the seed. It exists for visual obfuscation and for
//! compatibility with existing masked strings.
//!
//! ```rust
//! use tamv_chaos_core::ChaosEngine;
//!
//! let mut engine = ChaosEngine::default();
//! let masked = engine.encrypt_text("hello");
//! assert_eq!(engine.decrypt_text(&masked).unwrap(), "hello");
//! assert_eq!(engine.chaotic_hash("abc").to_hex(), "0525178E");
//! ```

pub mod animation;
pub mod cipher;
pub mod effects;
pub mod engine;
pub mod error;
pub mod hash;
pub mod keystream;
pub mod params;

pub use animation::Pulse;
pub use cipher::TextMode;
pub use effects::CosmeticEffects;
pub use engine::{ChaosEngine, ChaosSnapshot};
pub use error::{ChaosError, Result};
pub use hash::ChaoticHash;
pub use keystream::{key_byte, Keystream};
pub use params::{ChaosParams, DEFAULT_RATE, DEFAULT_SEED, MAX_RATE};
