//! # TAMV Chaos
//!
//! The unified API for TAMV Chaos: deterministic chaotic effects for the UI,
//! and a separate sealed channel for data that must stay private.
//!
//! ## Overview
//!
//! - **Engines**: logistic-map generators, one per logical use
//! - **Masking**: reversible XOR obfuscation of text and bytes (not encryption)
//! - **Hashes and IDs**: 8-character chaotic hashes and `prefix-HASH` identifiers
//! - **Animation**: per-tick snapshots with a cosmetic entropy value
//! - **Sealing**: ChaCha20-Poly1305 envelopes for real confidentiality
//!
//! ## Usage
//!
//! ```rust
//! use tamv_chaos::{ChaosFactory, EngineConfig};
//!
//! let factory = ChaosFactory::new(&EngineConfig::default()).unwrap();
//!
//! // Each caller owns its engine.
//! let mut engine = factory.engine();
//! let masked = engine.encrypt_text("hello");
//! assert_eq!(engine.decrypt_text(&masked).unwrap(), "hello");
//!
//! // Identifiers come from a generator with its own engine.
//! let mut ids = factory.id_generator("post").unwrap();
//! let id = ids.next_id();
//! assert!(id.starts_with("post-"));
//! ```
//!
//! ## Re-exports
//!
//! - `tamv_chaos::core` - Generator, cipher, hash, effects interface
//! - `tamv_chaos::seal` - Authenticated encryption

pub mod config;
pub mod error;
pub mod factory;
pub mod ids;
pub mod shared;

// Re-export component crates
pub use tamv_chaos_core as core;
pub use tamv_chaos_seal as seal;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use error::{Result, TamvError};
pub use factory::ChaosFactory;
pub use ids::IdGenerator;
pub use shared::SharedEngine;

// Re-export commonly used core types
pub use tamv_chaos_core::{
    ChaosEngine, ChaosParams, ChaosSnapshot, ChaoticHash, CosmeticEffects, TextMode,
};
pub use tamv_chaos_seal::{SealedPayload, SealingKey};
