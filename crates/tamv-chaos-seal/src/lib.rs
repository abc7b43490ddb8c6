//! # TAMV Chaos Seal
//!
//! Authenticated encryption for anything that must actually stay private.
//!
//! ## Overview
//!
//! The chaotic cipher in `tamv-chaos-core` is cosmetic. When a payload needs
//! confidentiality or integrity (wallet data, chat transcripts), seal it
//! here instead. The two crates share no types, so a masked string can never
//! be passed where a sealed payload is expected.
//!
//! ## Encryption Model
//!
//! - **Key**: a 256-bit [`SealingKey`], random or derived with Blake3 from
//!   high-entropy secret material and a purpose label
//! - **Cipher**: ChaCha20-Poly1305 with a fresh random 96-bit nonce per seal
//! - **Envelope**: [`SealedPayload`], serialized as CBOR
//!
//! ## Usage
//!
//! ```rust
//! use tamv_chaos_seal::{SealedPayload, SealingKey};
//!
//! let key = SealingKey::derive(b"session secret", b"wallet").unwrap();
//! let sealed = SealedPayload::seal_text("balance: 42", &key, b"").unwrap();
//! let bytes = sealed.to_bytes().unwrap();
//!
//! let opened = SealedPayload::from_bytes(&bytes).unwrap();
//! assert_eq!(opened.open_text(&key, b"").unwrap(), "balance: 42");
//! ```

pub mod crypto;
pub mod envelope;
pub mod error;

pub use crypto::{SealNonce, SealingKey};
pub use envelope::{SealFormat, SealedPayload};
pub use error::{Result, SealError};
