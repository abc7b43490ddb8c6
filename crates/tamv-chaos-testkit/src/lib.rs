//! # TAMV Chaos Testkit
//!
//! Testing utilities for TAMV Chaos.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected masked text and hashes
//! - **Generators**: Proptest strategies for seeds, engines, text and buffers
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use tamv_chaos_testkit::vectors::{all_vectors, engine_for_vector};
//!
//! for vector in all_vectors() {
//!     let mut engine = engine_for_vector(&vector);
//!     assert_eq!(engine.encrypt_text(vector.input), vector.expected_masked);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tamv_chaos_testkit::generators::CipherCase;
//!
//! proptest! {
//!     #[test]
//!     fn masking_roundtrips(case: CipherCase) {
//!         let mut engine = case.warmed_engine();
//!         let masked = engine.encrypt_text_with(&case.text, case.mode).unwrap();
//!         prop_assert_eq!(engine.decrypt_text_with(&masked, case.mode).unwrap(), case.text);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use tamv_chaos_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let id = fixture.ids("post").next_id();
//! assert_eq!(id, "post-05065EDD");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_seed_fixtures, TestFixture};
pub use generators::CipherCase;
pub use vectors::{all_vectors, engine_for_vector, verify_all_vectors, GoldenVector};
