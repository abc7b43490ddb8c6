//! Golden test vectors for deterministic verification.
//!
//! These pin the generator, keystream, masked text and hash so that any
//! port of the engine can be checked value for value.

use serde::Serialize;
use tamv_chaos_core::{ChaosEngine, ChaosParams};

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Generator seed.
    pub seed: f64,
    /// Generator rate.
    pub rate: f64,
    /// Input text.
    pub input: &'static str,
    /// Expected base64 masked text.
    pub expected_masked: &'static str,
    /// Expected chaotic hash.
    pub expected_hash: &'static str,
}

/// The first states from the default parameters.
pub const DEFAULT_FIRST_STATES: [f64; 3] =
    [0.9154268270360655, 0.30967446345984984, 0.8550833829438017];

/// The first 16 keystream bytes from the default parameters.
pub const DEFAULT_KEYSTREAM: [u8; 16] = [
    233, 78, 218, 126, 254, 0, 0, 1, 6, 25, 91, 234, 75, 211, 143, 251,
];

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty input",
            seed: 0.35461234,
            rate: 3.9999,
            input: "",
            expected_masked: "",
            expected_hash: "00000000",
        },
        GoldenVector {
            name: "abc",
            seed: 0.35461234,
            rate: 3.9999,
            input: "abc",
            expected_masked: "iCy5",
            expected_hash: "0525178E",
        },
        GoldenVector {
            name: "ascii greeting",
            seed: 0.35461234,
            rate: 3.9999,
            input: "Hello, TAMV!",
            expected_masked: "oSu2EpEsIFVHVA3L",
            expected_hash: "2402C89E",
        },
        GoldenVector {
            name: "accented text",
            seed: 0.35461234,
            rate: 3.9999,
            input: "héllo wörld",
            expected_masked: "gY1zEpJvIHbFrymGLw==",
            expected_hash: "564D5533",
        },
        GoldenVector {
            name: "astral code point",
            seed: 0.35461234,
            rate: 3.9999,
            input: "\u{1F680}",
            expected_masked: "GdFA/g==",
            expected_hash: "5EA3EF59",
        },
        GoldenVector {
            name: "alternate seed",
            seed: 0.7,
            rate: 3.9999,
            input: "secret",
            expected_masked: "peyed3Mm",
            expected_hash: "7D5F566E",
        },
    ]
}

/// Build the engine a vector describes.
pub fn engine_for_vector(vector: &GoldenVector) -> ChaosEngine {
    // Vector parameters are known good; skip the orbit probe.
    let params = ChaosParams::new(vector.seed, vector.rate)
        .unwrap_or_else(|e| panic!("vector '{}' has invalid params: {e}", vector.name));
    ChaosEngine::new(params)
}

/// Check every vector, returning `(name, matches, masked, hash)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let mut engine = engine_for_vector(v);
            let masked = engine.encrypt_text(v.input);
            let hash = engine.chaotic_hash(v.input).to_hex();
            let matches = masked == v.expected_masked && hash == v.expected_hash;
            (v.name.to_string(), matches, masked, hash)
        })
        .collect()
}

/// Render all vectors as pretty JSON for other implementations.
pub fn vectors_json() -> String {
    serde_json::to_string_pretty(&all_vectors()).unwrap_or_default()
}
