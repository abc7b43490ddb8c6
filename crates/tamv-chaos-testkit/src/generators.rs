//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tamv_chaos_core::{ChaosEngine, ChaosParams, TextMode, DEFAULT_RATE};

/// Generate a seed that passes the degeneracy probe at the default rate.
pub fn seed() -> impl Strategy<Value = f64> {
    (1e-6f64..(1.0 - 1e-6)).prop_filter("degenerate seed", |s| {
        ChaosParams::strict(*s, DEFAULT_RATE).is_ok()
    })
}

/// Generate a rate in the chaotic regime.
///
/// Capped at the default rate, well clear of 4 where a state near 0.5 rounds to 1.
pub fn chaotic_rate() -> impl Strategy<Value = f64> {
    3.6f64..=DEFAULT_RATE
}

/// Generate validated parameters in the chaotic regime.
pub fn params() -> impl Strategy<Value = ChaosParams> {
    (1e-6f64..(1.0 - 1e-6), chaotic_rate())
        .prop_filter_map("degenerate params", |(s, r)| ChaosParams::strict(s, r).ok())
}

/// Generate a fresh engine.
pub fn engine() -> impl Strategy<Value = ChaosEngine> {
    params().prop_map(ChaosEngine::new)
}

/// Generate arbitrary text, including characters outside the BMP.
pub fn text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=max_len).prop_map(|cs| cs.into_iter().collect())
}

/// Generate text that fits [`TextMode::Latin1`].
pub fn latin1_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..=255, 0..=max_len)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Generate a byte buffer of specified max length.
pub fn buffer(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a valid identifier prefix.
pub fn id_prefix() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_map(String::from)
}

/// Parameters for a masking round-trip case.
#[derive(Debug, Clone)]
pub struct CipherCase {
    pub params: ChaosParams,
    pub mode: TextMode,
    pub text: String,
    /// Steps taken before masking, to show the prior position is irrelevant.
    pub warmup: usize,
}

impl Arbitrary for CipherCase {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (params(), any::<bool>(), 0usize..64)
            .prop_flat_map(|(params, latin1, warmup)| {
                let text = if latin1 { latin1_text(64).boxed() } else { text(64).boxed() };
                let mode = if latin1 { TextMode::Latin1 } else { TextMode::Utf8 };
                text.prop_map(move |text| CipherCase {
                    params,
                    mode,
                    text,
                    warmup,
                })
            })
            .boxed()
    }
}

impl CipherCase {
    /// An engine advanced by `warmup` steps.
    pub fn warmed_engine(&self) -> ChaosEngine {
        let mut engine = ChaosEngine::new(self.params);
        engine.sequence(self.warmup);
        engine
    }
}
