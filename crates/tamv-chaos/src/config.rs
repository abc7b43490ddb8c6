//! Engine configuration.

use serde::{Deserialize, Serialize};
use tamv_chaos_core::{ChaosError, ChaosParams, TextMode, DEFAULT_RATE, DEFAULT_SEED};

use crate::error::Result;

/// Configuration for engines built by a [`ChaosFactory`](crate::ChaosFactory).
///
/// Every field is optional when loaded from JSON:
///
/// ```json
/// { "seed": 0.35461234, "rate": 3.9999,
///   "reject_degenerate_seeds": true, "text_mode": "utf8" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Initial state, strictly inside `(0, 1)`.
    pub seed: f64,
    /// Growth rate, inside `(0, 4)`.
    pub rate: f64,
    /// Refuse seeds whose orbit collapses onto a short cycle. When off, such
    /// seeds are accepted with a warning.
    pub reject_degenerate_seeds: bool,
    /// How text is turned into bytes before masking.
    pub text_mode: TextMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rate: DEFAULT_RATE,
            reject_degenerate_seeds: true,
            text_mode: TextMode::Utf8,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Default configuration with a different seed.
    pub fn with_seed(seed: f64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Validate and produce generator parameters.
    pub fn params(&self) -> Result<ChaosParams> {
        if !self.reject_degenerate_seeds {
            let params = ChaosParams::new(self.seed, self.rate)?;
            if let Err(ChaosError::DegenerateSeed { reason, .. }) = params.check_orbit() {
                tracing::warn!(seed = self.seed, rate = self.rate, reason, "accepting degenerate seed");
            }
            return Ok(params);
        }

        ChaosParams::strict(self.seed, self.rate).map_err(|e| {
            if let ChaosError::DegenerateSeed { reason, .. } = &e {
                tracing::warn!(seed = self.seed, rate = self.rate, reason, "rejected degenerate seed");
            }
            e.into()
        })
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<()> {
        self.params().map(|_| ())
    }
}
