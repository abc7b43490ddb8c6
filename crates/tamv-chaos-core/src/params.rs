//! Generator parameters: seed, growth rate, and their validation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ChaosError, Result};

/// Seed used when none is configured.
pub const DEFAULT_SEED: f64 = 0.35461234;

/// Growth rate used when none is configured. Close to 4, where the map is chaotic.
pub const DEFAULT_RATE: f64 = 3.9999;

/// Exclusive upper bound on the growth rate.
///
/// At exactly 4 a state of 0.5 maps to 1 and the orbit sticks at 0 from then
/// on, which the probe cannot see if it happens late in a long run.
pub const MAX_RATE: f64 = 4.0;

/// Number of steps the degeneracy probe runs.
pub const PROBE_STEPS: usize = 64;

/// Longest cycle the degeneracy probe looks for.
pub const PROBE_MAX_PERIOD: usize = 8;

/// Consecutive repeats at one period that mark the orbit as settled.
const PROBE_WINDOW: usize = 2 * PROBE_MAX_PERIOD;

const PROBE_TOLERANCE: f64 = 1e-9;

/// Seeds [`ChaosParams::random`] draws before giving up on a rate.
pub const RANDOM_SEED_ATTEMPTS: usize = 1024;

/// Validated parameters for a [`ChaosEngine`](crate::ChaosEngine).
///
/// `seed` is strictly inside `(0, 1)` and `rate` is inside `(0, 4)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParamsRepr", into = "ParamsRepr")]
pub struct ChaosParams {
    seed: f64,
    rate: f64,
}

#[derive(Serialize, Deserialize)]
struct ParamsRepr {
    seed: f64,
    rate: f64,
}

impl TryFrom<ParamsRepr> for ChaosParams {
    type Error = ChaosError;

    fn try_from(repr: ParamsRepr) -> Result<Self> {
        Self::new(repr.seed, repr.rate)
    }
}

impl From<ChaosParams> for ParamsRepr {
    fn from(params: ChaosParams) -> Self {
        Self {
            seed: params.seed,
            rate: params.rate,
        }
    }
}

impl ChaosParams {
    /// Create parameters, checking that the seed and rate are in range.
    ///
    /// This does not probe the orbit; see [`ChaosParams::strict`].
    pub fn new(seed: f64, rate: f64) -> Result<Self> {
        if !seed.is_finite() || seed <= 0.0 || seed >= 1.0 {
            return Err(ChaosError::InvalidSeed(seed));
        }
        if !rate.is_finite() || rate <= 0.0 || rate >= MAX_RATE {
            return Err(ChaosError::InvalidRate(rate));
        }
        Ok(Self { seed, rate })
    }

    /// Create parameters and reject seeds whose orbit collapses.
    pub fn strict(seed: f64, rate: f64) -> Result<Self> {
        let params = Self::new(seed, rate)?;
        params.check_orbit()?;
        Ok(params)
    }

    /// Parameters with the given seed at the default rate.
    pub fn with_seed(seed: f64) -> Result<Self> {
        Self::strict(seed, DEFAULT_RATE)
    }

    /// Draw a random seed at the given rate whose orbit passes the probe.
    ///
    /// Gives up after [`RANDOM_SEED_ATTEMPTS`] draws, which happens at rates
    /// where every orbit settles (any rate below 3, for instance).
    pub fn random(rate: f64) -> Result<Self> {
        let mut rng = rand::thread_rng();
        let mut last = None;
        for _ in 0..RANDOM_SEED_ATTEMPTS {
            let seed: f64 = rng.gen_range(f64::EPSILON..1.0);
            match Self::strict(seed, rate) {
                Ok(params) => return Ok(params),
                Err(e @ ChaosError::DegenerateSeed { .. }) => last = Some(e),
                Err(e) => return Err(e),
            }
        }
        Err(last.unwrap_or(ChaosError::InvalidRate(rate)))
    }

    /// The initial state.
    pub const fn seed(&self) -> f64 {
        self.seed
    }

    /// The growth rate `r`.
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Run the orbit for [`PROBE_STEPS`] steps and reject it if it leaves
    /// `(0, 1)` or settles onto a cycle of period at most [`PROBE_MAX_PERIOD`].
    ///
    /// An orbit has settled when, somewhere in the probe, 16 consecutive
    /// states each match the state `p` steps earlier to within `1e-9`. This
    /// catches seeds on a cycle, seeds that land on one after a few steps,
    /// and rates whose cycles attract every orbit (`r = 2.5` settles on `0.6`).
    pub fn check_orbit(&self) -> Result<()> {
        let mut orbit = [0.0f64; PROBE_STEPS];
        let mut x = self.seed;
        for slot in orbit.iter_mut() {
            x = self.rate * x * (1.0 - x);
            if !x.is_finite() || x <= 0.0 || x >= 1.0 {
                return Err(self.degenerate("orbit leaves the unit interval"));
            }
            *slot = x;
        }

        for period in 1..=PROBE_MAX_PERIOD {
            let mut run = 0;
            for (later, earlier) in orbit[period..].iter().zip(orbit.iter()) {
                if (later - earlier).abs() < PROBE_TOLERANCE {
                    run += 1;
                    if run >= PROBE_WINDOW {
                        return Err(self.degenerate("orbit settles onto a short cycle"));
                    }
                } else {
                    run = 0;
                }
            }
        }

        Ok(())
    }

    fn degenerate(&self, reason: &'static str) -> ChaosError {
        ChaosError::DegenerateSeed {
            seed: self.seed,
            rate: self.rate,
            reason,
        }
    }
}

impl Default for ChaosParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rate: DEFAULT_RATE,
        }
    }
}
