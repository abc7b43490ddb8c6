//! Per-tick sampling for visual effects.

use crate::engine::{ChaosEngine, ChaosSnapshot};

/// Advances an engine once per tick and yields the resulting snapshot.
///
/// Endless; bound it with `take` or drive it from a timer.
pub struct Pulse<'a> {
    engine: &'a mut ChaosEngine,
}

impl Pulse<'_> {
    /// Advance once and report the new state.
    pub fn tick(&mut self) -> ChaosSnapshot {
        self.engine.next();
        self.engine.current_state()
    }

    /// Advance once and map the new state onto `[min, max]`.
    pub fn tick_scaled(&mut self, min: f64, max: f64) -> f64 {
        self.tick().scaled(min, max)
    }
}

impl Iterator for Pulse<'_> {
    type Item = ChaosSnapshot;

    fn next(&mut self) -> Option<ChaosSnapshot> {
        Some(self.tick())
    }
}

impl ChaosEngine {
    /// Drive animation parameters from the current position.
    pub fn pulse(&mut self) -> Pulse<'_> {
        Pulse { engine: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_matches_sequence() {
        let mut a = ChaosEngine::default();
        let states: Vec<f64> = a.pulse().take(5).map(|s| s.x).collect();

        let mut b = ChaosEngine::default();
        assert_eq!(states, b.sequence(5));
    }

    #[test]
    fn test_tick_scaled_in_range() {
        let mut engine = ChaosEngine::default();
        let mut pulse = engine.pulse();
        for _ in 0..1000 {
            let v = pulse.tick_scaled(-2.0, 2.0);
            assert!((-2.0..=2.0).contains(&v));
        }
    }

    #[test]
    fn test_pulse_leaves_engine_advanced() {
        let mut engine = ChaosEngine::default();
        let last = engine.pulse().take(3).last().unwrap();
        assert_eq!(engine.current_state(), last);
    }
}
